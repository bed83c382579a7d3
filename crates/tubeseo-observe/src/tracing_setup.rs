//! Process-wide logging for the `tubeseo` binary.
//!
//! Log lines go to stderr so `--json` output on stdout stays parseable.
//! With OpenTelemetry enabled, every span is also exported as an OTel span
//! to stdout, which is mostly useful together with `-v`.
//!
//! ```no_run
//! tubeseo_observe::tracing_setup::init_tracing("info,tubeseo=debug", false).unwrap();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Tracer provider installed by [`init_tracing`], flushed by [`shutdown_tracing`].
static OTEL_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Level filter from `RUST_LOG`, or `default_directives` when it is unset or invalid.
pub fn build_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing(
    default_directives: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let otel_layer = enable_otel.then(|| {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let layer = tracing_opentelemetry::layer().with_tracer(provider.tracer("tubeseo"));
        opentelemetry::global::set_tracer_provider(provider.clone());
        let _ = OTEL_PROVIDER.set(provider);
        layer
    });

    let span_events = if enable_otel {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(build_filter(default_directives))
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;
    Ok(())
}

/// Flush exported spans. Does nothing when OpenTelemetry was never enabled.
pub fn shutdown_tracing() {
    let Some(provider) = OTEL_PROVIDER.get() else {
        return;
    };
    if let Err(e) = provider.shutdown() {
        eprintln!("warning: failed to flush OpenTelemetry spans: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_falls_back_to_defaults() {
        // SAFETY: test-only env manipulation; no other test in this crate reads RUST_LOG.
        unsafe { std::env::remove_var("RUST_LOG") };
        let rendered = build_filter("warn,tubeseo=debug").to_string();
        assert!(rendered.contains("warn"));
        assert!(rendered.contains("tubeseo=debug"));
    }

    #[test]
    fn test_shutdown_without_otel_is_noop() {
        shutdown_tracing();
    }
}
