//! Filesystem helpers: data directory layout and thumbnail output.

use std::path::{Path, PathBuf};

use tubeseo_types::thumbnail::ThumbnailImage;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TUBESEO_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `TUBESEO_DATA_DIR` environment variable
/// 2. `~/.tubeseo`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".tubeseo");
    }

    // Last resort: current directory
    PathBuf::from(".tubeseo")
}

/// Create the data directory if it does not exist.
pub async fn ensure_data_dir(data_dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(data_dir).await
}

/// Default output file for a thumbnail: `thumbnail.<ext>` in the working directory.
pub fn default_thumbnail_path(image: &ThumbnailImage) -> PathBuf {
    PathBuf::from(format!("thumbnail.{}", image.file_extension()))
}

/// Decode `image` and write the raw bytes to `path`, creating parent
/// directories as needed. Returns the number of bytes written.
pub async fn save_thumbnail(path: &Path, image: &ThumbnailImage) -> std::io::Result<usize> {
    let bytes = image
        .decode()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &bytes).await?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> ThumbnailImage {
        ThumbnailImage {
            // 8-byte PNG signature
            data: "iVBORw0KGgo=".to_string(),
            mime_type: "image/png".to_string(),
        }
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/test-tubeseo");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-tubeseo"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }

    #[test]
    fn test_default_thumbnail_path_uses_extension() {
        assert_eq!(default_thumbnail_path(&png()), PathBuf::from("thumbnail.png"));
    }

    #[tokio::test]
    async fn test_save_thumbnail_writes_decoded_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out").join("thumb.png");

        let written = save_thumbnail(&path, &png()).await.unwrap();
        assert_eq!(written, 8);

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[tokio::test]
    async fn test_save_thumbnail_rejects_bad_base64() {
        let tmp = tempfile::tempdir().unwrap();
        let image = ThumbnailImage {
            data: "not base64 !!".to_string(),
            mime_type: "image/png".to_string(),
        };
        let err = save_thumbnail(&tmp.path().join("x.png"), &image)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(!tmp.path().join("x.png").exists());
    }

    #[tokio::test]
    async fn test_ensure_data_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_data_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }
}
