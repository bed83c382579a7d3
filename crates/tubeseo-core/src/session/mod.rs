//! Session state controller: current topic and current content, persisted
//! as a full snapshot on every change.

pub mod controller;

pub use controller::SessionController;
