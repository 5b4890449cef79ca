//! UI layer for the desktop app: the form-and-list shell.

pub mod app;

pub use app::DirectoryApp;
