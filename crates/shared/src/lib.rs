//! Types shared between the user directory client library and the desktop app.

pub mod domain;
pub mod protocol;
