//! Bridge between the UI thread and the backend worker that talks to the
//! remote user store.

pub mod commands;
pub mod runtime;
