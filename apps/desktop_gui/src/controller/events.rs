//! UI/backend events and error modeling for the desktop controller.

use shared::{domain::UserId, protocol::UserRecord};

pub enum UiEvent {
    UsersLoaded(Vec<UserRecord>),
    UserCreated(UserRecord),
    UserUpdated(UserRecord),
    UserDeleted(UserId),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CreateUser,
    UpdateUser,
    DeleteUser,
}

impl UiErrorContext {
    /// The generic per-operation notice. Transport failures and non-success
    /// statuses share the same wording; only the operation differs.
    pub fn notice_text(self) -> &'static str {
        match self {
            Self::BackendStartup => "The backend worker failed to start.",
            Self::CreateUser => "There was an error creating the user.",
            Self::UpdateUser => "There was an error updating the user.",
            Self::DeleteUser => "There was an error deleting the user.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        let category = if lower.contains("timeout")
            || lower.contains("timed out")
            || lower.contains("connection")
            || lower.contains("network")
            || lower.contains("dns")
            || lower.contains("unreachable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
