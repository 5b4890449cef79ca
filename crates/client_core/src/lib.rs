//! Client core for the user directory: access to the remote user store plus
//! the view state the desktop app folds store responses into.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::UserId,
    protocol::{UserDraft, UserRecord},
};
use thiserror::Error;
use tracing::debug;

pub mod state;

pub use state::{DirectoryState, FormMode};

/// Failure talking to the remote user store. Transport failures and
/// non-success statuses are deliberately not distinguished; the UI shows one
/// generic notice per operation either way.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to list users: {0}")]
    List(#[source] reqwest::Error),
    #[error("failed to create user: {0}")]
    Create(#[source] reqwest::Error),
    #[error("failed to update user {id}: {source}")]
    Update {
        id: i64,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to delete user {id}: {source}")]
    Delete {
        id: i64,
        #[source]
        source: reqwest::Error,
    },
}

/// Seam over the remote user store so the backend worker and tests can run
/// against a double.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;
    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, StoreError>;
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UserRecord, StoreError>;
    async fn delete_user(&self, id: UserId) -> Result<(), StoreError>;
}

/// reqwest-backed client for the store's four endpoints. Each request runs
/// exactly once per call: no retry, no timeout configuration, no
/// cancellation.
pub struct HttpUserStore {
    http: Client,
    base_url: String,
}

impl HttpUserStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/users/", self.base_url)
    }

    fn record_url(&self, id: UserId) -> String {
        format!("{}/api/users/{}/", self.base_url, id.0)
    }
}

#[async_trait]
impl UserStore for HttpUserStore {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        debug!(url = %self.collection_url(), "store: list users");
        let response = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(StoreError::List)?;
        response.json().await.map_err(StoreError::List)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, StoreError> {
        debug!(url = %self.collection_url(), "store: create user");
        let response = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(StoreError::Create)?;
        response.json().await.map_err(StoreError::Create)
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UserRecord, StoreError> {
        debug!(user_id = id.0, "store: update user");
        let wrap = |source| StoreError::Update { id: id.0, source };
        let response = self
            .http
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(wrap)?;
        response.json().await.map_err(wrap)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), StoreError> {
        debug!(user_id = id.0, "store: delete user");
        self.http
            .delete(self.record_url(id))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| StoreError::Delete { id: id.0, source })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
