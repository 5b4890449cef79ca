//! Reducer-style view state for the directory screen: the in-memory mirror
//! of the store's user list, the form draft, and the creating/editing mode.
//!
//! All mutations here are synchronous and local; the caller invokes them
//! only after the corresponding store call has completed, folding the
//! returned record in directly rather than re-fetching. List mutations are
//! keyed by id lookup, never by position, so response ordering never
//! matters. Whatever the store returned is trusted verbatim.

use shared::{
    domain::UserId,
    protocol::{UserDraft, UserRecord},
};

/// Whether form submission issues a create or an update, and which record an
/// update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(UserId),
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub users: Vec<UserRecord>,
    pub draft: UserDraft,
    pub mode: FormMode,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a successful List response: the mirror becomes exactly the
    /// response array, in response order.
    pub fn replace_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
    }

    /// Folds a successful Create response: the returned record (with its
    /// store-assigned id) is appended and the draft resets to empty.
    pub fn fold_created(&mut self, record: UserRecord) {
        self.users.push(record);
        self.draft = UserDraft::default();
    }

    /// Folds a successful Update response: the record with the matching id
    /// is replaced, the draft resets, and the form returns to creating.
    pub fn fold_updated(&mut self, record: UserRecord) {
        if let Some(existing) = self.users.iter_mut().find(|user| user.id == record.id) {
            *existing = record;
        }
        self.draft = UserDraft::default();
        self.mode = FormMode::Creating;
    }

    /// Folds a successful Delete: the record with that id is removed, the
    /// rest keep their relative order. An edit in progress against the
    /// deleted record is abandoned since its target no longer exists.
    pub fn fold_deleted(&mut self, id: UserId) {
        self.users.retain(|user| user.id != id);
        if self.mode == FormMode::Editing(id) {
            self.cancel_edit();
        }
    }

    /// Local only, no store call: copies the record's fields into the draft
    /// and switches to editing it. Unknown ids are ignored.
    pub fn begin_edit(&mut self, id: UserId) {
        if let Some(record) = self.users.iter().find(|user| user.id == id) {
            self.draft = UserDraft::from(record);
            self.mode = FormMode::Editing(id);
        }
    }

    /// Local only: abandons an in-progress edit and empties the draft.
    pub fn cancel_edit(&mut self) {
        self.draft = UserDraft::default();
        self.mode = FormMode::Creating;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
