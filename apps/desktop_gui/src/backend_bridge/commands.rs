//! Backend commands queued from UI to backend worker.

use shared::{domain::UserId, protocol::UserDraft};

pub enum BackendCommand {
    LoadUsers,
    CreateUser { draft: UserDraft },
    UpdateUser { id: UserId, draft: UserDraft },
    DeleteUser { id: UserId },
}
