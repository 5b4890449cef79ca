//! Wire types for the remote user store's JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// A user exactly as the remote store returns it. The id is assigned by the
/// store and immutable once assigned; the client never invents one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Request body for create and update, and the form draft while typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserDraft {
    /// All required fields carry a non-blank value. The submit control stays
    /// disabled until this holds; no further validation exists client-side.
    pub fn is_complete(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && !self.email.trim().is_empty()
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(record: &UserRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_matches_store_wire_shape() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":1,"first_name":"A","last_name":"B","email":"a@b.com"}"#,
        )
        .expect("record json");
        assert_eq!(record.id, UserId(1));
        assert_eq!(record.first_name, "A");
        assert_eq!(record.email, "a@b.com");
    }

    #[test]
    fn draft_serializes_without_an_id_field() {
        let draft = UserDraft {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
        };
        let value = serde_json::to_value(&draft).expect("draft json");
        assert!(value.get("id").is_none());
        assert_eq!(value["first_name"], "A");
    }

    #[test]
    fn blank_or_whitespace_fields_are_incomplete() {
        let mut draft = UserDraft::default();
        assert!(!draft.is_complete());
        draft.first_name = "A".to_string();
        draft.last_name = "  ".to_string();
        draft.email = "a@b.com".to_string();
        assert!(!draft.is_complete());
        draft.last_name = "B".to_string();
        assert!(draft.is_complete());
    }
}
