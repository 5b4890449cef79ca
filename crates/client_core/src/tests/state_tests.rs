use super::*;

fn record(id: i64, first: &str, last: &str, email: &str) -> UserRecord {
    UserRecord {
        id: UserId(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
    }
}

fn seeded_state() -> DirectoryState {
    let mut state = DirectoryState::new();
    state.replace_users(vec![
        record(3, "A", "B", "a@b.com"),
        record(1, "C", "D", "c@d.com"),
        record(2, "E", "F", "e@f.com"),
    ]);
    state
}

#[test]
fn list_replaces_mirror_in_response_order() {
    let mut state = DirectoryState::new();
    state.replace_users(vec![record(9, "X", "Y", "x@y.com")]);

    let response = vec![record(2, "A", "B", "a@b.com"), record(1, "C", "D", "c@d.com")];
    state.replace_users(response.clone());

    assert_eq!(state.users, response);
}

#[test]
fn create_appends_returned_record_and_clears_draft() {
    let mut state = seeded_state();
    state.draft = UserDraft {
        first_name: "New".to_string(),
        last_name: "User".to_string(),
        email: "new@user.com".to_string(),
    };
    let before = state.users.clone();

    state.fold_created(record(4, "New", "User", "new@user.com"));

    assert_eq!(state.users.len(), before.len() + 1);
    assert_eq!(state.users[..before.len()], before[..]);
    assert_eq!(state.users.last(), Some(&record(4, "New", "User", "new@user.com")));
    assert_eq!(state.draft, UserDraft::default());
}

#[test]
fn update_replaces_exactly_the_matching_record() {
    let mut state = seeded_state();
    state.begin_edit(UserId(1));

    state.fold_updated(record(1, "C", "D", "changed@d.com"));

    assert_eq!(state.users[0], record(3, "A", "B", "a@b.com"));
    assert_eq!(state.users[1], record(1, "C", "D", "changed@d.com"));
    assert_eq!(state.users[2], record(2, "E", "F", "e@f.com"));
    assert_eq!(state.mode, FormMode::Creating);
    assert_eq!(state.draft, UserDraft::default());
}

#[test]
fn delete_removes_by_id_and_keeps_relative_order() {
    let mut state = seeded_state();

    state.fold_deleted(UserId(1));

    assert_eq!(
        state.users,
        vec![record(3, "A", "B", "a@b.com"), record(2, "E", "F", "e@f.com")]
    );
}

#[test]
fn delete_of_the_record_being_edited_abandons_the_edit() {
    let mut state = seeded_state();
    state.begin_edit(UserId(2));

    state.fold_deleted(UserId(2));

    assert_eq!(state.mode, FormMode::Creating);
    assert_eq!(state.draft, UserDraft::default());
}

#[test]
fn begin_edit_copies_fields_and_targets_that_id() {
    let mut state = seeded_state();

    state.begin_edit(UserId(2));

    assert_eq!(state.mode, FormMode::Editing(UserId(2)));
    assert_eq!(
        state.draft,
        UserDraft {
            first_name: "E".to_string(),
            last_name: "F".to_string(),
            email: "e@f.com".to_string(),
        }
    );
}

#[test]
fn begin_edit_on_unknown_id_is_a_no_op() {
    let mut state = seeded_state();

    state.begin_edit(UserId(99));

    assert_eq!(state.mode, FormMode::Creating);
    assert_eq!(state.draft, UserDraft::default());
}

#[test]
fn cancel_edit_returns_to_creating_with_an_empty_draft() {
    let mut state = seeded_state();
    state.begin_edit(UserId(3));
    assert!(state.is_editing());

    state.cancel_edit();

    assert!(!state.is_editing());
    assert_eq!(state.draft, UserDraft::default());
    // The mirrored list is untouched by local form actions.
    assert_eq!(state.users.len(), 3);
}
