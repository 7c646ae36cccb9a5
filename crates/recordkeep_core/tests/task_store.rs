use recordkeep_core::{StoreError, StoreErrorKind, TaskFields, TaskService, TaskStore};
use std::sync::Arc;

fn service() -> TaskService {
    TaskService::new(Arc::new(TaskStore::builder().name("tasks").build()))
}

#[test]
fn empty_title_is_rejected_and_store_stays_empty() {
    let tasks = service();

    let err = tasks.add_task("", "x").unwrap_err();
    match err {
        StoreError::Validation(ref v) => assert_eq!(v.reason(), "title cannot be empty"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(tasks.store().is_empty());
    assert_eq!(tasks.store().next_id(), 1);
}

#[test]
fn ids_are_assigned_in_creation_order() {
    let tasks = service();

    let milk = tasks.add_task("Buy milk", "").unwrap();
    let dog = tasks.add_task("Walk dog", "").unwrap();

    assert_eq!(milk.id, 1);
    assert_eq!(dog.id, 2);
    assert!(!milk.fields.done);
    assert_eq!(milk.created_at, milk.updated_at);
}

#[test]
fn deleted_id_is_gone_and_never_reused() {
    let tasks = service();
    tasks.add_task("Buy milk", "").unwrap();
    tasks.add_task("Walk dog", "").unwrap();

    tasks.delete_task(1).unwrap();
    assert_eq!(tasks.get_task(1).unwrap_err(), StoreError::NotFound(1));
    assert!(!tasks.store().contains(1));
    assert!(tasks.store().contains(2));

    let remaining = tasks.list_tasks(None);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);

    let next = tasks.add_task("Water plants", "").unwrap();
    assert_eq!(next.id, 3);
    assert_eq!(tasks.get_task(1).unwrap_err().kind(), StoreErrorKind::NotFound);
}

#[test]
fn double_delete_and_unknown_ids_are_not_found() {
    let tasks = service();
    let task = tasks.add_task("once", "").unwrap();

    tasks.delete_task(task.id).unwrap();
    assert_eq!(
        tasks.delete_task(task.id).unwrap_err(),
        StoreError::NotFound(task.id)
    );
    assert_eq!(tasks.delete_task(42).unwrap_err(), StoreError::NotFound(42));
    assert_eq!(tasks.get_task(0).unwrap_err(), StoreError::NotFound(0));
}

#[test]
fn update_preserves_identity_and_refreshes_marker() {
    let tasks = service();
    let original = tasks.add_task("draft", "first").unwrap();

    let updated = tasks
        .update_task(original.id, "final", "second", true)
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
    assert_eq!(updated.fields.title, "final");
    assert_eq!(updated.fields.description, "second");
    assert!(updated.fields.done);
    assert_eq!(tasks.get_task(original.id).unwrap(), updated);
}

#[test]
fn invalid_update_is_rejected_before_lookup_and_leaves_state_unchanged() {
    let tasks = service();
    let task = tasks.add_task("keep me", "").unwrap();
    let before = tasks.list_tasks(None);

    let err = tasks.update_task(task.id, "  ", "", true).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let missing_and_invalid = tasks.update_task(99, "", "", false).unwrap_err();
    assert!(matches!(missing_and_invalid, StoreError::Validation(_)));

    let missing = tasks.update_task(99, "valid", "", false).unwrap_err();
    assert_eq!(missing, StoreError::NotFound(99));

    assert_eq!(tasks.list_tasks(None), before);
    assert_eq!(tasks.store().next_id(), 2);
}

#[test]
fn list_filters_by_done_status() {
    let tasks = service();
    let a = tasks.add_task("a", "").unwrap();
    let b = tasks.add_task("b", "").unwrap();
    let c = tasks.add_task("c", "").unwrap();
    tasks.set_done(b.id, true).unwrap();

    let done: Vec<_> = tasks.list_tasks(Some(true)).iter().map(|t| t.id).collect();
    let open: Vec<_> = tasks.list_tasks(Some(false)).iter().map(|t| t.id).collect();
    let all: Vec<_> = tasks.list_tasks(None).iter().map(|t| t.id).collect();

    assert_eq!(done, vec![b.id]);
    assert_eq!(open, vec![a.id, c.id]);
    assert_eq!(all, vec![a.id, b.id, c.id]);
}

#[test]
fn list_on_empty_store_or_without_matches_is_empty() {
    let tasks = service();
    assert!(tasks.list_tasks(None).is_empty());

    tasks.add_task("open", "").unwrap();
    assert!(tasks.list_tasks(Some(true)).is_empty());
}

#[test]
fn list_returns_snapshot_not_live_view() {
    let tasks = service();
    let task = tasks.add_task("before", "").unwrap();
    let snapshot = tasks.list_tasks(None);

    tasks.update_task(task.id, "after", "", false).unwrap();
    tasks.add_task("new", "").unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].fields.title, "before");
}

#[test]
fn set_done_keeps_other_fields() {
    let tasks = service();
    let task = tasks.add_task("title", "description").unwrap();

    let done = tasks.set_done(task.id, true).unwrap();
    assert_eq!(
        done.fields,
        TaskFields {
            title: "title".to_string(),
            description: "description".to_string(),
            done: true,
        }
    );
    assert_eq!(tasks.set_done(77, true).unwrap_err(), StoreError::NotFound(77));
}
