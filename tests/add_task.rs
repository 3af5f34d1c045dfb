mod common;

use std::sync::Arc;

use common::{wait_until, GatedRepo};
use todometer::domain::{Tag, TaskDraft};
use todometer::repo::TodoRepository;
use todometer::ui::addtask::{AddTaskEvent, AddTaskViewModel};
use todometer::ui::mvi::ViewModel;

#[tokio::test]
async fn empty_title_is_rejected_locally() {
    let repo = Arc::new(GatedRepo::new());
    let vm = AddTaskViewModel::new(Arc::clone(&repo));

    vm.handle_event(AddTaskEvent::InsertTask {
        draft: TaskDraft::titled("  "),
    });

    let state = vm.state();
    assert!(state.title_input_error);
    assert!(!state.is_adding);
    assert_eq!(repo.write_calls(), 0);
    assert!(repo.store().snapshot().tasks.is_empty());
}

#[tokio::test]
async fn task_lands_in_selected_list_with_checklist() {
    let repo = Arc::new(GatedRepo::new());
    let list = repo.store().insert_task_list("Trip".into()).await.unwrap();
    repo.store().set_selected_task_list(Some(list)).await.unwrap();

    let vm = AddTaskViewModel::new(Arc::clone(&repo));
    vm.handle_event(AddTaskEvent::AddChecklistItem {
        text: "passport".into(),
    });
    vm.handle_event(AddTaskEvent::AddChecklistItem { text: " ".into() });
    vm.handle_event(AddTaskEvent::AddChecklistItem {
        text: "tickets".into(),
    });
    vm.handle_event(AddTaskEvent::RemoveChecklistItem { index: 1 });
    assert_eq!(vm.state().checklist, ["passport"]);

    vm.handle_event(AddTaskEvent::InsertTask {
        draft: TaskDraft {
            tag: Tag::Blue,
            ..TaskDraft::titled("Pack")
        },
    });
    let done = wait_until(&mut vm.subscribe(), |s| !s.is_adding).await;
    assert!(done.is_added);
    assert!(done.checklist.is_empty());

    let data = repo.store().snapshot();
    let task = data.task(done.task_id.unwrap()).unwrap();
    assert_eq!(task.task_list_id, Some(list));
    assert_eq!(task.tag, Tag::Blue);
    let items = data.checklist_of(task.id);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "passport");
}

#[tokio::test]
async fn identical_inserts_create_distinct_tasks() {
    let repo = Arc::new(GatedRepo::new());
    let vm = AddTaskViewModel::new(Arc::clone(&repo));

    vm.handle_event(AddTaskEvent::InsertTask {
        draft: TaskDraft::titled("Water plants"),
    });
    let first = wait_until(&mut vm.subscribe(), |s| !s.is_adding).await;
    vm.handle_event(AddTaskEvent::InsertTask {
        draft: TaskDraft::titled("Water plants"),
    });
    let second = wait_until(&mut vm.subscribe(), |s| {
        !s.is_adding && s.task_id != first.task_id
    })
    .await;

    assert_ne!(first.task_id, second.task_id);
    assert_eq!(repo.store().snapshot().tasks.len(), 2);
}

#[tokio::test]
async fn failed_insert_leaves_nothing_and_retry_creates_one_task() {
    let repo = Arc::new(GatedRepo::new());
    let vm = AddTaskViewModel::new(Arc::clone(&repo));
    vm.handle_event(AddTaskEvent::AddChecklistItem {
        text: "tent".into(),
    });

    repo.fail_with(todometer::error::ErrorKind::Storage("disk full".into()));
    vm.handle_event(AddTaskEvent::InsertTask {
        draft: TaskDraft::titled("Camp"),
    });
    let failed = wait_until(&mut vm.subscribe(), |s| !s.is_adding).await;
    assert!(failed.error.is_some());
    assert_eq!(failed.checklist, ["tent"]);
    assert_eq!(repo.write_calls(), 1);
    let data = repo.store().snapshot();
    assert!(data.tasks.is_empty());
    assert!(data.checklist_items.is_empty());

    repo.recover();
    vm.handle_event(AddTaskEvent::InsertTask {
        draft: TaskDraft::titled("Camp"),
    });
    let done = wait_until(&mut vm.subscribe(), |s| !s.is_adding).await;
    assert!(done.is_added);
    assert_eq!(repo.write_calls(), 2);

    let data = repo.store().snapshot();
    assert_eq!(data.tasks.len(), 1);
    assert_eq!(data.checklist_of(data.tasks[0].id).len(), 1);
}
