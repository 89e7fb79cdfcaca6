use tasktrack_core::{
    near_deadline, reminder_payloads_json, Task, TaskPriority, TaskStatus,
    DEFAULT_NEAR_DEADLINE_HORIZON,
};
use uuid::Uuid;

const T: i64 = 1_700_000_000_000;

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let owner = Uuid::parse_str("66666666-7777-4888-9999-aaaaaaaaaaaa").unwrap();
    let mut task = Task::new(id, owner, "ship release").unwrap().with_deadline(T);
    task.status = TaskStatus::InProgress;
    task.priority = TaskPriority::High;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["owner_id"], owner.to_string());
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["deadline"], T);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_deserialization_fills_optional_fields() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "minimal",
        "owner_id": "66666666-7777-4888-9999-aaaaaaaaaaaa"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.status, TaskStatus::New);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.deadline, None);
    assert!(task.validate().is_ok());
}

#[test]
fn reminder_payload_embeds_near_deadline_tasks() {
    let owner = Uuid::new_v4();
    let soon = Task::new(Uuid::new_v4(), owner, "file taxes")
        .unwrap()
        .with_deadline(T + 90 * 60 * 1000);
    let undated = Task::new(Uuid::new_v4(), owner, "someday").unwrap();
    let tasks = vec![soon.clone(), undated];

    let near = near_deadline(&tasks, T, DEFAULT_NEAR_DEADLINE_HORIZON);
    let json = reminder_payloads_json(&near, T).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], soon.id.to_string());
    assert_eq!(items[0]["title"], "file taxes");
    assert_eq!(items[0]["status"], "new");
    assert_eq!(items[0]["priority"], "medium");
    assert_eq!(items[0]["deadline"], T + 90 * 60 * 1000);
    assert_eq!(items[0]["remaining_ms"], 90 * 60 * 1000);
}

#[test]
fn empty_near_deadline_list_renders_empty_array() {
    assert_eq!(reminder_payloads_json(&[], T).unwrap(), "[]");
}
