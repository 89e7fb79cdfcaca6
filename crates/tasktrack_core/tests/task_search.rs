use tasktrack_core::{edit_distance, rank, search_tasks, SearchConfig, Task};
use uuid::Uuid;

fn tasks(titles: &[&str]) -> Vec<Task> {
    let owner = Uuid::new_v4();
    titles
        .iter()
        .map(|title| Task::new(Uuid::new_v4(), owner, *title).unwrap())
        .collect()
}

#[test]
fn rank_orders_tasks_by_title_distance() {
    let tasks = tasks(&["xyz", "tasks", "task"]);
    let ranked = rank("task", &tasks);

    let titles: Vec<&str> = ranked.iter().map(|hit| hit.item.title.as_str()).collect();
    let distances: Vec<usize> = ranked.iter().map(|hit| hit.distance).collect();
    assert_eq!(titles, vec!["task", "tasks", "xyz"]);
    assert_eq!(distances, vec![0, 1, 4]);
}

#[test]
fn rank_ignores_status_and_priority() {
    let mut tasks = tasks(&["call mom", "call mum"]);
    tasks[0].status = tasktrack_core::TaskStatus::Done;
    tasks[1].priority = tasktrack_core::TaskPriority::High;

    let ranked = rank("call mom", &tasks);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].item.id, tasks[0].id);
}

#[test]
fn search_handles_cyrillic_titles_case_insensitively() {
    let tasks = tasks(&["Купить молоко", "Купить хлеб", "Позвонить маме"]);
    let hits = search_tasks(&tasks, "купить молоко", &SearchConfig::default());

    assert_eq!(hits[0].item.title, "Купить молоко");
    assert_eq!(hits[0].distance, 0);
    assert!(hits
        .iter()
        .all(|hit| hit.item.title != "Позвонить маме"));
}

#[test]
fn search_applies_default_threshold_of_five_edits() {
    let tasks = tasks(&["abcdefgh", "abcxxxxx", "abxxxxxx"]);
    assert_eq!(edit_distance("abcdefgh", "abcxxxxx"), 5);
    assert_eq!(edit_distance("abcdefgh", "abxxxxxx"), 6);

    let hits = search_tasks(&tasks, "abcdefgh", &SearchConfig::default());
    let titles: Vec<&str> = hits.iter().map(|hit| hit.item.title.as_str()).collect();
    assert_eq!(titles, vec!["abcdefgh", "abcxxxxx"]);
}

#[test]
fn search_with_no_tasks_is_empty() {
    let tasks: Vec<Task> = Vec::new();
    assert!(search_tasks(&tasks, "anything", &SearchConfig::default()).is_empty());
}

#[test]
fn search_is_deterministic() {
    let tasks = tasks(&["pay rent", "pay bills", "pat dog", "pay tax"]);
    let config = SearchConfig::default();

    let first: Vec<_> = search_tasks(&tasks, "pay", &config)
        .iter()
        .map(|hit| (hit.item.id, hit.distance))
        .collect();
    for _ in 0..3 {
        let again: Vec<_> = search_tasks(&tasks, "pay", &config)
            .iter()
            .map(|hit| (hit.item.id, hit.distance))
            .collect();
        assert_eq!(again, first);
    }
}
