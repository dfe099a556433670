//! Scenario tests for filtering and classification through the public API,
//! using tasks and saved filters in their persisted JSON form.

use bruh_engine_rs::filter::{self, FilterEngine, FilterError, SmartFilterConfig};
use bruh_engine_rs::matrix::{self, Quadrant};
use bruh_model_rs::models::Task;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tasks(json: &str) -> Vec<Task> {
    serde_json::from_str(json).expect("valid task fixture")
}

fn config(json: &str) -> SmartFilterConfig {
    serde_json::from_str(json).expect("valid filter fixture")
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.clone()).collect()
}

const BACKLOG: &str = r#"[
    {"id": "report", "priority": "urgent", "status": "in_progress", "due_date": "2024-06-01", "estimated_minutes": 90, "list_id": "work", "created_at": "2024-05-20T10:00:00Z"},
    {"id": "dentist", "priority": "high", "due_date": "2024-06-12", "list_id": "home", "created_at": "2024-05-21T10:00:00Z"},
    {"id": "emails", "priority": "normal", "due_date": "2024-06-02", "estimated_minutes": 15, "list_id": "work", "created_at": "2024-05-22T10:00:00Z"},
    {"id": "garage", "priority": "low", "created_at": "2024-05-23T10:00:00Z"},
    {"id": "taxes", "priority": "high", "status": "waiting", "due_date": "2024-05-28", "is_recurring": true, "created_at": "2024-05-24T10:00:00Z"},
    {"id": "read", "priority": "low", "status": "completed", "estimated_minutes": 30, "created_at": "2024-05-25T10:00:00Z"}
]"#;

#[test]
fn test_low_priority_filter_returns_single_task() {
    let tasks = tasks(
        r#"[{"id": "t1", "priority": "low", "due_date": "2099-01-01", "created_at": "2024-05-01T00:00:00Z"}]"#,
    );
    let config = config(
        r#"{"conditions": [{"field": "priority", "operator": "eq", "value": "low"}], "logic": "and"}"#,
    );

    let result = filter::evaluate(&tasks, &config, date(2024, 6, 1)).unwrap();
    assert_eq!(ids(&result), vec!["t1"]);
}

#[test]
fn test_due_today_uses_reference_date() {
    let tasks = tasks(BACKLOG);
    let config = config(
        r#"{"conditions": [{"field": "due_date", "operator": "eq", "value": "today"}], "logic": "and"}"#,
    );

    let result = filter::evaluate(&tasks, &config, date(2024, 6, 1)).unwrap();
    assert_eq!(ids(&result), vec!["report"]);

    let result = filter::evaluate(&tasks, &config, date(2024, 6, 2)).unwrap();
    assert_eq!(ids(&result), vec!["emails"]);
}

#[test]
fn test_status_is_null_matches_nothing() {
    let tasks = tasks(BACKLOG);
    let config = config(
        r#"{"conditions": [{"field": "status", "operator": "is_null", "value": null}], "logic": "and"}"#,
    );

    assert!(filter::evaluate(&tasks, &config, date(2024, 6, 1))
        .unwrap()
        .is_empty());
}

#[test]
fn test_sort_by_estimate_puts_unknown_last() {
    let tasks = tasks(
        r#"[
            {"id": "unknown", "estimated_minutes": null, "created_at": "2024-05-01T00:00:00Z"},
            {"id": "quick", "estimated_minutes": 5, "created_at": "2024-05-02T00:00:00Z"}
        ]"#,
    );
    let config = config(
        r#"{"conditions": [], "logic": "and", "sort": {"field": "estimated_minutes", "direction": "asc"}}"#,
    );

    let result = filter::evaluate(&tasks, &config, date(2024, 6, 1)).unwrap();
    assert_eq!(ids(&result), vec!["quick", "unknown"]);
}

#[test]
fn test_open_work_due_this_week() {
    let tasks = tasks(BACKLOG);
    let config = config(
        r#"{
            "conditions": [
                {"field": "status", "operator": "in", "value": ["pending", "in_progress", "waiting"]},
                {"field": "due_date", "operator": "lte", "value": "end_of_week"}
            ],
            "logic": "and",
            "sort": {"field": "due_date", "direction": "asc"}
        }"#,
    );

    // Saturday 2024-06-01: the week ends on Sunday 2024-06-02
    let result = filter::evaluate(&tasks, &config, date(2024, 6, 1)).unwrap();
    assert_eq!(ids(&result), vec!["taxes", "report", "emails"]);
}

#[test]
fn test_quick_wins_or_recurring() {
    let tasks = tasks(BACKLOG);
    let config = config(
        r#"{
            "conditions": [
                {"field": "estimated_minutes", "operator": "lte", "value": 15},
                {"field": "is_recurring", "operator": "eq", "value": true}
            ],
            "logic": "or"
        }"#,
    );

    let result = filter::evaluate(&tasks, &config, date(2024, 6, 1)).unwrap();
    assert_eq!(ids(&result), vec!["taxes", "emails"]);
}

#[test]
fn test_empty_and_returns_everything_newest_first() {
    let tasks = tasks(BACKLOG);
    let config = config(r#"{"conditions": [], "logic": "and"}"#);

    let result = filter::evaluate(&tasks, &config, date(2024, 6, 1)).unwrap();
    assert_eq!(
        ids(&result),
        vec!["read", "taxes", "garage", "emails", "dentist", "report"]
    );
}

#[test]
fn test_corrupted_saved_filter_is_rejected() {
    let tasks = tasks(BACKLOG);

    let unknown_field = config(
        r#"{"conditions": [{"field": "assignee", "operator": "eq", "value": "me"}], "logic": "and"}"#,
    );
    assert!(matches!(
        filter::evaluate(&tasks, &unknown_field, date(2024, 6, 1)),
        Err(FilterError::InvalidField { .. })
    ));

    let wrong_operator = config(
        r#"{"conditions": [{"field": "has_subtasks", "operator": "gte", "value": true}], "logic": "and"}"#,
    );
    assert!(matches!(
        FilterEngine::compile(&wrong_operator),
        Err(FilterError::InvalidOperator { .. })
    ));
}

#[test]
fn test_saved_filter_roundtrips() {
    let original = r#"{"conditions":[{"field":"list_id","operator":"in","value":["work","home"]}],"logic":"or","sort":{"field":"priority","direction":"desc"}}"#;
    let parsed = config(original);
    assert_eq!(serde_json::to_string(&parsed).unwrap(), original);
}

#[test]
fn test_matrix_board() {
    let tasks = tasks(BACKLOG);
    let board = matrix::classify_all(&tasks, date(2024, 6, 1));

    let bucket = |q: Quadrant| -> Vec<String> { board[&q].iter().map(|t| t.id.clone()).collect() };

    assert_eq!(bucket(Quadrant::Do), vec!["taxes", "report"]);
    assert_eq!(bucket(Quadrant::Schedule), vec!["dentist"]);
    assert_eq!(bucket(Quadrant::Delegate), vec!["emails"]);
    assert_eq!(bucket(Quadrant::Eliminate), vec!["garage", "read"]);
}

#[test]
fn test_urgent_task_without_date_is_do() {
    let tasks = tasks(r#"[{"id": "fire", "priority": "urgent", "due_date": null, "created_at": "2024-05-01T00:00:00Z"}]"#);
    assert_eq!(matrix::classify(&tasks[0], date(2024, 6, 1)), Quadrant::Do);
}
