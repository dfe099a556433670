//! Tests for quadrant classification.

use super::*;
use chrono::{Duration, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 6, 1)
}

fn make_task(id: &str, priority: Priority, due: Option<NaiveDate>) -> Task {
    let mut task = Task::new(id, Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    task.priority = priority;
    task.due_date = due;
    task
}

fn in_days(days: i64) -> Option<NaiveDate> {
    Some(today() + Duration::days(days))
}

// ==================== Single Task Tests ====================

#[test]
fn test_urgent_priority_without_date_is_do() {
    let task = make_task("a", Priority::Urgent, None);
    assert_eq!(classify(&task, today()), Quadrant::Do);
}

#[test]
fn test_no_date_normal_priority_is_eliminate() {
    assert_eq!(
        classify(&make_task("a", Priority::Normal, None), today()),
        Quadrant::Eliminate
    );
    assert_eq!(
        classify(&make_task("b", Priority::Low, None), today()),
        Quadrant::Eliminate
    );
}

#[test]
fn test_high_priority_without_date_is_schedule() {
    assert_eq!(
        classify(&make_task("a", Priority::High, None), today()),
        Quadrant::Schedule
    );
}

#[test]
fn test_due_today_is_urgent() {
    let task = make_task("a", Priority::High, in_days(0));
    assert_eq!(classify(&task, today()), Quadrant::Do);
}

#[test]
fn test_window_boundary() {
    assert_eq!(
        classify(&make_task("a", Priority::High, in_days(3)), today()),
        Quadrant::Do
    );
    assert_eq!(
        classify(&make_task("b", Priority::High, in_days(4)), today()),
        Quadrant::Schedule
    );
}

#[test]
fn test_overdue_low_priority_is_delegate() {
    let task = make_task("a", Priority::Low, in_days(-10));
    assert_eq!(classify(&task, today()), Quadrant::Delegate);
}

#[test]
fn test_tomorrow_normal_priority_is_delegate() {
    let task = make_task("a", Priority::Normal, in_days(1));
    assert_eq!(classify(&task, today()), Quadrant::Delegate);
}

#[test]
fn test_far_future_low_priority_is_eliminate() {
    let task = make_task("a", Priority::Low, Some(date(2099, 1, 1)));
    assert_eq!(classify(&task, today()), Quadrant::Eliminate);
}

#[test]
fn test_custom_window() {
    let task = make_task("a", Priority::High, in_days(5));
    let wide = TaskClassifier::new(ClassifierOptions {
        urgent_window_days: 7,
    });
    let narrow = TaskClassifier::new(ClassifierOptions {
        urgent_window_days: 0,
    });

    assert_eq!(wide.classify(&task, today()), Quadrant::Do);
    assert_eq!(narrow.classify(&task, today()), Quadrant::Schedule);
    assert!(narrow.is_urgent(&make_task("b", Priority::Low, in_days(0)), today()));
    assert!(!narrow.is_urgent(&make_task("c", Priority::Low, in_days(1)), today()));
}

#[test]
fn test_classification_is_total() {
    let dates = [None, in_days(-1), in_days(0), in_days(3), in_days(4), in_days(365)];
    for priority in Priority::ALL {
        for due in dates {
            let quadrant = classify(&make_task("x", priority, due), today());
            assert_eq!(
                Quadrant::ALL.iter().filter(|q| **q == quadrant).count(),
                1
            );
        }
    }
}

#[test]
fn test_from_flags() {
    assert_eq!(Quadrant::from_flags(true, true), Quadrant::Do);
    assert_eq!(Quadrant::from_flags(false, true), Quadrant::Schedule);
    assert_eq!(Quadrant::from_flags(true, false), Quadrant::Delegate);
    assert_eq!(Quadrant::from_flags(false, false), Quadrant::Eliminate);
}

#[test]
fn test_quadrant_serde_names() {
    assert_eq!(serde_json::to_string(&Quadrant::Do).unwrap(), "\"do\"");
    assert_eq!(
        serde_json::from_str::<Quadrant>("\"eliminate\"").unwrap(),
        Quadrant::Eliminate
    );
}

#[test]
fn test_options_deserialize_defaults() {
    let options: ClassifierOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options.urgent_window_days, DEFAULT_URGENT_WINDOW_DAYS);
}

// ==================== Board Tests ====================

#[test]
fn test_classify_all_has_every_quadrant() {
    let board = classify_all(&[], today());
    assert_eq!(board.len(), 4);
    assert!(board.values().all(Vec::is_empty));
}

#[test]
fn test_classify_all_groups_and_orders() {
    let tasks = vec![
        make_task("undated-urgent", Priority::Urgent, None),
        make_task("due-in-2", Priority::High, in_days(2)),
        make_task("overdue", Priority::High, in_days(-1)),
        make_task("later", Priority::High, in_days(30)),
        make_task("someday", Priority::Low, None),
        make_task("tomorrow", Priority::Normal, in_days(1)),
    ];
    let board = classify_all(&tasks, today());

    let ids = |q: Quadrant| -> Vec<&str> { board[&q].iter().map(|t| t.id.as_str()).collect() };

    assert_eq!(ids(Quadrant::Do), vec!["overdue", "due-in-2", "undated-urgent"]);
    assert_eq!(ids(Quadrant::Schedule), vec!["later"]);
    assert_eq!(ids(Quadrant::Delegate), vec!["tomorrow"]);
    assert_eq!(ids(Quadrant::Eliminate), vec!["someday"]);
}

#[test]
fn test_classify_all_keeps_input_order_for_ties() {
    let tasks = vec![
        make_task("first", Priority::Low, None),
        make_task("second", Priority::Normal, None),
    ];
    let board = classify_all(&tasks, today());
    let ids: Vec<&str> = board[&Quadrant::Eliminate]
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn test_board_iterates_in_display_order() {
    let board = classify_all(&[], today());
    let order: Vec<Quadrant> = board.keys().copied().collect();
    assert_eq!(order, Quadrant::ALL.to_vec());
}

#[test]
fn test_huge_window_treats_every_dated_task_as_urgent() {
    let classifier = TaskClassifier::new(ClassifierOptions {
        urgent_window_days: u32::MAX,
    });

    let dated = make_task("dated", Priority::Normal, Some(date(2024, 6, 10)));
    let undated = make_task("undated", Priority::High, None);

    assert_eq!(classifier.classify(&dated, today()), Quadrant::Delegate);
    assert_eq!(classifier.classify(&undated, today()), Quadrant::Schedule);
    assert_eq!(classifier.classify_all(&[dated, undated], today()).len(), 4);
}
