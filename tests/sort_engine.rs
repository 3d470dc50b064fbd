mod common;

use serde_json::{json, Value};

use common::{make_task, with_assignee, with_due};
use taskdeck::sort::{sort_rows, SortState};

fn values(records: &[Value], key: &str) -> Vec<Value> {
    records
        .iter()
        .map(|r| r.get(key).cloned().unwrap_or(Value::Null))
        .collect()
}

// -- identity when unsorted ---------------------------------------------------

#[test]
fn unsorted_state_returns_input_order() {
    let records = vec![json!({"a": 3}), json!({"a": 1}), json!({"a": 2})];
    let sorted = sort_rows(&records, &SortState::unsorted());
    assert_eq!(sorted, records);
}

#[test]
fn empty_key_returns_input_order() {
    let records = vec![json!({"a": 3}), json!({"a": 1})];
    let state = SortState {
        key: String::new(),
        direction: Some(taskdeck::sort::SortDirection::Ascending),
    };
    assert_eq!(sort_rows(&records, &state), records);
}

#[test]
fn empty_input_stays_empty() {
    let records: Vec<Value> = Vec::new();
    assert_eq!(sort_rows(&records, &SortState::ascending("a")).len(), 0);
}

// -- direction ----------------------------------------------------------------

#[test]
fn ascending_orders_numbers() {
    let records = vec![json!({"a": 3}), json!({"a": 1}), json!({"a": 2})];
    let sorted = sort_rows(&records, &SortState::ascending("a"));
    assert_eq!(values(&sorted, "a"), vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn descending_reverses_comparator_outcome() {
    let records = vec![json!({"a": 3}), json!({"a": 1}), json!({"a": 2})];
    let ascending = sort_rows(&records, &SortState::ascending("a"));
    let descending = sort_rows(&ascending, &SortState::descending("a"));
    assert_eq!(values(&descending, "a"), vec![json!(3), json!(2), json!(1)]);
}

// -- missing-value tail policy ------------------------------------------------

#[test]
fn missing_values_sort_last_ascending() {
    let records = vec![json!({"a": 1}), json!({}), json!({"a": 2})];
    let sorted = sort_rows(&records, &SortState::ascending("a"));
    assert_eq!(sorted, vec![json!({"a": 1}), json!({"a": 2}), json!({})]);
}

#[test]
fn missing_values_sort_last_descending_too() {
    let records = vec![json!({"a": 1}), json!({}), json!({"a": 2})];
    let sorted = sort_rows(&records, &SortState::descending("a"));
    assert_eq!(sorted, vec![json!({"a": 2}), json!({"a": 1}), json!({})]);
}

#[test]
fn null_counts_as_missing() {
    let records = vec![json!({"a": null}), json!({"a": 1})];
    let sorted = sort_rows(&records, &SortState::ascending("a"));
    assert_eq!(sorted, vec![json!({"a": 1}), json!({"a": null})]);
}

// -- type dispatch ------------------------------------------------------------

#[test]
fn numeric_looking_strings_compare_as_text() {
    // Both values are stored as text, so they hit the text branch:
    // "10" < "9" lexicographically.
    let records = vec![json!({"v": "10"}), json!({"v": "9"})];
    let sorted = sort_rows(&records, &SortState::ascending("v"));
    assert_eq!(sorted, vec![json!({"v": "10"}), json!({"v": "9"})]);
}

#[test]
fn true_numbers_compare_numerically() {
    let records = vec![json!({"v": 10}), json!({"v": 9})];
    let sorted = sort_rows(&records, &SortState::ascending("v"));
    assert_eq!(sorted, vec![json!({"v": 9}), json!({"v": 10})]);
}

#[test]
fn date_valued_fields_compare_chronologically() {
    // Typed rows resolve due dates as date values, not strings.
    let tasks = vec![
        with_due(make_task(1, "late"), 2024, 6, 5),
        with_due(make_task(2, "early"), 2024, 5, 25),
        with_due(make_task(3, "middle"), 2024, 5, 30),
    ];
    let sorted = sort_rows(&tasks, &SortState::ascending("due_date"));
    let ids: Vec<i64> = sorted.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn task_without_due_date_sorts_last_in_both_directions() {
    let tasks = vec![
        make_task(1, "no due date"),
        with_due(make_task(2, "due"), 2024, 5, 25),
    ];
    let ascending = sort_rows(&tasks, &SortState::ascending("due_date"));
    assert_eq!(ascending.last().map(|t| t.id), Some(1));
    let descending = sort_rows(&tasks, &SortState::descending("due_date"));
    assert_eq!(descending.last().map(|t| t.id), Some(1));
}

// -- nested keys --------------------------------------------------------------

#[test]
fn nested_key_compares_case_insensitively() {
    let records = vec![
        json!({"customer": {"name": "Zed"}}),
        json!({"customer": {"name": "amy"}}),
    ];
    let sorted = sort_rows(&records, &SortState::ascending("customer.name"));
    assert_eq!(
        sorted,
        vec![
            json!({"customer": {"name": "amy"}}),
            json!({"customer": {"name": "Zed"}}),
        ]
    );
}

#[test]
fn nested_key_on_typed_rows() {
    let tasks = vec![
        with_assignee(make_task(1, "a"), 10, "Zed"),
        with_assignee(make_task(2, "b"), 11, "amy"),
    ];
    let sorted = sort_rows(&tasks, &SortState::ascending("assignee.name"));
    let ids: Vec<i64> = sorted.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn missing_intermediate_level_yields_missing() {
    let records = vec![
        json!({"customer": {"name": "amy"}}),
        json!({"other": 1}),
    ];
    let sorted = sort_rows(&records, &SortState::ascending("customer.name"));
    assert_eq!(sorted[0], json!({"customer": {"name": "amy"}}));
    assert_eq!(sorted[1], json!({"other": 1}));
}

// -- degenerate keys ----------------------------------------------------------

#[test]
fn unknown_key_preserves_input_order() {
    // Every value resolves missing, every pair compares equal, and the
    // stable sort leaves the sequence untouched.
    let records = vec![json!({"a": 2}), json!({"a": 1}), json!({"a": 3})];
    let sorted = sort_rows(&records, &SortState::ascending("nope"));
    assert_eq!(sorted, records);
}

// -- stability ----------------------------------------------------------------

#[test]
fn equal_keys_retain_relative_order() {
    let records = vec![
        json!({"group": "b", "id": 1}),
        json!({"group": "a", "id": 2}),
        json!({"group": "b", "id": 3}),
        json!({"group": "a", "id": 4}),
    ];
    let sorted = sort_rows(&records, &SortState::ascending("group"));
    let ids: Vec<i64> = sorted
        .iter()
        .map(|r| r.get("id").and_then(Value::as_i64).unwrap())
        .collect();
    assert_eq!(ids, vec![2, 4, 1, 3]);
}

#[test]
fn resorting_tied_values_does_not_reshuffle() {
    let records = vec![
        json!({"group": "a", "id": 1}),
        json!({"group": "a", "id": 2}),
        json!({"group": "a", "id": 3}),
    ];
    let once = sort_rows(&records, &SortState::ascending("group"));
    let twice = sort_rows(&once, &SortState::ascending("group"));
    assert_eq!(once, twice);
    assert_eq!(once, records);
}

#[test]
fn descending_keeps_tied_rows_in_pre_reversal_order() {
    let records = vec![
        json!({"group": "a", "id": 1}),
        json!({"group": "b", "id": 2}),
        json!({"group": "a", "id": 3}),
    ];
    let sorted = sort_rows(&records, &SortState::descending("group"));
    let ids: Vec<i64> = sorted
        .iter()
        .map(|r| r.get("id").and_then(Value::as_i64).unwrap())
        .collect();
    // "b" first; the two "a" rows keep 1 before 3.
    assert_eq!(ids, vec![2, 1, 3]);
}

// -- source rows stay untouched -----------------------------------------------

#[test]
fn sorting_does_not_mutate_input() {
    let records = vec![json!({"a": 3}), json!({"a": 1})];
    let snapshot = records.clone();
    let _sorted = sort_rows(&records, &SortState::ascending("a"));
    assert_eq!(records, snapshot);
}
