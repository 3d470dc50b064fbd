mod common;

use common::make_task;
use taskdeck::sort::{SortDirection, SortState};
use taskdeck::ui::mvi::Reducer;
use taskdeck::ui::tasks::{TasksIntent, TasksReducer, TasksState};

// -- the transition table -----------------------------------------------------

#[test]
fn first_selection_starts_ascending() {
    let state = SortState::unsorted().cycle("title");
    assert_eq!(state.key, "title");
    assert_eq!(state.direction, Some(SortDirection::Ascending));
}

#[test]
fn second_selection_goes_descending() {
    let state = SortState::ascending("title").cycle("title");
    assert_eq!(state.key, "title");
    assert_eq!(state.direction, Some(SortDirection::Descending));
}

#[test]
fn third_selection_clears_the_sort() {
    let state = SortState::descending("title").cycle("title");
    assert_eq!(state.key, "");
    assert_eq!(state.direction, None);
}

#[test]
fn selecting_a_different_column_restarts_ascending() {
    let state = SortState::ascending("title").cycle("date");
    assert_eq!(state.key, "date");
    assert_eq!(state.direction, Some(SortDirection::Ascending));
}

#[test]
fn full_cycle_returns_to_unsorted() {
    let state = SortState::unsorted()
        .cycle("title")
        .cycle("title")
        .cycle("title");
    assert_eq!(state, SortState::unsorted());
}

// -- cycling through the screen reducer ---------------------------------------

fn loaded_state() -> TasksState {
    TasksReducer::reduce(
        TasksState::default(),
        TasksIntent::Loaded {
            tasks: vec![make_task(1, "b"), make_task(2, "a")],
        },
    )
}

fn sort_by(state: TasksState, key: &str) -> TasksState {
    TasksReducer::reduce(
        state,
        TasksIntent::SortBy {
            key: key.to_string(),
        },
    )
}

#[test]
fn header_press_sorts_visible_rows() {
    let state = sort_by(loaded_state(), "title");
    assert_eq!(state.sort, SortState::ascending("title"));
    let titles: Vec<String> = state
        .visible_tasks()
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(titles, vec!["a", "b"]);
}

#[test]
fn third_header_press_restores_source_order() {
    let state = sort_by(
        sort_by(sort_by(loaded_state(), "title"), "title"),
        "title",
    );
    assert_eq!(state.sort, SortState::unsorted());
    let titles: Vec<String> = state
        .visible_tasks()
        .iter()
        .map(|t| t.title.clone())
        .collect();
    assert_eq!(titles, vec!["b", "a"]);
}

#[test]
fn switching_columns_resets_to_ascending() {
    let state = sort_by(sort_by(loaded_state(), "title"), "due_date");
    assert_eq!(state.sort, SortState::ascending("due_date"));
}
