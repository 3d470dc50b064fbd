//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;

use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use taskdeck::api::models::{Priority, ProjectRef, Task, TaskStatus, UserRef};
use taskdeck::config::{Config, ConfigStore};
use taskdeck::ui::app::App;

pub fn make_app() -> App {
    let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
    App::new(config)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A minimal task row for reducer and sorting tests.
pub fn make_task(id: i64, title: &str) -> Task {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    Task {
        id,
        title: title.to_string(),
        description: None,
        priority: Priority::Medium,
        due_date: None,
        status: TaskStatus::Open,
        project: None,
        assignee: None,
        tags: Vec::new(),
        created_at: created,
        updated_at: created,
    }
}

pub fn with_due(mut task: Task, year: i32, month: u32, day: u32) -> Task {
    task.due_date = NaiveDate::from_ymd_opt(year, month, day);
    task
}

pub fn with_assignee(mut task: Task, id: i64, name: &str) -> Task {
    task.assignee = Some(UserRef {
        id,
        name: name.to_string(),
    });
    task
}

pub fn with_project(mut task: Task, id: i64, name: &str) -> Task {
    task.project = Some(ProjectRef {
        id,
        name: name.to_string(),
    });
    task
}
