//! Wire types shared with the backend.
//!
//! Enum variants serialize to the exact strings the backend stores
//! (`"In Progress"`, `"On Hold"`), so renames here are load-bearing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::sort::{SortKeyed, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

/// A project as embedded in a task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
}

/// A user as embedded in a task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: TaskStatus,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SortKeyed for Task {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => self.id.into(),
            "title" => self.title.clone().into(),
            "description" => self.description.clone().into(),
            "priority" => self.priority.as_str().into(),
            "due_date" => self.due_date.into(),
            "status" => self.status.as_str().into(),
            "project.name" => self.project.as_ref().map(|p| p.name.clone()).into(),
            "assignee.name" => self.assignee.as_ref().map(|u| u.name.clone()).into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => SortValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub progress: u8,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub team_members: Vec<String>,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub completed_tasks: u32,
}

impl SortKeyed for Project {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => self.id.into(),
            "name" => self.name.clone().into(),
            "status" => self.status.as_str().into(),
            "progress" => SortValue::Number(self.progress as f64),
            "due_date" => self.due_date.into(),
            "total_tasks" => SortValue::Number(self.total_tasks as f64),
            "completed_tasks" => SortValue::Number(self.completed_tasks as f64),
            _ => SortValue::Missing,
        }
    }
}

/// An order row on the dashboard.
///
/// Amounts stay formatted strings (`"$80.00"`); they sort textually, like
/// every other unparsed column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub date: NaiveDate,
    pub customer: Customer,
    #[serde(default)]
    pub event: Option<OrderEvent>,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub usd: String,
}

impl SortKeyed for Order {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => self.id.into(),
            "date" => self.date.into(),
            "customer.name" => self.customer.name.clone().into(),
            "event.name" => self.event.as_ref().map(|e| e.name.clone()).into(),
            "amount.usd" => self.amount.usd.clone().into(),
            _ => SortValue::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub text_size: String,
    pub date_format: String,
    pub time_format: String,
    pub enable_ai_features: bool,
    pub preferred_ai_provider: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            text_size: "normal".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            time_format: "12".to_string(),
            enable_ai_features: true,
            preferred_ai_provider: "openai".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

/// Payload for updating a task; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}
