//! Planning assistant chat.
//!
//! The assistant is a deterministic keyword responder, not a model call:
//! it recognizes a few event types and answers with a canned reply plus a
//! list of task suggestions the user can add to a project. Responding is a
//! pure function, so the chat screen's reducer can call it directly.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::api::models::{Priority, TaskCreate};
use crate::sort::{SortKeyed, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Suggested tasks attached to an assistant reply, shown as a table
    /// under the message.
    pub suggestions: Vec<TaskSuggestion>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content: content.into(),
            timestamp,
            suggestions: Vec::new(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
        suggestions: Vec<TaskSuggestion>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp,
            suggestions,
        }
    }
}

/// A task the assistant proposes for the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSuggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_duration: String,
    pub project: String,
}

impl TaskSuggestion {
    fn new(
        title: &str,
        description: &str,
        priority: Priority,
        estimated_duration: &str,
        project: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            priority,
            estimated_duration: estimated_duration.to_string(),
            project: project.to_string(),
        }
    }

    /// Turn this suggestion into a create payload for the "Add" action.
    pub fn to_task_create(&self, project_id: Option<i64>) -> TaskCreate {
        TaskCreate {
            title: self.title.clone(),
            description: Some(self.description.clone()),
            priority: self.priority,
            due_date: None,
            project_id,
        }
    }
}

/// Suggestion tables sort like every other table in the client.
impl SortKeyed for TaskSuggestion {
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "title" => self.title.clone().into(),
            "priority" => self.priority.as_str().into(),
            "estimated_duration" => self.estimated_duration.clone().into(),
            "project" => self.project.clone().into(),
            _ => SortValue::Missing,
        }
    }
}

/// An assistant reply: text plus zero or more task suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerReply {
    pub content: String,
    pub suggestions: Vec<TaskSuggestion>,
}

/// Produce the assistant's reply for a user message.
///
/// Keyword dispatch on the lowercased input; anything unrecognized gets
/// the clarifying-questions fallback with no suggestions.
pub fn respond(input: &str, project_name: &str) -> PlannerReply {
    let lowered = input.to_lowercase();

    if lowered.contains("wedding") {
        return PlannerReply {
            content: "Great! Planning a wedding is exciting. Here are some essential tasks I'd \
                      recommend for a successful wedding reception. I can create these as tasks \
                      in your project management system:"
                .to_string(),
            suggestions: vec![
                TaskSuggestion::new(
                    "Book venue and catering",
                    "Research and book the reception venue, including catering services",
                    Priority::High,
                    "2-3 weeks",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Send invitations",
                    "Design, print, and send wedding invitations to guests",
                    Priority::High,
                    "1 week",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Arrange flowers and decorations",
                    "Select and order floral arrangements and venue decorations",
                    Priority::Medium,
                    "1 week",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Hire photographer/videographer",
                    "Book professional photography and videography services",
                    Priority::High,
                    "1-2 weeks",
                    project_name,
                ),
            ],
        };
    }

    if lowered.contains("corporate") || lowered.contains("team building") {
        return PlannerReply {
            content: "Excellent! Corporate team building events are great for boosting morale \
                      and collaboration. Here's what I recommend for a successful team building \
                      event:"
                .to_string(),
            suggestions: vec![
                TaskSuggestion::new(
                    "Define event objectives",
                    "Establish clear goals and outcomes for the team building event",
                    Priority::High,
                    "2-3 days",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Book venue and activities",
                    "Reserve location and plan engaging team building activities",
                    Priority::High,
                    "1 week",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Arrange catering",
                    "Order food and beverages for all participants",
                    Priority::Medium,
                    "3-5 days",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Send calendar invites",
                    "Create and send calendar invitations to all team members",
                    Priority::Medium,
                    "1 day",
                    project_name,
                ),
            ],
        };
    }

    if lowered.contains("product launch") {
        return PlannerReply {
            content: "A product launch party is a fantastic way to generate buzz! Here are the \
                      key tasks I'd suggest for a memorable launch event:"
                .to_string(),
            suggestions: vec![
                TaskSuggestion::new(
                    "Develop event concept and theme",
                    "Create a compelling theme that aligns with your product brand",
                    Priority::High,
                    "1 week",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Create guest list and invitations",
                    "Compile VIP list and design branded invitations",
                    Priority::High,
                    "1 week",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Coordinate media and PR",
                    "Arrange press coverage and social media promotion",
                    Priority::High,
                    "2 weeks",
                    project_name,
                ),
                TaskSuggestion::new(
                    "Set up product demonstrations",
                    "Prepare interactive demos and product showcases",
                    Priority::Medium,
                    "1 week",
                    project_name,
                ),
            ],
        };
    }

    PlannerReply {
        content: "I'd be happy to help you plan your event! Could you provide more details about \
                  what type of event you're organizing? For example:\n\n\
                  • What's the occasion or purpose?\n\
                  • How many people will attend?\n\
                  • What's your timeline?\n\
                  • Do you have a specific budget in mind?\n\n\
                  The more details you share, the better I can tailor my suggestions to your \
                  needs."
            .to_string(),
        suggestions: Vec::new(),
    }
}
