//! Built-in sample collections.
//!
//! Used when the client runs offline and by tests that need realistic
//! rows. Shapes are identical to what the backend serves.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::api::models::{
    Amount, Customer, Order, OrderEvent, Priority, Project, ProjectRef, ProjectStatus, Task,
    TaskStatus, User, UserRef,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

pub fn sample_user() -> User {
    User {
        id: 1,
        email: "demo@taskdeck.dev".to_string(),
        name: "Demo User".to_string(),
        role: "User".to_string(),
        department: Some("Engineering".to_string()),
        avatar_url: None,
    }
}

pub fn sample_tasks() -> Vec<Task> {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).single().expect("valid timestamp");
    let task = |id: i64,
                title: &str,
                description: &str,
                priority: Priority,
                due: NaiveDate,
                status: TaskStatus,
                project: (i64, &str),
                assignee: (i64, &str),
                tags: &[&str]| Task {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        priority,
        due_date: Some(due),
        status,
        project: Some(ProjectRef {
            id: project.0,
            name: project.1.to_string(),
        }),
        assignee: Some(UserRef {
            id: assignee.0,
            name: assignee.1.to_string(),
        }),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: created,
        updated_at: created,
    };

    vec![
        task(
            1,
            "Design new landing page mockups",
            "Create wireframes and high-fidelity mockups for the new landing page",
            Priority::High,
            date(2024, 5, 28),
            TaskStatus::InProgress,
            (1, "Website Redesign"),
            (2, "Sarah Chen"),
            &["design", "ui/ux"],
        ),
        task(
            2,
            "Review API documentation",
            "Go through the API docs and update any outdated information",
            Priority::Medium,
            date(2024, 5, 30),
            TaskStatus::Open,
            (5, "Backend Integration"),
            (3, "Mike Johnson"),
            &["documentation", "api"],
        ),
        task(
            3,
            "Update user authentication flow",
            "Implement new security measures for user login",
            Priority::High,
            date(2024, 5, 25),
            TaskStatus::Overdue,
            (3, "Security Updates"),
            (4, "Alex Rivera"),
            &["security", "backend"],
        ),
        task(
            4,
            "Conduct user testing sessions",
            "Schedule and run usability tests with 10 participants",
            Priority::Medium,
            date(2024, 6, 2),
            TaskStatus::Open,
            (6, "UX Research"),
            (5, "Emma Davis"),
            &["research", "testing"],
        ),
        task(
            5,
            "Optimize database queries",
            "Improve performance of slow-running database queries",
            Priority::Low,
            date(2024, 6, 5),
            TaskStatus::Open,
            (4, "Performance Optimization"),
            (6, "David Kim"),
            &["performance", "database"],
        ),
        task(
            6,
            "Write unit tests for payment module",
            "Add comprehensive test coverage for payment processing",
            Priority::Medium,
            date(2024, 6, 1),
            TaskStatus::Open,
            (7, "Testing"),
            (7, "Lisa Wong"),
            &["testing", "backend"],
        ),
    ]
}

pub fn sample_projects() -> Vec<Project> {
    let project = |id: i64,
                   name: &str,
                   description: &str,
                   status: ProjectStatus,
                   progress: u8,
                   due: NaiveDate,
                   members: &[&str],
                   total: u32,
                   done: u32| Project {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        status,
        progress,
        due_date: Some(due),
        team_members: members.iter().map(|m| m.to_string()).collect(),
        total_tasks: total,
        completed_tasks: done,
    };

    vec![
        project(
            1,
            "Website Redesign",
            "Complete overhaul of the company website with modern design and improved UX",
            ProjectStatus::InProgress,
            65,
            date(2024, 6, 15),
            &["Sarah Chen", "Mike Johnson", "Alex Rivera"],
            12,
            8,
        ),
        project(
            2,
            "Mobile App Development",
            "Native iOS and Android app for customer engagement",
            ProjectStatus::Planning,
            15,
            date(2024, 8, 30),
            &["Emma Davis", "David Kim", "Lisa Wong"],
            25,
            4,
        ),
        project(
            3,
            "Security Updates",
            "Implementation of enhanced security measures across all systems",
            ProjectStatus::InProgress,
            80,
            date(2024, 5, 30),
            &["Alex Rivera", "Mike Johnson"],
            8,
            6,
        ),
        project(
            4,
            "Performance Optimization",
            "Database and application performance improvements",
            ProjectStatus::Completed,
            100,
            date(2024, 5, 15),
            &["David Kim", "Sarah Chen"],
            6,
            6,
        ),
    ]
}

pub fn sample_orders() -> Vec<Order> {
    let order = |id: i64, d: NaiveDate, customer: &str, event: Option<&str>, usd: &str| Order {
        id,
        date: d,
        customer: Customer {
            name: customer.to_string(),
        },
        event: event.map(|name| OrderEvent {
            name: name.to_string(),
        }),
        amount: Amount {
            usd: usd.to_string(),
        },
    };

    vec![
        order(3000, date(2024, 5, 9), "Leslie Alexander", Some("Bear Hug: Live in Concert"), "$80.00"),
        order(3001, date(2024, 5, 5), "Michael Foster", Some("Six Fingers — DJ Set"), "$299.00"),
        order(3002, date(2024, 4, 28), "Dries Vincent", Some("We All Look The Same"), "$150.00"),
        order(3003, date(2024, 4, 23), "Lindsay Walton", Some("Bear Hug: Live in Concert"), "$80.00"),
        order(3004, date(2024, 4, 18), "Courtney Henry", Some("Viking People"), "$114.99"),
        order(3005, date(2024, 4, 14), "Tom Cook", Some("Six Fingers — DJ Set"), "$299.00"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_collections_are_non_empty() {
        assert!(!sample_tasks().is_empty());
        assert!(!sample_projects().is_empty());
        assert!(!sample_orders().is_empty());
    }

    #[test]
    fn sample_tasks_reference_named_projects() {
        for task in sample_tasks() {
            let project = task.project.expect("sample tasks carry a project");
            assert!(!project.name.is_empty());
        }
    }
}
