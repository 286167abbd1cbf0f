//! Landing overview shown on the dashboard screen, per role.

use serde::Serialize;

use crate::contract::model::{FeedbackKind, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentFeedback {
    pub kind: FeedbackKind,
    pub message: &'static str,
    pub date: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeOverview {
    pub pdp_title: &'static str,
    pub pdp_progress: u32,
    pub goals: u32,
    pub completed_goals: u32,
    pub recent_feedback: Vec<RecentFeedback>,
    pub next_evaluation_date: &'static str,
    pub next_evaluation_kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    /// `None` while the evaluation is pending.
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupervisorOverview {
    pub team_members: u32,
    pub pending_evaluations: u32,
    pub feedback_given: u32,
    pub team_performance: u32,
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminOverview {
    pub total_employees: u32,
    pub completed_evaluations: u32,
    pub pending_evaluations: u32,
    pub system_health: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Overview {
    Employee(EmployeeOverview),
    Supervisor(SupervisorOverview),
    Admin(AdminOverview),
}

pub fn overview_for(role: Role) -> Overview {
    match role {
        Role::Employee => Overview::Employee(EmployeeOverview {
            pdp_title: "Q4 2024 Development Plan",
            pdp_progress: 75,
            goals: 4,
            completed_goals: 3,
            recent_feedback: vec![
                RecentFeedback {
                    kind: FeedbackKind::Positive,
                    message: "Excellent work on the API integration",
                    date: "2024-01-15",
                },
                RecentFeedback {
                    kind: FeedbackKind::Constructive,
                    message: "Consider improving documentation practices",
                    date: "2024-01-10",
                },
            ],
            next_evaluation_date: "2024-02-15",
            next_evaluation_kind: "Quarterly Review",
        }),
        Role::Supervisor => Overview::Supervisor(SupervisorOverview {
            team_members: 8,
            pending_evaluations: 3,
            feedback_given: 12,
            team_performance: 85,
            team: vec![
                TeamMember {
                    name: "Alice Johnson",
                    score: Some(4.5),
                },
                TeamMember {
                    name: "Bob Smith",
                    score: Some(4.2),
                },
                TeamMember {
                    name: "Carol Davis",
                    score: None,
                },
                TeamMember {
                    name: "David Wilson",
                    score: Some(4.8),
                },
            ],
        }),
        Role::Admin => Overview::Admin(AdminOverview {
            total_employees: 150,
            completed_evaluations: 120,
            pending_evaluations: 30,
            system_health: 98,
        }),
    }
}
