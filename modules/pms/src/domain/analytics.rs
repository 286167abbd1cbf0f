//! Organization analytics computed from loosely-typed HTTP records.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::domain::filter::{mean, percentage, rank_desc_by, round1};
use crate::domain::ports::AnalyticsSource;

pub const TOP_PERFORMERS: usize = 5;
pub const SATISFACTION_FACTOR: f64 = 0.8;

const EMPLOYEE_ROLE: &str = "employee";
const COMPLETED: &str = "completed";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewRecord {
    pub employee_id: Option<String>,
    pub status: Option<String>,
    pub score: Option<f64>,
    pub employee_name: Option<String>,
    pub employee_role: Option<String>,
}

impl ReviewRecord {
    /// Completed with a non-zero score.
    fn completed_score(&self) -> Option<f64> {
        match (self.status.as_deref(), self.score) {
            (Some(COMPLETED), Some(score)) if score != 0.0 => Some(score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalRecord {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Stable,
    Down,
}

impl Trend {
    pub fn from_score(avg: f64) -> Self {
        if avg >= 4.0 {
            Trend::Up
        } else if avg >= 3.5 {
            Trend::Stable
        } else {
            Trend::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPerformance {
    pub department: String,
    pub avg_score: f64,
    pub employees: usize,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub name: String,
    pub role: String,
    pub score: f64,
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub avg_performance: f64,
    pub reviews_completed: u32,
    pub goal_achievement: u32,
    pub employee_satisfaction: f64,
    pub department_performance: Vec<DepartmentPerformance>,
    pub top_performers: Vec<TopPerformer>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn compute(
    employees: &[EmployeeRecord],
    reviews: &[ReviewRecord],
    goals: &[GoalRecord],
) -> AnalyticsSummary {
    let completed: Vec<&ReviewRecord> = reviews
        .iter()
        .filter(|r| r.completed_score().is_some())
        .collect();
    let avg = mean(completed.iter().filter_map(|r| r.completed_score()));
    let staff = employees
        .iter()
        .filter(|e| e.role.as_deref() == Some(EMPLOYEE_ROLE))
        .count();
    let completed_goals = goals
        .iter()
        .filter(|g| g.status.as_deref() == Some(COMPLETED))
        .count();

    AnalyticsSummary {
        avg_performance: round1(avg),
        reviews_completed: percentage(completed.len(), staff),
        goal_achievement: percentage(completed_goals, goals.len()),
        employee_satisfaction: round1(avg * SATISFACTION_FACTOR),
        department_performance: department_performance(employees, &completed),
        top_performers: top_performers(employees, &completed),
    }
}

fn department_performance(
    employees: &[EmployeeRecord],
    completed: &[&ReviewRecord],
) -> Vec<DepartmentPerformance> {
    let mut departments: Vec<&str> = Vec::new();
    for dept in employees.iter().filter_map(|e| non_empty(&e.department)) {
        if !departments.contains(&dept) {
            departments.push(dept);
        }
    }

    departments
        .into_iter()
        .map(|dept| {
            let staff: Vec<&EmployeeRecord> = employees
                .iter()
                .filter(|e| {
                    e.department.as_deref() == Some(dept) && e.role.as_deref() == Some(EMPLOYEE_ROLE)
                })
                .collect();

            let avg = mean(
                completed
                    .iter()
                    .filter(|r| {
                        r.employee_id.is_some()
                            && staff.iter().any(|e| e.employee_id == r.employee_id)
                    })
                    .filter_map(|r| r.completed_score()),
            );

            DepartmentPerformance {
                department: dept.to_string(),
                avg_score: round1(avg),
                employees: staff.len(),
                trend: Trend::from_score(avg),
            }
        })
        .collect()
}

fn top_performers(employees: &[EmployeeRecord], completed: &[&ReviewRecord]) -> Vec<TopPerformer> {
    rank_desc_by(completed, |r| r.completed_score().unwrap_or_default())
        .into_iter()
        .take(TOP_PERFORMERS)
        .map(|review| {
            let employee = review
                .employee_id
                .as_ref()
                .and_then(|id| employees.iter().find(|e| e.employee_id.as_ref() == Some(id)));

            let name = non_empty(&review.employee_name)
                .or_else(|| employee.and_then(|e| non_empty(&e.name)))
                .unwrap_or("Unknown");
            let role = non_empty(&review.employee_role)
                .or_else(|| employee.and_then(|e| non_empty(&e.role)))
                .unwrap_or("Employee");
            let department = employee
                .and_then(|e| non_empty(&e.department))
                .unwrap_or("Unknown");

            TopPerformer {
                name: name.to_string(),
                role: role.to_string(),
                score: review.completed_score().unwrap_or_default(),
                department: department.to_string(),
            }
        })
        .collect()
}

/// Loads the three record sets concurrently and summarizes them.
pub struct AnalyticsService {
    source: Arc<dyn AnalyticsSource>,
}

impl AnalyticsService {
    pub fn new(source: Arc<dyn AnalyticsSource>) -> Self {
        Self { source }
    }

    /// Never fails: any fetch or decode error yields the zeroed summary.
    #[instrument(name = "pms.analytics.load", skip(self))]
    pub async fn load(&self) -> AnalyticsSummary {
        let fetched = tokio::try_join!(
            self.source.employees(),
            self.source.reviews(),
            self.source.goals()
        );

        match fetched {
            Ok((employees, reviews, goals)) => {
                debug!(
                    employees = employees.len(),
                    reviews = reviews.len(),
                    goals = goals.len(),
                    "Fetched analytics records"
                );
                compute(&employees, &reviews, &goals)
            }
            Err(e) => {
                warn!(error = %e, "Error fetching analytics data");
                AnalyticsSummary::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, name: &str, role: &str, dept: &str) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: Some(id.into()),
            name: Some(name.into()),
            role: Some(role.into()),
            department: Some(dept.into()),
        }
    }

    fn review(id: &str, status: &str, score: Option<f64>) -> ReviewRecord {
        ReviewRecord {
            employee_id: Some(id.into()),
            status: Some(status.into()),
            score,
            ..ReviewRecord::default()
        }
    }

    fn goal(status: &str) -> GoalRecord {
        GoalRecord {
            status: Some(status.into()),
        }
    }

    #[test]
    fn empty_inputs_give_zeroed_summary() {
        assert_eq!(compute(&[], &[], &[]), AnalyticsSummary::default());
    }

    #[test]
    fn summary_figures() {
        let employees = vec![
            employee("e1", "Ann", "employee", "Engineering"),
            employee("e2", "Ben", "employee", "Engineering"),
            employee("e3", "Cid", "employee", "Design"),
            employee("s1", "Sue", "supervisor", "Engineering"),
        ];
        let reviews = vec![
            review("e1", "completed", Some(4.5)),
            review("e2", "completed", Some(3.9)),
            review("e3", "pending", Some(5.0)),
            review("e3", "completed", None),
        ];
        let goals = vec![goal("completed"), goal("in-progress"), goal("completed")];

        let summary = compute(&employees, &reviews, &goals);

        assert_eq!(summary.avg_performance, 4.2);
        assert_eq!(summary.reviews_completed, 67);
        assert_eq!(summary.goal_achievement, 67);
        assert_eq!(summary.employee_satisfaction, 3.4);

        let depts = &summary.department_performance;
        assert_eq!(depts.len(), 2);
        assert_eq!(depts[0].department, "Engineering");
        assert_eq!(depts[0].employees, 2);
        assert_eq!(depts[0].trend, Trend::Up);
        assert_eq!(depts[1].department, "Design");
        assert_eq!(depts[1].avg_score, 0.0);
        assert_eq!(depts[1].trend, Trend::Down);
    }

    #[test]
    fn trend_uses_unrounded_average() {
        // 3.96 rounds to 4.0 for display but stays below the "up" threshold
        let employees = vec![employee("e1", "Ann", "employee", "Ops")];
        let reviews = vec![review("e1", "completed", Some(3.96))];

        let dept = &compute(&employees, &reviews, &[]).department_performance[0];
        assert_eq!(dept.avg_score, 4.0);
        assert_eq!(dept.trend, Trend::Stable);
    }

    #[test]
    fn top_performers_fall_back_and_rank_stably() {
        let employees = vec![employee("e1", "Ann", "employee", "Engineering")];
        let mut named = review("x9", "completed", Some(4.8));
        named.employee_name = Some("Zed".into());
        let reviews = vec![
            review("e1", "completed", Some(4.1)),
            named,
            review("e7", "completed", Some(4.1)),
        ];

        let top = compute(&employees, &reviews, &[]).top_performers;
        assert_eq!(top.len(), 3);
        assert_eq!((top[0].name.as_str(), top[0].department.as_str()), ("Zed", "Unknown"));
        assert_eq!((top[1].name.as_str(), top[1].role.as_str()), ("Ann", "employee"));
        assert_eq!((top[2].name.as_str(), top[2].role.as_str()), ("Unknown", "Employee"));
    }

    #[test]
    fn records_decode_with_missing_fields() {
        let reviews: Vec<ReviewRecord> = serde_json::from_str(
            r#"[{"employeeId":"e1","status":"completed","score":4.5,"employeeName":"Ann"},{}]"#,
        )
        .unwrap();
        assert_eq!(reviews[0].employee_name.as_deref(), Some("Ann"));
        assert_eq!(reviews[1], ReviewRecord::default());
    }
}
