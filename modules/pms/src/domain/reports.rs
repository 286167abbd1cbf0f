//! Organization reports over a fixed dataset.

use tracing::{info, instrument};

use crate::contract::model::ExportFormat;
use crate::domain::filter::{percentage, rank_desc_by, Choice};

pub const DEFAULT_PERIOD: &str = "q1-2024";

pub const PERIODS: &[&str] = &["q1-2024", "q2-2024", "q3-2024", "q4-2024", "annual-2024"];

pub const ABOVE_AVERAGE_THRESHOLD: f64 = 4.3;

pub const TOP_DEPARTMENTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub avg_score: f64,
    pub evaluations: u32,
}

impl TrendPoint {
    pub fn label(&self) -> &'static str {
        if self.avg_score >= ABOVE_AVERAGE_THRESHOLD {
            "Above Average"
        } else {
            "Average"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepartmentRow {
    pub department: &'static str,
    pub avg_score: f64,
    pub employees: usize,
    pub completed: usize,
}

impl DepartmentRow {
    pub fn completion_pct(&self) -> u32 {
        percentage(self.completed, self.employees)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScore {
    pub category: &'static str,
    pub avg_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalAchievement {
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBand {
    pub rating: &'static str,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportData {
    pub trends: &'static [TrendPoint],
    pub departments: &'static [DepartmentRow],
    pub categories: &'static [CategoryScore],
    pub goals: GoalAchievement,
    pub rating_distribution: &'static [RatingBand],
}

const fn trend(month: &'static str, avg_score: f64, evaluations: u32) -> TrendPoint {
    TrendPoint {
        month,
        avg_score,
        evaluations,
    }
}

const fn dept(department: &'static str, avg_score: f64, employees: usize, completed: usize) -> DepartmentRow {
    DepartmentRow {
        department,
        avg_score,
        employees,
        completed,
    }
}

const fn cat(category: &'static str, avg_score: f64) -> CategoryScore {
    CategoryScore { category, avg_score }
}

const fn band(rating: &'static str, count: u32, percentage: u32) -> RatingBand {
    RatingBand {
        rating,
        count,
        percentage,
    }
}

pub const REPORT_DATA: ReportData = ReportData {
    trends: &[
        trend("Jan", 4.2, 45),
        trend("Feb", 4.3, 48),
        trend("Mar", 4.1, 52),
        trend("Apr", 4.4, 47),
    ],
    departments: &[
        dept("Engineering", 4.3, 45, 42),
        dept("Sales", 4.1, 32, 30),
        dept("Marketing", 4.5, 28, 28),
        dept("HR", 4.2, 15, 15),
        dept("Finance", 4.0, 20, 18),
    ],
    categories: &[
        cat("Job Knowledge", 4.3),
        cat("Communication", 4.1),
        cat("Collaboration", 4.4),
        cat("Accountability", 4.2),
        cat("Adaptability", 4.0),
    ],
    goals: GoalAchievement {
        completed: 78,
        in_progress: 45,
        overdue: 12,
        total: 135,
    },
    rating_distribution: &[
        band("Outstanding (5-6)", 45, 23),
        band("Effective (4-5)", 89, 46),
        band("Standard (3-4)", 48, 25),
        band("Developing (1-3)", 10, 6),
    ],
};

/// A produced export. PDF generation is not wired up, so PDF artifacts
/// carry a name and no content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReportsDashboard {
    data: ReportData,
    pub period: String,
    /// Department key, matched case-insensitively ("hr" selects "HR").
    pub department: Choice<String>,
}

impl Default for ReportsDashboard {
    fn default() -> Self {
        Self::new(REPORT_DATA, DEFAULT_PERIOD)
    }
}

impl ReportsDashboard {
    pub fn new(data: ReportData, period: impl Into<String>) -> Self {
        Self {
            data,
            period: period.into(),
            department: Choice::All,
        }
    }

    pub fn data(&self) -> &ReportData {
        &self.data
    }

    /// Department rows admitted by the department selector, dataset order.
    pub fn departments(&self) -> Vec<&'static DepartmentRow> {
        self.data
            .departments
            .iter()
            .filter(|row| match &self.department {
                Choice::All => true,
                Choice::Only(key) => row.department.eq_ignore_ascii_case(key),
            })
            .collect()
    }

    pub fn top_departments(&self) -> Vec<&'static DepartmentRow> {
        rank_desc_by(self.data.departments, |row| row.avg_score)
            .into_iter()
            .take(TOP_DEPARTMENTS)
            .collect()
    }

    pub fn goal_completion_pct(&self) -> u32 {
        percentage(self.data.goals.completed, self.data.goals.total)
    }

    #[instrument(name = "pms.reports.export", skip(self), fields(period = %self.period))]
    pub fn export(&self, format: ExportFormat) -> ExportArtifact {
        let file_name = format!("performance_report_{}.{}", self.period, format);
        let content = match format {
            ExportFormat::Csv => Some(self.to_csv()),
            ExportFormat::Pdf => None,
        };
        info!(file = %file_name, "Report exported");
        ExportArtifact {
            format,
            file_name,
            content,
        }
    }

    /// Every department in dataset order, regardless of the selector.
    pub fn to_csv(&self) -> String {
        std::iter::once("Department,Average Score,Employees,Completed".to_string())
            .chain(self.data.departments.iter().map(|row| {
                format!(
                    "{},{},{},{}",
                    row.department, row.avg_score, row.employees, row.completed
                )
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
