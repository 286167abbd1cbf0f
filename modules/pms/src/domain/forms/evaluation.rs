use tracing::{debug, info, instrument};

use crate::contract::model::{EvaluationKind, EvaluationPeriod, EvaluationRating};
use crate::domain::error::DomainError;
use crate::domain::filter::mean_one_decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn category(id: &'static str, name: &'static str, description: &'static str) -> EvaluationCategory {
    EvaluationCategory {
        id,
        name,
        description,
    }
}

pub const EMPLOYEE_CATEGORIES: &[EvaluationCategory] = &[
    category(
        "job-knowledge",
        "Job Knowledge",
        "Understanding of job requirements, technical skills, and industry knowledge",
    ),
    category(
        "accountability",
        "Accountability",
        "Takes responsibility for actions, decisions, and results",
    ),
    category(
        "communication",
        "Communication",
        "Effective verbal and written communication skills",
    ),
    category(
        "motivation",
        "Motivation",
        "Self-driven, enthusiastic, and committed to excellence",
    ),
    category(
        "collaboration",
        "Collaboration",
        "Works effectively with others and contributes to team success",
    ),
    category(
        "service-orientation",
        "Service Orientation",
        "Focus on customer satisfaction and service quality",
    ),
    category(
        "adaptability",
        "Adaptability",
        "Flexibility and ability to adapt to changing circumstances",
    ),
    category(
        "inclusion",
        "Inclusion",
        "Promotes diversity, equity, and inclusive practices",
    ),
    category(
        "self-development",
        "Self-Development",
        "Commitment to continuous learning and personal growth",
    ),
];

/// Added on top of the employee set for supervisor evaluations.
pub const SUPERVISOR_EXTRA_CATEGORIES: &[EvaluationCategory] = &[
    category("coaching", "Coaching", "Ability to develop and guide team members"),
    category(
        "leadership",
        "Leadership",
        "Inspiring and directing others toward common goals",
    ),
    category(
        "performance-management",
        "Performance Management",
        "Effectively managing team performance and development",
    ),
];

/// Six-point scale, best first. Index `6 - rating` gives the label.
pub const RATING_SCALE: &[(u8, &str, &str)] = &[
    (6, "Outstanding", "Consistently exceeds expectations"),
    (5, "Superior", "Frequently exceeds expectations"),
    (4, "Effective", "Consistently meets expectations"),
    (3, "Standard", "Generally meets expectations"),
    (2, "Developing", "Sometimes meets expectations"),
    (1, "Ineffective", "Rarely meets expectations"),
];

pub fn rating_label(rating: u8) -> Option<&'static str> {
    RATING_SCALE
        .iter()
        .find(|(value, _, _)| *value == rating)
        .map(|(_, label, _)| *label)
}

pub fn categories_for(kind: EvaluationKind) -> impl Iterator<Item = &'static EvaluationCategory> {
    let extra: &'static [EvaluationCategory] = match kind {
        EvaluationKind::Employee => &[],
        EvaluationKind::Supervisor => SUPERVISOR_EXTRA_CATEGORIES,
    };
    EMPLOYEE_CATEGORIES.iter().chain(extra)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverallComments {
    pub supervisor: String,
    pub employee: String,
    pub development_areas: String,
    pub strengths: String,
    pub goals: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub kind: EvaluationKind,
    pub period: EvaluationPeriod,
    pub rated: usize,
    pub total: usize,
    pub overall_score: f64,
}

/// One evaluation draft. Ratings are created on first edit and only ever
/// discarded together with the whole draft.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationForm {
    pub kind: EvaluationKind,
    pub period: EvaluationPeriod,
    pub overall: OverallComments,
    ratings: Vec<EvaluationRating>,
}

impl Default for EvaluationForm {
    fn default() -> Self {
        Self {
            kind: EvaluationKind::default(),
            period: EvaluationPeriod::Quarterly,
            overall: OverallComments::default(),
            ratings: Vec::new(),
        }
    }
}

impl EvaluationForm {
    pub fn new(kind: EvaluationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn ratings(&self) -> &[EvaluationRating] {
        &self.ratings
    }

    pub fn rating(&self, category_id: &str) -> Option<&EvaluationRating> {
        self.ratings.iter().find(|r| r.category_id == category_id)
    }

    pub fn set_rating(&mut self, category_id: &str, rating: u8) -> Result<(), DomainError> {
        if rating_label(rating).is_none() {
            return Err(DomainError::validation(format!(
                "Rating must be between 1 and 6, got {rating}"
            )));
        }
        self.entry(category_id)?.rating = Some(rating);
        Ok(())
    }

    pub fn set_supervisor_comment(
        &mut self,
        category_id: &str,
        comment: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.entry(category_id)?.supervisor_comment = comment.into();
        Ok(())
    }

    pub fn set_employee_comment(
        &mut self,
        category_id: &str,
        comment: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.entry(category_id)?.employee_comment = comment.into();
        Ok(())
    }

    /// Mean of the set ratings within the current kind's categories.
    pub fn overall_score(&self) -> f64 {
        mean_one_decimal(
            categories_for(self.kind)
                .filter_map(|c| self.rating(c.id))
                .filter_map(|r| r.rating)
                .map(f64::from),
        )
    }

    #[instrument(name = "pms.evaluation.submit", skip(self), fields(kind = %self.kind, period = %self.period))]
    pub fn submit(&self) -> EvaluationSummary {
        let total = categories_for(self.kind).count();
        let rated = categories_for(self.kind)
            .filter(|c| self.rating(c.id).and_then(|r| r.rating).is_some())
            .count();
        let summary = EvaluationSummary {
            kind: self.kind,
            period: self.period,
            rated,
            total,
            overall_score: self.overall_score(),
        };
        info!(rated, total, score = summary.overall_score, "Evaluation submitted");
        summary
    }

    pub fn save_draft(&self) -> EvaluationSummary {
        debug!("Saving evaluation draft");
        self.submit()
    }

    fn entry(&mut self, category_id: &str) -> Result<&mut EvaluationRating, DomainError> {
        if !categories_for(self.kind).any(|c| c.id == category_id) {
            return Err(DomainError::not_found("evaluation category", category_id));
        }

        let pos = match self.ratings.iter().position(|r| r.category_id == category_id) {
            Some(pos) => pos,
            None => {
                self.ratings.push(EvaluationRating {
                    category_id: category_id.to_string(),
                    ..EvaluationRating::default()
                });
                self.ratings.len() - 1
            }
        };
        Ok(&mut self.ratings[pos])
    }
}
