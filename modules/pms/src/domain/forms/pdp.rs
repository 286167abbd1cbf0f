use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::contract::model::{PdpGoal, Priority};
use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;

/// Goals of one personal development plan, in insertion order.
#[derive(Debug, Default)]
pub struct DevelopmentPlan {
    goals: Vec<PdpGoal>,
    ids: IdGenerator,
}

/// Outcome of saving or submitting a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReceipt {
    pub goal_count: usize,
}

impl DevelopmentPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[PdpGoal] {
        &self.goals
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<PdpGoal, DomainError> {
        let pos = self
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| DomainError::not_found("goal", id))?;
        Ok(self.goals.remove(pos))
    }

    #[instrument(name = "pms.pdp.submit", skip(self), fields(goals = self.goals.len()))]
    pub fn submit(&self) -> PlanReceipt {
        info!("Development plan submitted");
        PlanReceipt {
            goal_count: self.goals.len(),
        }
    }

    pub fn save_draft(&self) -> PlanReceipt {
        debug!("Saving development plan draft");
        self.submit()
    }
}

/// Draft of the next goal to add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdpForm {
    pub skill: String,
    pub description: String,
    pub timeline: Option<NaiveDate>,
    pub expected_outcome: String,
    pub priority: Priority,
    resources: Vec<String>,
}

impl PdpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Blank input is ignored; duplicates are kept.
    pub fn add_resource(&mut self, resource: &str) -> bool {
        let resource = resource.trim();
        if resource.is_empty() {
            return false;
        }
        self.resources.push(resource.to_string());
        true
    }

    pub fn remove_resource(&mut self, index: usize) -> Result<String, DomainError> {
        if index >= self.resources.len() {
            return Err(DomainError::not_found("resource", index.to_string()));
        }
        Ok(self.resources.remove(index))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.skill.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DomainError::validation(
                "Please provide a skill and a description",
            ));
        }
        Ok(())
    }

    /// Appends the draft to `plan` and starts a fresh draft.
    #[instrument(name = "pms.pdp.add_goal", skip_all, fields(skill = %self.skill))]
    pub fn add_goal<'p>(&mut self, plan: &'p mut DevelopmentPlan) -> Result<&'p PdpGoal, DomainError> {
        self.validate()?;

        let draft = std::mem::take(self);
        let goal = PdpGoal {
            id: plan.ids.next_id(),
            skill: draft.skill.trim().to_string(),
            description: draft.description.trim().to_string(),
            timeline: draft.timeline,
            resources: draft.resources,
            expected_outcome: draft.expected_outcome,
            priority: draft.priority,
        };

        debug!(goal_id = %goal.id, "Goal added");
        plan.goals.push(goal);
        Ok(&plan.goals[plan.goals.len() - 1])
    }
}
