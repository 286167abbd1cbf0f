use async_trait::async_trait;

use crate::domain::analytics::{EmployeeRecord, GoalRecord, ReviewRecord};

/// Source of the loosely-typed analytics records.
#[async_trait]
pub trait AnalyticsSource: Send + Sync {
    async fn employees(&self) -> anyhow::Result<Vec<EmployeeRecord>>;
    async fn reviews(&self) -> anyhow::Result<Vec<ReviewRecord>>;
    async fn goals(&self) -> anyhow::Result<Vec<GoalRecord>>;
}
