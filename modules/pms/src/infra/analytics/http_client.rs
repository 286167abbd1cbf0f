use std::time::Duration;

use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::domain::analytics::{EmployeeRecord, GoalRecord, ReviewRecord};
use crate::domain::ports::AnalyticsSource;

/// HTTP adapter for the analytics port: `GET <base>/api/{employees,reviews,goals}`,
/// each returning a JSON array.
pub struct HttpAnalyticsClient {
    client: reqwest::Client,
    base: Url,
}

impl HttpAnalyticsClient {
    pub fn new(base: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building analytics HTTP client")?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    #[instrument(name = "pms.http.analytics.fetch", skip(self), fields(base = %self.base))]
    async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> anyhow::Result<Vec<T>> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("invalid analytics base URL: {}", self.base))?
            .pop_if_empty()
            .extend(&["api", resource]);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("GET /api/{resource}"))?;

        if !response.status().is_success() {
            bail!("GET /api/{resource}: HTTP {}", response.status());
        }

        let records: Vec<T> = response
            .json()
            .await
            .with_context(|| format!("decoding /api/{resource}"))?;
        debug!(count = records.len(), "Fetched records");
        Ok(records)
    }
}

#[async_trait]
impl AnalyticsSource for HttpAnalyticsClient {
    async fn employees(&self) -> anyhow::Result<Vec<EmployeeRecord>> {
        self.fetch("employees").await
    }

    async fn reviews(&self) -> anyhow::Result<Vec<ReviewRecord>> {
        self.fetch("reviews").await
    }

    async fn goals(&self) -> anyhow::Result<Vec<GoalRecord>> {
        self.fetch("goals").await
    }
}
