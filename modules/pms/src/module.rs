use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use runtime::AppConfig;
use tracing::{debug, info};
use url::Url;

use crate::config::PmsConfig;
use crate::contract::client::PmsApi;
use crate::domain::analytics::AnalyticsService;
use crate::domain::events::SessionEvent;
use crate::domain::ports::{AnalyticsSource, EventPublisher, IdentityDirectory, SessionStorage};
use crate::domain::reports::ReportsDashboard;
use crate::domain::session::{SessionConfig, SessionStore};
use crate::gateways::local::PmsLocalClient;
use crate::infra::analytics::HttpAnalyticsClient;
use crate::infra::directory::InMemoryDirectory;
use crate::infra::events::TracingEventPublisher;
use crate::infra::storage::JsonFileSessionStorage;

pub const MODULE_NAME: &str = "pms";

/// Adapters the module is wired from.
pub struct PmsParts {
    pub directory: Arc<dyn IdentityDirectory>,
    pub storage: Arc<dyn SessionStorage>,
    pub events: Arc<dyn EventPublisher<SessionEvent>>,
    pub analytics: Arc<dyn AnalyticsSource>,
}

/// The wired pms module: session store, local client and analytics service.
/// The session is restored from its slot before `init` returns.
pub struct Pms {
    config: PmsConfig,
    home_dir: PathBuf,
    session: Arc<SessionStore>,
    api: Arc<dyn PmsApi>,
    analytics: Arc<AnalyticsService>,
}

impl Pms {
    pub fn init(app: &AppConfig) -> anyhow::Result<Self> {
        info!("Initializing pms module");
        let cfg: PmsConfig = app.module_config(MODULE_NAME)?;
        Self::with_config(cfg, app.home_dir())
    }

    /// Production adapters: JSON session file, seeded directory, HTTP analytics.
    pub fn with_config(cfg: PmsConfig, home_dir: PathBuf) -> anyhow::Result<Self> {
        debug!(
            session_file = %cfg.session_file,
            auth_delay_ms = cfg.auth_delay_ms,
            analytics_base_url = %cfg.analytics_base_url,
            "Loaded pms config"
        );

        let base = Url::parse(&cfg.analytics_base_url)
            .with_context(|| format!("invalid analytics_base_url '{}'", cfg.analytics_base_url))?;
        let analytics = HttpAnalyticsClient::new(base, cfg.analytics_timeout())?;

        let parts = PmsParts {
            directory: Arc::new(InMemoryDirectory::seeded()),
            storage: Arc::new(JsonFileSessionStorage::new(cfg.session_path(&home_dir))),
            events: Arc::new(TracingEventPublisher),
            analytics: Arc::new(analytics),
        };
        Ok(Self::from_parts(cfg, home_dir, parts))
    }

    pub fn from_parts(cfg: PmsConfig, home_dir: PathBuf, parts: PmsParts) -> Self {
        let session = Arc::new(SessionStore::new(
            parts.directory,
            parts.storage,
            parts.events,
            SessionConfig {
                auth_delay: cfg.auth_delay(),
            },
        ));
        session.restore();

        let api: Arc<dyn PmsApi> = Arc::new(PmsLocalClient::new(session.clone()));
        let analytics = Arc::new(AnalyticsService::new(parts.analytics));

        info!(signed_in = session.is_authenticated(), "pms module ready");
        Self {
            config: cfg,
            home_dir,
            session,
            api,
            analytics,
        }
    }

    pub fn config(&self) -> &PmsConfig {
        &self.config
    }

    pub fn session(&self) -> Arc<SessionStore> {
        self.session.clone()
    }

    pub fn api(&self) -> Arc<dyn PmsApi> {
        self.api.clone()
    }

    pub fn analytics(&self) -> Arc<AnalyticsService> {
        self.analytics.clone()
    }

    pub fn export_dir(&self) -> PathBuf {
        self.config.export_path(&self.home_dir)
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Reports screen opened on the configured default period.
    pub fn reports(&self) -> ReportsDashboard {
        let mut report = ReportsDashboard::default();
        report.period = self.config.default_report_period.clone();
        report
    }
}
