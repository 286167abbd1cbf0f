use tracing::info;

use crate::domain::events::SessionEvent;
use crate::domain::ports::EventPublisher;

/// Publishes session events as structured `tracing` records.
#[derive(Debug, Clone, Default)]
pub struct TracingEventPublisher;

impl EventPublisher<SessionEvent> for TracingEventPublisher {
    fn publish(&self, event: &SessionEvent) {
        match event {
            SessionEvent::LoggedIn { id, role, at } => {
                info!(target: "pms.events", event = "logged_in", user_id = %id, role = %role, at = %at)
            }
            SessionEvent::Registered { id, role, at } => {
                info!(target: "pms.events", event = "registered", user_id = %id, role = %role, at = %at)
            }
            SessionEvent::LoggedOut { id, at } => {
                info!(target: "pms.events", event = "logged_out", user_id = %id, at = %at)
            }
        }
    }
}
