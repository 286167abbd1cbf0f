pub mod analytics;
pub mod directory;
pub mod session_storage;

pub use analytics::AnalyticsSource;
pub use directory::IdentityDirectory;
pub use session_storage::SessionStorage;

/// Output port: publish domain events (no knowledge of transport).
pub trait EventPublisher<E>: Send + Sync + 'static {
    fn publish(&self, event: &E);
}
