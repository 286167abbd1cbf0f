pub mod analytics;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod filter;
pub mod forms;
pub mod ids;
pub mod navigation;
pub mod notifications;
pub mod ports;
pub mod reports;
pub mod router;
pub mod session;
pub mod users;
