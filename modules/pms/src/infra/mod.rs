pub mod analytics;
pub mod directory;
pub mod events;
pub mod storage;
