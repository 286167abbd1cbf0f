//! Notification center.

use std::str::FromStr;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::contract::model::{NotificationKind, NotificationRecord, ParseEnumError, Priority};
use crate::domain::error::DomainError;

/// Tab selector of the notification center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    ActionRequired,
}

impl FromStr for NotificationFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "unread" => Ok(Self::Unread),
            "action" => Ok(Self::ActionRequired),
            other => Err(ParseEnumError {
                kind: "notification filter",
                value: other.to_string(),
            }),
        }
    }
}

impl NotificationFilter {
    pub fn admits(&self, n: &NotificationRecord) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !n.read,
            Self::ActionRequired => n.action_required,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<NotificationRecord>,
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    date: (i32, u32, u32),
    read: bool,
    priority: Priority,
    action_required: bool,
) -> Option<NotificationRecord> {
    Some(NotificationRecord {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)?,
        read,
        priority,
        action_required,
    })
}

impl NotificationCenter {
    pub fn new(notifications: Vec<NotificationRecord>) -> Self {
        Self { notifications }
    }

    pub fn seeded() -> Self {
        use NotificationKind::*;

        Self::new(
            [
                seed(
                    "1",
                    Evaluation,
                    "Quarterly Evaluation Due",
                    "Your quarterly performance evaluation is due in 3 days",
                    (2024, 1, 15),
                    false,
                    Priority::High,
                    true,
                ),
                seed(
                    "2",
                    Feedback,
                    "New Feedback Received",
                    "You have received positive feedback from your supervisor",
                    (2024, 1, 14),
                    false,
                    Priority::Medium,
                    false,
                ),
                seed(
                    "3",
                    Meeting,
                    "Performance Review Meeting",
                    "Scheduled for tomorrow at 2:00 PM with Jane Smith",
                    (2024, 1, 13),
                    true,
                    Priority::High,
                    true,
                ),
                seed(
                    "4",
                    Deadline,
                    "PDP Goal Deadline Approaching",
                    "Your React certification goal is due next week",
                    (2024, 1, 12),
                    false,
                    Priority::Medium,
                    true,
                ),
                seed(
                    "5",
                    System,
                    "System Maintenance",
                    "Scheduled maintenance on Sunday from 2-4 AM",
                    (2024, 1, 11),
                    true,
                    Priority::Low,
                    false,
                ),
            ]
            .into_iter()
            .flatten()
            .collect(),
        )
    }

    pub fn all(&self) -> &[NotificationRecord] {
        &self.notifications
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<&NotificationRecord> {
        self.notifications.iter().filter(|n| filter.admits(n)).collect()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Already-read notifications no longer count as pending action.
    pub fn action_required_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.action_required && !n.read)
            .count()
    }

    #[instrument(name = "pms.notifications.mark_read", skip(self))]
    pub fn mark_read(&mut self, id: &str) -> Result<(), DomainError> {
        let n = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::not_found("notification", id))?;
        n.read = true;
        debug!("Notification marked read");
        Ok(())
    }

    /// Returns how many were newly marked.
    pub fn mark_all_read(&mut self) -> usize {
        let mut marked = 0;
        for n in self.notifications.iter_mut().filter(|n| !n.read) {
            n.read = true;
            marked += 1;
        }
        info!(marked, "Marked all notifications read");
        marked
    }

    #[instrument(name = "pms.notifications.delete", skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<NotificationRecord, DomainError> {
        let pos = self
            .notifications
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| DomainError::not_found("notification", id))?;
        Ok(self.notifications.remove(pos))
    }
}
