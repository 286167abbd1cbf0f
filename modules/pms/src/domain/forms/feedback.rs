use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use crate::contract::model::{FeedbackEntry, FeedbackKind};
use crate::domain::error::DomainError;
use crate::domain::ids::IdGenerator;

pub const FEEDBACK_CATEGORIES: &[&str] = &[
    "Job Performance",
    "Communication",
    "Teamwork",
    "Leadership",
    "Technical Skills",
    "Problem Solving",
    "Initiative",
    "Customer Service",
    "Project Management",
    "Professional Development",
];

pub const MAX_FEEDBACK_RATING: u8 = 5;

/// Submitted feedback, newest first.
#[derive(Debug, Default)]
pub struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
    ids: IdGenerator,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prepend(&mut self, mut entry: FeedbackEntry) -> &FeedbackEntry {
        entry.id = self.ids.next_id();
        self.entries.insert(0, entry);
        &self.entries[0]
    }
}

/// Draft of one feedback entry.
#[derive(Debug)]
pub struct FeedbackForm {
    pub kind: FeedbackKind,
    pub category: String,
    pub message: String,
    pub date: NaiveDate,
    pub project_tag: String,
    /// Recipient picked by a supervisor; kept across submits.
    pub employee: Option<String>,
    rating: Option<u8>,
    attachments: Vec<String>,
    attachment_ids: IdGenerator,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            kind: FeedbackKind::default(),
            category: String::new(),
            message: String::new(),
            date: Local::now().date_naive(),
            project_tag: String::new(),
            employee: None,
            rating: None,
            attachments: Vec::new(),
            attachment_ids: IdGenerator::new(),
        }
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn attachments(&self) -> &[String] {
        &self.attachments
    }

    /// Ratings are only taken for positive feedback, on a 1..=5 scale.
    pub fn set_rating(&mut self, rating: Option<u8>) -> Result<(), DomainError> {
        match rating {
            None => {}
            Some(_) if self.kind != FeedbackKind::Positive => {
                return Err(DomainError::validation(
                    "Ratings can only be given with positive feedback",
                ));
            }
            Some(r) if !(1..=MAX_FEEDBACK_RATING).contains(&r) => {
                return Err(DomainError::validation(format!(
                    "Rating must be between 1 and {MAX_FEEDBACK_RATING}"
                )));
            }
            Some(_) => {}
        }
        self.rating = rating;
        Ok(())
    }

    /// Appends `name`, or a synthesized `document_<id>.pdf` when blank.
    pub fn add_attachment(&mut self, name: Option<&str>) -> &str {
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("document_{}.pdf", self.attachment_ids.next_id()),
        };
        self.attachments.push(name);
        self.attachments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn remove_attachment(&mut self, index: usize) -> Result<String, DomainError> {
        if index >= self.attachments.len() {
            return Err(DomainError::not_found("attachment", index.to_string()));
        }
        Ok(self.attachments.remove(index))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.message.trim().is_empty() {
            return Err(DomainError::validation("Please enter feedback message"));
        }
        Ok(())
    }

    /// Prepends the entry to `log` and clears the per-entry fields.
    #[instrument(name = "pms.feedback.submit", skip_all, fields(kind = %self.kind))]
    pub fn submit<'l>(&mut self, log: &'l mut FeedbackLog) -> Result<&'l FeedbackEntry, DomainError> {
        self.validate()?;

        let project_tag = self.project_tag.trim();
        let entry = FeedbackEntry {
            id: String::new(),
            kind: self.kind,
            category: self.category.clone(),
            message: self.message.trim().to_string(),
            date: self.date,
            project_tag: (!project_tag.is_empty()).then(|| project_tag.to_string()),
            attachments: std::mem::take(&mut self.attachments),
            rating: match self.kind {
                FeedbackKind::Positive => self.rating,
                FeedbackKind::Constructive => None,
            },
        };

        self.message.clear();
        self.project_tag.clear();
        self.rating = None;

        let stored = log.prepend(entry);
        info!(feedback_id = %stored.id, category = %stored.category, "Feedback submitted");
        Ok(stored)
    }

    pub fn save_draft<'l>(&mut self, log: &'l mut FeedbackLog) -> Result<&'l FeedbackEntry, DomainError> {
        debug!("Saving feedback draft");
        self.submit(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FeedbackForm {
        FeedbackForm {
            category: "Communication".into(),
            message: "  Clear weekly updates  ".into(),
            project_tag: "Apollo".into(),
            employee: Some("Alice Johnson".into()),
            ..FeedbackForm::new()
        }
    }

    #[test]
    fn empty_message_is_rejected_and_fields_kept() {
        let mut form = FeedbackForm {
            message: "   ".into(),
            ..draft()
        };
        let mut log = FeedbackLog::new();

        let err = form.submit(&mut log).unwrap_err();
        assert_eq!(err.to_string(), "Please enter feedback message");
        assert_eq!(form.category, "Communication");
        assert_eq!(form.project_tag, "Apollo");
        assert!(log.is_empty());
    }

    #[test]
    fn submit_prepends_and_resets_entry_fields() {
        let mut form = draft();
        form.set_rating(Some(4)).unwrap();
        form.add_attachment(Some("notes.txt"));
        let mut log = FeedbackLog::new();

        let first_id = form.submit(&mut log).unwrap().id.clone();
        form.message = "Second".into();
        form.submit(&mut log).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "Second");
        assert_eq!(log.entries()[1].id, first_id);
        assert_eq!(log.entries()[1].message, "Clear weekly updates");
        assert_eq!(log.entries()[1].rating, Some(4));
        assert_eq!(log.entries()[1].attachments, vec!["notes.txt".to_string()]);
        assert_eq!(log.entries()[1].project_tag.as_deref(), Some("Apollo"));

        assert!(form.message.is_empty());
        assert!(form.project_tag.is_empty());
        assert_eq!(form.rating(), None);
        assert!(form.attachments().is_empty());
        assert_eq!(form.category, "Communication");
        assert_eq!(form.employee.as_deref(), Some("Alice Johnson"));
    }

    #[test]
    fn rating_only_for_positive_and_within_scale() {
        let mut form = draft();
        assert!(form.set_rating(Some(0)).is_err());
        assert!(form.set_rating(Some(6)).is_err());
        assert!(form.set_rating(Some(5)).is_ok());

        form.kind = FeedbackKind::Constructive;
        assert!(form.set_rating(Some(3)).is_err());

        let mut log = FeedbackLog::new();
        let entry = form.submit(&mut log).unwrap();
        assert_eq!(entry.rating, None);
    }

    #[test]
    fn attachments_synthesize_names_and_remove_by_index() {
        let mut form = draft();
        let generated = form.add_attachment(None).to_string();
        form.add_attachment(Some("plan.docx"));

        assert!(generated.starts_with("document_") && generated.ends_with(".pdf"));
        assert_eq!(form.remove_attachment(0).unwrap(), generated);
        assert_eq!(form.attachments(), ["plan.docx".to_string()]);
        assert!(form.remove_attachment(5).is_err());
    }
}
