use crate::contract::model::Identity;
use crate::domain::error::DomainError;
use crate::domain::forms::{all_filled, FILL_ALL_FIELDS};
use crate::domain::session::SessionStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !all_filled(&[&self.email, &self.password]) {
            return Err(DomainError::validation(FILL_ALL_FIELDS));
        }
        Ok(())
    }

    pub async fn submit(&self, session: &SessionStore) -> Result<Identity, DomainError> {
        self.validate()?;
        session.login(&self.email, &self.password).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let err = LoginForm::new("admin@company.com", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert!(LoginForm::new("", "password123").validate().is_err());
        assert!(LoginForm::new("a@b.c", "x").validate().is_ok());
    }
}
