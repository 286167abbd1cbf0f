use crate::contract::model::{Identity, RegisterData, Role};
use crate::domain::error::DomainError;
use crate::domain::forms::{all_filled, FILL_ALL_FIELDS};
use crate::domain::session::SessionStore;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub department: String,
}

impl RegistrationForm {
    /// Checks run in order; the first failure is the one reported.
    pub fn validate(&self) -> Result<RegisterData, DomainError> {
        let role = match self.role {
            Some(role) if all_filled(&[&self.name, &self.email, &self.password, &self.department]) => {
                role
            }
            _ => return Err(DomainError::validation(FILL_ALL_FIELDS)),
        };

        if self.password != self.confirm_password {
            return Err(DomainError::validation("Passwords do not match"));
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(RegisterData {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role,
            department: self.department.clone(),
        })
    }

    pub async fn submit(&self, session: &SessionStore) -> Result<Identity, DomainError> {
        let data = self.validate()?;
        session.register(data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: "Carol Davis".into(),
            email: "carol@company.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            role: Some(Role::Employee),
            department: "Sales".into(),
        }
    }

    #[test]
    fn complete_form_produces_register_data() {
        let data = filled().validate().unwrap();
        assert_eq!(data.name, "Carol Davis");
        assert_eq!(data.role, Role::Employee);
        assert_eq!(data.department, "Sales");
    }

    #[test]
    fn missing_role_counts_as_missing_field() {
        let form = RegistrationForm {
            role: None,
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err().to_string(), "Please fill in all fields");
    }

    #[test]
    fn confirmation_must_match_exactly() {
        let form = RegistrationForm {
            confirm_password: "secret2".into(),
            ..filled()
        };
        assert_eq!(form.validate().unwrap_err().to_string(), "Passwords do not match");
    }

    #[test]
    fn password_needs_six_characters() {
        let form = RegistrationForm {
            password: "abc12".into(),
            confirm_password: "abc12".into(),
            ..filled()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );

        let six = RegistrationForm {
            password: "abc123".into(),
            confirm_password: "abc123".into(),
            ..filled()
        };
        assert!(six.validate().is_ok());
    }

    #[test]
    fn failed_validation_keeps_fields() {
        let form = RegistrationForm {
            confirm_password: "nope".into(),
            ..filled()
        };
        let before = form.clone();
        let _ = form.validate();
        assert_eq!(form, before);
    }
}
