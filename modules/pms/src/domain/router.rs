use tracing::{debug, warn};

use crate::contract::model::{Identity, Screen, ViewKey};
use crate::domain::error::DomainError;
use crate::domain::navigation::can_view;

/// Single-level view router: one current view, no history.
///
/// Every navigation is re-checked against the signed-in role, so a view that
/// is not on the role's menu cannot be reached by key either.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    current: ViewKey,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self {
            current: ViewKey::Dashboard,
        }
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewKey {
        self.current
    }

    /// On rejection the current view is left unchanged.
    pub fn navigate(
        &mut self,
        identity: Option<&Identity>,
        view: ViewKey,
    ) -> Result<Screen, DomainError> {
        let identity = identity.ok_or(DomainError::Unauthenticated)?;

        if !can_view(identity.role, view) {
            warn!(view = %view, role = %identity.role, "Navigation rejected");
            return Err(DomainError::view_forbidden(view, identity.role));
        }

        debug!(from = %self.current, to = %view, "Navigating");
        self.current = view;
        Ok(self.screen())
    }

    pub fn screen(&self) -> Screen {
        screen_for(self.current)
    }

    /// Back to the dashboard, e.g. after sign-out.
    pub fn reset(&mut self) {
        self.current = ViewKey::Dashboard;
    }
}

/// Views without a dedicated screen render the dashboard.
pub fn screen_for(view: ViewKey) -> Screen {
    match view {
        ViewKey::Pdp => Screen::DevelopmentPlan,
        ViewKey::Evaluation => Screen::Evaluation,
        ViewKey::Feedback => Screen::Feedback,
        ViewKey::Reports => Screen::Reports,
        ViewKey::Users => Screen::UserManagement,
        ViewKey::Notifications => Screen::Notifications,
        ViewKey::Dashboard
        | ViewKey::Goals
        | ViewKey::Team
        | ViewKey::Settings
        | ViewKey::Categories
        | ViewKey::Audit
        | ViewKey::Calendar => Screen::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::model::Role;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "1".into(),
            name: "Test".into(),
            email: "t@company.com".into(),
            role,
            department: "Engineering".into(),
        }
    }

    #[test]
    fn starts_on_dashboard() {
        let router = ViewRouter::new();
        assert_eq!(router.current(), ViewKey::Dashboard);
        assert_eq!(router.screen(), Screen::Dashboard);
    }

    #[test]
    fn authorized_navigation_switches_screen() {
        let mut router = ViewRouter::new();
        let admin = identity(Role::Admin);

        let screen = router.navigate(Some(&admin), ViewKey::Users).unwrap();
        assert_eq!(screen, Screen::UserManagement);
        assert_eq!(router.current(), ViewKey::Users);
    }

    #[test]
    fn unauthorized_navigation_is_rejected_and_view_kept() {
        let mut router = ViewRouter::new();
        let employee = identity(Role::Employee);
        router.navigate(Some(&employee), ViewKey::Pdp).unwrap();

        let err = router.navigate(Some(&employee), ViewKey::Users).unwrap_err();
        assert!(matches!(
            err,
            DomainError::ViewForbidden {
                view: ViewKey::Users,
                role: Role::Employee
            }
        ));
        assert_eq!(router.current(), ViewKey::Pdp);
    }

    #[test]
    fn signed_out_navigation_is_rejected() {
        let mut router = ViewRouter::new();
        let err = router.navigate(None, ViewKey::Dashboard).unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated));
    }

    #[test]
    fn views_without_screen_render_dashboard() {
        let mut router = ViewRouter::new();
        let admin = identity(Role::Admin);
        assert_eq!(router.navigate(Some(&admin), ViewKey::Audit).unwrap(), Screen::Dashboard);
        assert_eq!(router.current(), ViewKey::Audit);
    }
}
