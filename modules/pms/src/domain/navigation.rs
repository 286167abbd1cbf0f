//! Static role → navigation map.

use crate::contract::model::{Icon, NavItem, Role, ViewKey};

const fn item(label: &'static str, view: ViewKey, icon: Icon) -> NavItem {
    NavItem { label, view, icon }
}

const EMPLOYEE_MENU: &[NavItem] = &[
    item("Dashboard", ViewKey::Dashboard, Icon::Home),
    item("My Development Plan", ViewKey::Pdp, Icon::Target),
    item("Feedback History", ViewKey::Feedback, Icon::MessageSquare),
    item("My Evaluations", ViewKey::Evaluation, Icon::ClipboardList),
    item("Goals & Objectives", ViewKey::Goals, Icon::TrendingUp),
];

const SUPERVISOR_MENU: &[NavItem] = &[
    item("Dashboard", ViewKey::Dashboard, Icon::Home),
    item("Team Management", ViewKey::Team, Icon::Users),
    item("Development Plans", ViewKey::Pdp, Icon::Target),
    item("Coaching & Feedback", ViewKey::Feedback, Icon::MessageSquare),
    item("Evaluations", ViewKey::Evaluation, Icon::ClipboardList),
    item("Team Reports", ViewKey::Reports, Icon::BarChart),
];

const ADMIN_MENU: &[NavItem] = &[
    item("Dashboard", ViewKey::Dashboard, Icon::Home),
    item("User Management", ViewKey::Users, Icon::Users),
    item("System Settings", ViewKey::Settings, Icon::Settings),
    item("Performance Categories", ViewKey::Categories, Icon::ClipboardList),
    item("Organization Reports", ViewKey::Reports, Icon::BarChart),
    item("Audit Logs", ViewKey::Audit, Icon::FileText),
];

/// Shown to every signed-in role below the role menu.
pub const QUICK_ACTIONS: &[NavItem] = &[
    item("Notifications", ViewKey::Notifications, Icon::Bell),
    item("Schedule Review", ViewKey::Calendar, Icon::Calendar),
];

pub fn menu_for_role(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Supervisor => SUPERVISOR_MENU,
        Role::Employee => EMPLOYEE_MENU,
    }
}

/// Lookup by raw role key; keys outside the map get the employee menu.
pub fn menu_for(role_key: &str) -> &'static [NavItem] {
    role_key
        .parse::<Role>()
        .map(menu_for_role)
        .unwrap_or(EMPLOYEE_MENU)
}

/// Whether `view` is reachable from anything the role is shown.
pub fn can_view(role: Role, view: ViewKey) -> bool {
    menu_for_role(role)
        .iter()
        .chain(QUICK_ACTIONS)
        .any(|item| item.view == view)
}
