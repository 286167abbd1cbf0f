use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failed to parse one of the closed string vocabularies (role, view key, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Closed string vocabularies: serde, `Display` and `FromStr` share one spelling table.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Determines visible navigation and default record scope.
    Role("role") {
        Admin => "admin",
        Supervisor => "supervisor",
        Employee => "employee",
    }
}

string_enum! {
    UserStatus("user status") {
        Active => "active",
        Inactive => "inactive",
    }
}

string_enum! {
    #[derive(Default)]
    FeedbackKind("feedback type") {
        #[default]
        Positive => "positive",
        Constructive => "constructive",
    }
}

string_enum! {
    #[derive(Default)]
    Priority("priority") {
        High => "high",
        #[default]
        Medium => "medium",
        Low => "low",
    }
}

string_enum! {
    NotificationKind("notification type") {
        Evaluation => "evaluation",
        Feedback => "feedback",
        Meeting => "meeting",
        Deadline => "deadline",
        System => "system",
    }
}

string_enum! {
    /// Which category set an evaluation covers.
    #[derive(Default)]
    EvaluationKind("evaluation type") {
        #[default]
        Employee => "employee",
        Supervisor => "supervisor",
    }
}

string_enum! {
    EvaluationPeriod("evaluation period") {
        Monthly => "monthly",
        Quarterly => "quarterly",
        BiAnnual => "bi-annual",
        Annual => "annual",
    }
}

string_enum! {
    /// Navigation key selecting what the router renders.
    ViewKey("view") {
        Dashboard => "dashboard",
        Pdp => "pdp",
        Feedback => "feedback",
        Evaluation => "evaluation",
        Goals => "goals",
        Team => "team",
        Reports => "reports",
        Users => "users",
        Settings => "settings",
        Categories => "categories",
        Audit => "audit",
        Notifications => "notifications",
        Calendar => "calendar",
    }
}

string_enum! {
    ExportFormat("export format") {
        Csv => "csv",
        Pdf => "pdf",
    }
}

/// The signed-in user. Unique by email; replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
}

/// Registration payload handed to the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
}

/// Row of the user administration table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub status: UserStatus,
    pub last_login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: String,
    pub kind: FeedbackKind,
    pub category: String,
    pub message: String,
    pub date: NaiveDate,
    pub project_tag: Option<String>,
    pub attachments: Vec<String>,
    /// Only kept for positive feedback.
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdpGoal {
    pub id: String,
    pub skill: String,
    pub description: String,
    pub timeline: Option<NaiveDate>,
    pub resources: Vec<String>,
    pub expected_outcome: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub read: bool,
    pub priority: Priority,
    #[serde(default)]
    pub action_required: bool,
}

/// One category's entry inside an evaluation draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationRating {
    pub category_id: String,
    /// 1..=6, unset until the rating field is first edited.
    pub rating: Option<u8>,
    pub supervisor_comment: String,
    pub employee_comment: String,
}

/// Icon reference rendered next to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Target,
    MessageSquare,
    ClipboardList,
    TrendingUp,
    Users,
    BarChart,
    Settings,
    FileText,
    Bell,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub view: ViewKey,
    pub icon: Icon,
}

/// What the router renders for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    DevelopmentPlan,
    Evaluation,
    Feedback,
    Reports,
    UserManagement,
    Notifications,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_enums_roundtrip_through_text() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
        for view in ViewKey::ALL {
            assert_eq!(view.to_string().parse::<ViewKey>().unwrap(), *view);
        }
        assert_eq!("bi-annual".parse::<EvaluationPeriod>().unwrap(), EvaluationPeriod::BiAnnual);
    }

    #[test]
    fn derived_defaults_pick_marked_variant() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(FeedbackKind::default(), FeedbackKind::Positive);
        assert_eq!(EvaluationKind::default(), EvaluationKind::Employee);
        // the marker does not disturb the spelling table
        assert_eq!(Priority::ALL, &[Priority::High, Priority::Medium, Priority::Low]);
        assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
    }

    #[test]
    fn unknown_text_is_rejected_with_kind() {
        let err = "owner".parse::<Role>().unwrap_err();
        assert_eq!(err.kind, "role");
        assert_eq!(err.to_string(), "unknown role 'owner'");
    }

    #[test]
    fn identity_serializes_role_lowercase() {
        let identity = Identity {
            id: "7".into(),
            name: "Jane Smith".into(),
            email: "supervisor@company.com".into(),
            role: Role::Supervisor,
            department: "Engineering".into(),
        };

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "supervisor");

        let back: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(back, identity);
    }
}
