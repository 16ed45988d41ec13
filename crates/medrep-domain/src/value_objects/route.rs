//! Route-level value objects: visibility, access decisions and views

use super::role::Role;
use serde::Serialize;
use std::fmt;

/// Who may see a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Anyone, logged in or not
    Public,
    /// Any logged-in user
    Authenticated,
    /// Logged-in users holding one of these roles
    Restricted(&'static [Role]),
}

impl Visibility {
    /// True if `role` satisfies a role restriction (always true otherwise)
    pub fn admits(&self, role: Role) -> bool {
        match self {
            Visibility::Public | Visibility::Authenticated => true,
            Visibility::Restricted(roles) => roles.contains(&role),
        }
    }
}

/// Outcome of consulting the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the requested path
    Allow,
    /// Send the visitor to the login page
    RedirectLogin,
    /// Send the visitor to the given landing route
    RedirectDefault(&'static str),
}

/// View rendered for a resolved path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "view", content = "id", rename_all = "snake_case")]
pub enum View {
    /// Public landing page
    Home,
    /// Login form
    Login,
    /// Registration form
    Register,
    /// Help and support
    Help,
    /// Unknown path
    NotFound,
    /// Patient dashboard
    PatientDashboard,
    /// Clinic dashboard
    ClinicDashboard,
    /// Government dashboard
    GovernmentDashboard,
    /// Report upload
    Upload,
    /// Profile page
    Profile,
    /// Settings page
    Settings,
    /// Report list
    Reports,
    /// A single report
    ReportDetail(String),
    /// Clinic patient list
    PatientList,
    /// A single clinic patient
    PatientDetail(String),
    /// Government population insights
    PopulationInsights,
    /// Government health trends
    HealthTrends,
    /// Shown after an unexpected render failure
    Recovery,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Home => f.write_str("home"),
            View::Login => f.write_str("login"),
            View::Register => f.write_str("register"),
            View::Help => f.write_str("help"),
            View::NotFound => f.write_str("not-found"),
            View::PatientDashboard => f.write_str("patient-dashboard"),
            View::ClinicDashboard => f.write_str("clinic-dashboard"),
            View::GovernmentDashboard => f.write_str("government-dashboard"),
            View::Upload => f.write_str("upload"),
            View::Profile => f.write_str("profile"),
            View::Settings => f.write_str("settings"),
            View::Reports => f.write_str("reports"),
            View::ReportDetail(id) => write!(f, "report-detail({id})"),
            View::PatientList => f.write_str("patient-list"),
            View::PatientDetail(id) => write!(f, "patient-detail({id})"),
            View::PopulationInsights => f.write_str("population-insights"),
            View::HealthTrends => f.write_str("health-trends"),
            View::Recovery => f.write_str("recovery"),
        }
    }
}

/// Where a navigation ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Path originally asked for (normalized)
    pub requested: String,
    /// Path after following redirects
    pub location: String,
    /// View rendered at `location`
    pub view: View,
}

impl Navigation {
    /// True if the visitor was sent somewhere else
    pub fn redirected(&self) -> bool {
        self.requested != self.location
    }
}
