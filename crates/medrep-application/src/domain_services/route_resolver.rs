//! Route Resolver
//!
//! Maps an allowed path and the visitor's role to the view to render.

use super::access_policy::normalize_path;
use medrep_domain::value_objects::{Role, View};

/// View for `path`; `/dashboard` fans out by role
pub fn resolve(path: &str, role: Option<Role>) -> View {
    let path = normalize_path(path);
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    match segments.as_slice() {
        [""] => View::Home,
        ["login"] => View::Login,
        ["register"] => View::Register,
        ["help"] => View::Help,
        ["dashboard"] => match role {
            Some(Role::Clinic) => View::ClinicDashboard,
            Some(Role::Government) => View::GovernmentDashboard,
            Some(Role::Patient) | None => View::PatientDashboard,
        },
        ["upload"] => View::Upload,
        ["profile"] => View::Profile,
        ["settings"] => View::Settings,
        ["reports"] => View::Reports,
        ["reports", id] => View::ReportDetail((*id).to_string()),
        ["clinic", "dashboard"] => View::ClinicDashboard,
        ["clinic", "patients"] => View::PatientList,
        ["clinic", "patients", id] => View::PatientDetail((*id).to_string()),
        ["government", "dashboard"] => View::GovernmentDashboard,
        ["government", "population"] => View::PopulationInsights,
        ["government", "trends"] => View::HealthTrends,
        _ => View::NotFound,
    }
}
