//! User roles and the role capability table
//!
//! Landing routes and role-restricted areas both come from [`ROLE_PROFILES`].

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role carried by every identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Uploads and reads their own reports
    Patient,
    /// Follows a list of patients
    Clinic,
    /// Reads population-level insights
    Government,
}

/// One row of the role capability table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    /// Role this row describes
    pub role: Role,
    /// Default dashboard for the role
    pub landing: &'static str,
    /// Route prefix reserved for the role, if any (always ends in `/`)
    pub area_prefix: Option<&'static str>,
}

/// Role capability table
pub static ROLE_PROFILES: [RoleProfile; 3] = [
    RoleProfile {
        role: Role::Patient,
        landing: "/dashboard",
        area_prefix: None,
    },
    RoleProfile {
        role: Role::Clinic,
        landing: "/clinic/dashboard",
        area_prefix: Some("/clinic/"),
    },
    RoleProfile {
        role: Role::Government,
        landing: "/government/dashboard",
        area_prefix: Some("/government/"),
    },
];

impl Role {
    /// Every role, in table order
    pub const ALL: [Role; 3] = [Role::Patient, Role::Clinic, Role::Government];

    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Clinic => "clinic",
            Role::Government => "government",
        }
    }

    /// Capability row for this role
    pub fn profile(self) -> &'static RoleProfile {
        let index = match self {
            Role::Patient => 0,
            Role::Clinic => 1,
            Role::Government => 2,
        };
        &ROLE_PROFILES[index]
    }

    /// Default landing route
    pub fn landing_route(self) -> &'static str {
        self.profile().landing
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" => Ok(Role::Patient),
            "clinic" => Ok(Role::Clinic),
            "government" => Ok(Role::Government),
            other => Err(Error::invalid_argument(format!("Unknown role: {other}"))),
        }
    }
}
