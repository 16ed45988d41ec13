//! Access Policy
//!
//! Decides whether a session may see a path, and where to send it if not.
//!
//! # Rule table
//!
//! | Pattern | Visibility |
//! |---------|------------|
//! | `/`, `/login`, `/register`, `/help`, `/404` | Public |
//! | `/dashboard`, `/profile`, `/settings` | Authenticated |
//! | `/upload`, `/reports` | Patient |
//! | `/reports/:id` | Patient, Clinic |
//! | role area prefixes (`/clinic/*`, `/government/*`) | owning role |
//! | anything else | Authenticated |
//!
//! Area prefix rules are built from [`ROLE_PROFILES`] and are checked before
//! the exact and templated rules.

use medrep_domain::constants::{
    DASHBOARD_ROUTE, HELP_ROUTE, HOME_ROUTE, LOGIN_ROUTE, NOT_FOUND_ROUTE, REGISTER_ROUTE,
};
use medrep_domain::value_objects::{AccessDecision, ROLE_PROFILES, Role, Session, Visibility};
use tracing::trace;

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const REPORT_READERS: &[Role] = &[Role::Patient, Role::Clinic];

/// Path pattern of an access rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches one path exactly
    Exact(&'static str),
    /// Matches paths with the same segments, `:name` segments match any value
    Template(&'static str),
    /// Matches the prefix (which ends in `/`), and the prefix without its slash
    Prefix(&'static str),
}

impl RoutePattern {
    /// True if the normalized `path` matches
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RoutePattern::Exact(exact) => *exact == path,
            RoutePattern::Template(template) => match_template(template, path).is_some(),
            RoutePattern::Prefix(prefix) => {
                path.starts_with(prefix) || path == prefix.trim_end_matches('/')
            }
        }
    }
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRule {
    /// Paths this rule covers
    pub pattern: RoutePattern,
    /// Who may see them
    pub visibility: Visibility,
}

impl AccessRule {
    const fn new(pattern: RoutePattern, visibility: Visibility) -> Self {
        Self {
            pattern,
            visibility,
        }
    }
}

/// Rule applied to paths no other rule matches
pub const DEFAULT_RULE: AccessRule =
    AccessRule::new(RoutePattern::Prefix("/"), Visibility::Authenticated);

const PAGE_RULES: [AccessRule; 11] = [
    AccessRule::new(RoutePattern::Exact(HOME_ROUTE), Visibility::Public),
    AccessRule::new(RoutePattern::Exact(LOGIN_ROUTE), Visibility::Public),
    AccessRule::new(RoutePattern::Exact(REGISTER_ROUTE), Visibility::Public),
    AccessRule::new(RoutePattern::Exact(HELP_ROUTE), Visibility::Public),
    AccessRule::new(RoutePattern::Exact(NOT_FOUND_ROUTE), Visibility::Public),
    AccessRule::new(RoutePattern::Exact(DASHBOARD_ROUTE), Visibility::Authenticated),
    AccessRule::new(RoutePattern::Exact("/profile"), Visibility::Authenticated),
    AccessRule::new(RoutePattern::Exact("/settings"), Visibility::Authenticated),
    AccessRule::new(
        RoutePattern::Exact("/upload"),
        Visibility::Restricted(PATIENT_ONLY),
    ),
    AccessRule::new(
        RoutePattern::Exact("/reports"),
        Visibility::Restricted(PATIENT_ONLY),
    ),
    AccessRule::new(
        RoutePattern::Template("/reports/:id"),
        Visibility::Restricted(REPORT_READERS),
    ),
];

/// Path-to-decision function over the rule table
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    area_rules: Vec<AccessRule>,
    page_rules: Vec<AccessRule>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessPolicy {
    /// Build the portal's rule table
    pub fn new() -> Self {
        let area_rules = ROLE_PROFILES
            .iter()
            .filter_map(|profile| {
                profile.area_prefix.map(|prefix| {
                    AccessRule::new(
                        RoutePattern::Prefix(prefix),
                        Visibility::Restricted(std::slice::from_ref(&profile.role)),
                    )
                })
            })
            .collect();

        Self {
            area_rules,
            page_rules: PAGE_RULES.to_vec(),
        }
    }

    /// The single rule governing a normalized path
    pub fn rule_for(&self, path: &str) -> &AccessRule {
        self.area_rules
            .iter()
            .chain(self.page_rules.iter())
            .find(|rule| rule.pattern.matches(path))
            .unwrap_or(&DEFAULT_RULE)
    }

    /// Decide what happens when `session` asks for `path`
    pub fn decide(&self, path: &str, session: &Session) -> AccessDecision {
        let path = normalize_path(path);
        let role = session.role();

        let decision = match role {
            Some(role) if path == HOME_ROUTE || path == LOGIN_ROUTE => {
                AccessDecision::RedirectDefault(default_route_for(role))
            }
            _ => {
                let rule = self.rule_for(&path);
                match (rule.visibility, role) {
                    (Visibility::Public, _) => AccessDecision::Allow,
                    (_, None) => AccessDecision::RedirectLogin,
                    (visibility, Some(role)) if !visibility.admits(role) => {
                        AccessDecision::RedirectDefault(default_route_for(role))
                    }
                    (_, Some(_)) => AccessDecision::Allow,
                }
            }
        };

        trace!(path = %path, role = ?role, decision = ?decision, "Access decided");
        decision
    }
}

/// Landing route of a role
pub fn default_route_for(role: Role) -> &'static str {
    role.landing_route()
}

/// Canonical form of a requested path
///
/// Drops the query string and fragment, drops a trailing slash (except on the
/// root), and maps the empty path to `/`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim();
    let trimmed = trimmed.trim_end_matches('/');

    if trimmed.is_empty() {
        HOME_ROUTE.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Match a `:name` template against a normalized path, returning the captured segments
pub fn match_template<'a>(template: &str, path: &'a str) -> Option<Vec<&'a str>> {
    let mut captures = Vec::new();
    let mut template_segments = template.split('/');
    let mut path_segments = path.split('/');

    loop {
        match (template_segments.next(), path_segments.next()) {
            (None, None) => return Some(captures),
            (Some(expected), Some(actual)) if expected.starts_with(':') => {
                if actual.is_empty() {
                    return None;
                }
                captures.push(actual);
            }
            (Some(expected), Some(actual)) if expected == actual => {}
            _ => return None,
        }
    }
}
