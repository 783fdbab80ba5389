//! Hierarchical role checks and view guards.
//!
//! Authorization compares levels only: a requirement names the least
//! privileged role that may pass, and every role above it passes too. There
//! is no way to express "maintainers only".

use crate::types::Role;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RequiredRoles
// ---------------------------------------------------------------------------

/// One or many acceptable roles.
///
/// Listing several roles is the same as listing only the lowest of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiredRoles {
    One(Role),
    Many(Vec<Role>),
}

impl RequiredRoles {
    pub fn as_slice(&self) -> &[Role] {
        match self {
            RequiredRoles::One(r) => std::slice::from_ref(r),
            RequiredRoles::Many(rs) => rs,
        }
    }

    /// True when `role` is at or above at least one listed role.
    pub fn admits(&self, role: Role) -> bool {
        self.as_slice()
            .iter()
            .any(|r| role_level(role) >= role_level(*r))
    }

    /// The effective lower bound, `None` for an empty list.
    pub fn minimum(&self) -> Option<Role> {
        self.as_slice().iter().copied().min_by_key(|r| r.level())
    }
}

impl From<Role> for RequiredRoles {
    fn from(role: Role) -> Self {
        RequiredRoles::One(role)
    }
}

impl From<Vec<Role>> for RequiredRoles {
    fn from(roles: Vec<Role>) -> Self {
        RequiredRoles::Many(roles)
    }
}

impl From<&[Role]> for RequiredRoles {
    fn from(roles: &[Role]) -> Self {
        RequiredRoles::Many(roles.to_vec())
    }
}

impl<const N: usize> From<[Role; N]> for RequiredRoles {
    fn from(roles: [Role; N]) -> Self {
        RequiredRoles::Many(roles.to_vec())
    }
}

pub fn role_level(role: Role) -> u8 {
    role.level()
}

/// True when `user_role` is at or above at least one of `required`.
pub fn authorize(user_role: Role, required: impl Into<RequiredRoles>) -> bool {
    required.into().admits(user_role)
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
}

/// Read-only view of who is signed in. Built once per session by the
/// caller and handed to every guard check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
    Deny,
}

impl GuardDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, GuardDecision::Allow)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::RedirectToLogin => "redirect_to_login",
            GuardDecision::RedirectToDashboard => "redirect_to_dashboard",
            GuardDecision::Deny => "deny",
        }
    }
}

/// Protection for a view: optional sign-in plus an optional role floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guard {
    #[serde(default = "default_require_auth")]
    pub require_auth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<RequiredRoles>,
}

fn default_require_auth() -> bool {
    true
}

impl Default for Guard {
    fn default() -> Self {
        Self {
            require_auth: true,
            roles: None,
        }
    }
}

impl Guard {
    pub fn signed_in() -> Self {
        Self::default()
    }

    pub fn at_least(roles: impl Into<RequiredRoles>) -> Self {
        Self {
            require_auth: true,
            roles: Some(roles.into()),
        }
    }

    pub fn open() -> Self {
        Self {
            require_auth: false,
            roles: None,
        }
    }

    /// The role check only runs for a signed-in user; an anonymous session
    /// on a view that does not require sign-in is let through.
    pub fn check(&self, session: &Session) -> GuardDecision {
        match session.role() {
            None if self.require_auth => GuardDecision::RedirectToLogin,
            None => GuardDecision::Allow,
            Some(role) => match &self.roles {
                Some(required) if !required.admits(role) => GuardDecision::Deny,
                _ => GuardDecision::Allow,
            },
        }
    }
}

/// Guard for pages that only make sense signed out, such as the login page.
pub fn public_guard(session: &Session) -> GuardDecision {
    if session.user().is_some() {
        GuardDecision::RedirectToDashboard
    } else {
        GuardDecision::Allow
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
