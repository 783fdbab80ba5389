use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role, declared in increasing order of privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Technician,
    Maintainer,
    ClusterManager,
    Admin,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::Technician,
            Role::Maintainer,
            Role::ClusterManager,
            Role::Admin,
        ]
    }

    /// Position in the privilege hierarchy, starting at 1.
    pub fn level(self) -> u8 {
        match self {
            Role::Technician => 1,
            Role::Maintainer => 2,
            Role::ClusterManager => 3,
            Role::Admin => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Technician => "technician",
            Role::Maintainer => "maintainer",
            Role::ClusterManager => "cluster_manager",
            Role::Admin => "admin",
        }
    }

    /// Label printed next to team members in the daily report.
    pub fn label(self) -> &'static str {
        match self {
            Role::Technician => "Técnico Eletrotécnico",
            Role::Maintainer => "Mantenedor",
            Role::ClusterManager => "Gerente de Cluster",
            Role::Admin => "Administrador",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::DiarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technician" => Ok(Role::Technician),
            "maintainer" => Ok(Role::Maintainer),
            "cluster_manager" | "cluster-manager" => Ok(Role::ClusterManager),
            "admin" => Ok(Role::Admin),
            _ => Err(crate::error::DiarioError::InvalidRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DiaryStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiaryStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl DiaryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DiaryStatus::Pending => "pending",
            DiaryStatus::InProgress => "in_progress",
            DiaryStatus::Completed => "completed",
            DiaryStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for DiaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DiaryStatus {
    type Err = crate::error::DiarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DiaryStatus::Pending),
            "in_progress" => Ok(DiaryStatus::InProgress),
            "completed" => Ok(DiaryStatus::Completed),
            "cancelled" => Ok(DiaryStatus::Cancelled),
            _ => Err(crate::error::DiarioError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ParticipantRole
// ---------------------------------------------------------------------------

/// How a user is attached to a diary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Creator,
    Participant,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
