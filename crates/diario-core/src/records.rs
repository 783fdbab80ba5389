//! Typed rows as returned by the hosted backend.
//!
//! These sit at the boundary: files or API payloads are parsed into them,
//! and the validator and report code work from there. Unknown columns are
//! ignored because the backend adds bookkeeping fields freely.

use crate::activity::{conflicting_pairs, Activity};
use crate::error::{DiarioError, Result};
use crate::time::ClockTime;
use crate::types::{DiaryStatus, ParticipantRole, Role};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub cluster_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalPerson {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryParticipant {
    pub user: User,
    pub role: ParticipantRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryExternalPerson {
    pub external_person: ExternalPerson,
}

/// A stored activity row. Unlike the form's [`Activity`], its times are
/// already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryActivity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub diary_id: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub activity: String,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ss_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl DiaryActivity {
    pub fn duration_minutes(&self) -> u32 {
        self.start_time.minutes_until(self.end_time).unwrap_or(0)
    }

    pub fn to_form(&self) -> Activity {
        Activity {
            equipment: self.equipment.clone(),
            activity: self.activity.clone(),
            start_time: self.start_time.to_string(),
            end_time: self.end_time.to_string(),
            ss_number: self.ss_number.clone(),
            observations: self.observations.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diary {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub cluster_id: String,
    #[serde(default)]
    pub plant_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: DiaryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant: Option<Plant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default)]
    pub activities: Vec<DiaryActivity>,
    #[serde(default)]
    pub participants: Vec<DiaryParticipant>,
    #[serde(default)]
    pub external_people: Vec<DiaryExternalPerson>,
}

impl Diary {
    pub fn activities_as_form(&self) -> Vec<Activity> {
        self.activities.iter().map(DiaryActivity::to_form).collect()
    }

    pub fn cluster_name(&self) -> Option<&str> {
        self.plant
            .as_ref()
            .and_then(|p| p.cluster.as_ref())
            .map(|c| c.name.as_str())
    }

    pub fn plant_name(&self) -> Option<&str> {
        self.plant.as_ref().map(|p| p.name.as_str())
    }

    /// Overlapping activity pairs. Rows written before overlap checks were
    /// enforced can still carry conflicts.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        conflicting_pairs(&self.activities_as_form())
    }

    /// Reject rows whose time window is empty or reversed.
    pub fn check(&self) -> Result<()> {
        for (i, a) in self.activities.iter().enumerate() {
            if a.start_time >= a.end_time {
                return Err(DiarioError::InvalidDiary {
                    id: self.id.clone(),
                    reason: format!(
                        "activity {} ends at {} before it starts at {}",
                        i + 1,
                        a.end_time,
                        a.start_time
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Read a list of diaries (YAML or JSON) and check every activity window.
pub fn load_diaries(path: &Path) -> Result<Vec<Diary>> {
    let data = std::fs::read_to_string(path)?;
    let diaries: Vec<Diary> = serde_yaml::from_str(&data)?;
    for diary in &diaries {
        diary.check()?;
    }
    Ok(diaries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
