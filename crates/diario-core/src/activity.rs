use crate::time::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// One equipment/time-bounded task inside a diary entry, as typed into the
/// form. Times stay as strings until validation so that half-filled rows can
/// be edited freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ss_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl Activity {
    pub fn new(
        equipment: impl Into<String>,
        activity: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            equipment: equipment.into(),
            activity: activity.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            ss_number: None,
            observations: None,
        }
    }

    pub fn start(&self) -> Option<ClockTime> {
        self.start_time.parse().ok()
    }

    pub fn end(&self) -> Option<ClockTime> {
        self.end_time.parse().ok()
    }

    /// Both ends parsed with `start < end`.
    fn window(&self) -> Option<(ClockTime, ClockTime)> {
        Some((self.start()?, self.end()?)).filter(|(start, end)| start < end)
    }

    /// Length of the activity in minutes when its range is well-formed.
    pub fn duration_minutes(&self) -> Option<u32> {
        let (start, end) = self.window()?;
        start.minutes_until(end)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityField {
    Equipment,
    Activity,
    StartTime,
    EndTime,
}

impl ActivityField {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityField::Equipment => "equipment",
            ActivityField::Activity => "activity",
            ActivityField::StartTime => "start_time",
            ActivityField::EndTime => "end_time",
        }
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum FieldError {
    MissingField(ActivityField),
    InvalidTime(ActivityField),
    InvalidRange,
}

impl FieldError {
    /// The field the message belongs next to in the form.
    pub fn field(self) -> ActivityField {
        match self {
            FieldError::MissingField(f) | FieldError::InvalidTime(f) => f,
            FieldError::InvalidRange => ActivityField::EndTime,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MissingField(field) => write!(f, "{field} is required"),
            FieldError::InvalidTime(field) => write!(f, "{field} must be a time in HH:MM form"),
            FieldError::InvalidRange => f.write_str("end time must be after start time"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Two activities of the same entry whose time windows intersect.
/// Indices are zero-based, `index_a < index_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapError {
    pub index_a: usize,
    pub index_b: usize,
}

impl fmt::Display for OverlapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "time conflict between activity {} and {}",
            self.index_a + 1,
            self.index_b + 1
        )
    }
}

impl std::error::Error for OverlapError {}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate_activity(a: &Activity) -> Result<(), FieldError> {
    let required = [
        (ActivityField::Equipment, &a.equipment),
        (ActivityField::Activity, &a.activity),
        (ActivityField::StartTime, &a.start_time),
        (ActivityField::EndTime, &a.end_time),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.is_empty()) {
        return Err(FieldError::MissingField(*field));
    }

    let start = a
        .start()
        .ok_or(FieldError::InvalidTime(ActivityField::StartTime))?;
    let end = a
        .end()
        .ok_or(FieldError::InvalidTime(ActivityField::EndTime))?;
    if start >= end {
        return Err(FieldError::InvalidRange);
    }
    Ok(())
}

fn overlaps(a: (ClockTime, ClockTime), b: (ClockTime, ClockTime)) -> bool {
    a.0 < b.1 && a.1 > b.0
}

/// Report the first pair `(i, j)`, `i < j`, whose `[start, end)` windows
/// intersect. Rows whose range is not well-formed are skipped.
pub fn check_overlap(activities: &[Activity]) -> Result<(), OverlapError> {
    let windows: Vec<_> = activities.iter().map(Activity::window).collect();
    for (i, a) in windows.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in windows.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            if overlaps(*a, *b) {
                return Err(OverlapError {
                    index_a: i,
                    index_b: j,
                });
            }
        }
    }
    Ok(())
}

/// Every conflicting pair, in the same order `check_overlap` scans them.
pub fn conflicting_pairs(activities: &[Activity]) -> Vec<(usize, usize)> {
    let windows: Vec<_> = activities.iter().map(Activity::window).collect();
    let mut pairs = Vec::new();
    for (i, a) in windows.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in windows.iter().enumerate().skip(i + 1) {
            if let Some(b) = b {
                if overlaps(*a, *b) {
                    pairs.push((i, j));
                }
            }
        }
    }
    pairs
}

/// Stable sort by start time. Rows without a parseable start time go last,
/// keeping their relative order.
pub fn sort_by_start_time(activities: &[Activity]) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

pub fn sort_in_place(activities: &mut [Activity]) {
    // `None` sorts before `Some`, so key on (missing, time).
    activities.sort_by_key(|a| {
        let start = a.start();
        (start.is_none(), start)
    });
}

// ---------------------------------------------------------------------------
// Form list operations (operate on a mutable Vec<Activity>)
// ---------------------------------------------------------------------------

/// Append a blank row and return its index.
pub fn add_activity(activities: &mut Vec<Activity>) -> usize {
    activities.push(Activity::default());
    activities.len() - 1
}

/// Remove the row at `index`. The form always keeps one row, so removing the
/// last remaining one is refused. Returns whether a row was removed.
pub fn remove_activity(activities: &mut Vec<Activity>, index: usize) -> bool {
    if activities.len() <= 1 || index >= activities.len() {
        return false;
    }
    activities.remove(index);
    true
}

/// Insert a row after `index` carrying over its equipment and activity only.
/// Returns the index of the copy.
pub fn duplicate_activity(activities: &mut Vec<Activity>, index: usize) -> Option<usize> {
    let source = activities.get(index)?;
    let copy = Activity {
        equipment: source.equipment.clone(),
        activity: source.activity.clone(),
        ..Activity::default()
    };
    activities.insert(index + 1, copy);
    Some(index + 1)
}

/// Move the row at `from` so it ends up at position `to`.
pub fn move_activity(activities: &mut Vec<Activity>, from: usize, to: usize) -> bool {
    if from >= activities.len() || to >= activities.len() {
        return false;
    }
    let row = activities.remove(from);
    activities.insert(to, row);
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
