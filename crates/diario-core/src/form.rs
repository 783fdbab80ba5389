use crate::activity::{check_overlap, validate_activity, Activity};
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A problem found in the diary form, attached to the field it belongs to.
/// Paths use the form's dotted notation, e.g. `activities.2.end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormIssue {
    pub path: String,
    pub message: String,
}

impl FormIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// The data entered when creating or editing a diary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryForm {
    #[serde(default)]
    pub plant_id: String,
    #[serde(default)]
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_observations: Option<String>,
}

impl DiaryForm {
    /// Read a form from a YAML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let form: DiaryForm = serde_yaml::from_str(&data)?;
        Ok(form)
    }

    /// Write the form back, as JSON for `.json` paths and YAML otherwise.
    pub fn save(&self, path: &Path) -> Result<()> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let data = if is_json {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        crate::io::atomic_write(path, data.as_bytes())
    }

    /// Every issue that blocks submission. Order: entry fields, then each
    /// activity in row order, then the first time conflict.
    pub fn validate(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();

        if self.plant_id.is_empty() {
            issues.push(FormIssue::new("plant_id", "select a plant"));
        }
        if self.user_ids.is_empty() {
            issues.push(FormIssue::new("user_ids", "select at least one user"));
        }
        if self.date.is_empty() {
            issues.push(FormIssue::new("date", "date is required"));
        } else if parse_date(&self.date).is_none() {
            issues.push(FormIssue::new("date", "date must be YYYY-MM-DD"));
        }
        if self.activities.is_empty() {
            issues.push(FormIssue::new("activities", "add at least one activity"));
        }

        for (i, activity) in self.activities.iter().enumerate() {
            if let Err(e) = validate_activity(activity) {
                issues.push(FormIssue::new(
                    format!("activities.{i}.{}", e.field()),
                    e.to_string(),
                ));
            }
        }

        if let Err(overlap) = check_overlap(&self.activities) {
            issues.push(FormIssue::new(
                format!("activities.{}.start_time", overlap.index_b),
                overlap.to_string(),
            ));
        }

        issues
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_empty()
    }
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_form() -> DiaryForm {
        DiaryForm {
            plant_id: "p1".into(),
            user_ids: vec!["u1".into()],
            date: "2024-05-10".into(),
            activities: vec![
                Activity::new("Tracker 12", "Inspeção", "08:00", "09:30"),
                Activity::new("Inversor 2", "Troca de fusível", "09:30", "11:00"),
            ],
            general_observations: None,
        }
    }

    #[test]
    fn valid_form_has_no_issues() {
        let form = valid_form();
        assert!(form.validate().is_empty());
        assert!(form.is_submittable());
    }

    #[test]
    fn empty_form_reports_entry_fields() {
        let paths: Vec<String> = DiaryForm::default()
            .validate()
            .into_iter()
            .map(|i| i.path)
            .collect();
        assert_eq!(paths, vec!["plant_id", "user_ids", "date", "activities"]);
    }

    #[test]
    fn bad_date_is_reported() {
        let mut form = valid_form();
        form.date = "10/05/2024".into();
        let issues = form.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "date");
    }

    #[test]
    fn activity_issues_carry_row_index() {
        let mut form = valid_form();
        form.activities[1].end_time = "09:00".into();
        let issues = form.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "activities.1.end_time");
    }

    #[test]
    fn overlap_is_reported_on_later_row() {
        let mut form = valid_form();
        form.activities[1].start_time = "09:00".into();
        let issues = form.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "activities.1.start_time");
        assert!(issues[0].message.contains("activity 1 and 2"));
    }

    #[test]
    fn load_reads_json_and_yaml() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("entry.json");
        std::fs::write(&json_path, serde_json::to_string(&valid_form()).unwrap()).unwrap();
        assert_eq!(DiaryForm::load(&json_path).unwrap(), valid_form());

        let yaml_path = dir.path().join("entry.yaml");
        std::fs::write(&yaml_path, serde_yaml::to_string(&valid_form()).unwrap()).unwrap();
        assert_eq!(DiaryForm::load(&yaml_path).unwrap(), valid_form());
    }

    #[test]
    fn save_keeps_file_format() {
        let dir = TempDir::new().unwrap();
        let json_path = dir.path().join("entry.json");
        valid_form().save(&json_path).unwrap();
        let raw = std::fs::read_to_string(&json_path).unwrap();
        assert!(raw.trim_start().starts_with('{'));
        assert_eq!(DiaryForm::load(&json_path).unwrap(), valid_form());

        let yaml_path = dir.path().join("entry.yml");
        valid_form().save(&yaml_path).unwrap();
        let raw = std::fs::read_to_string(&yaml_path).unwrap();
        assert!(raw.starts_with("plant_id: p1"));
    }
}
