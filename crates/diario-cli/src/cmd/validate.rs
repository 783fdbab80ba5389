use crate::output::{print_json, print_table};
use anyhow::Context;
use diario_core::form::DiaryForm;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> anyhow::Result<()> {
    let form = DiaryForm::load(file)
        .with_context(|| format!("failed to read diary entry {}", file.display()))?;
    tracing::debug!(activities = form.activities.len(), "loaded diary entry");

    let issues = form.validate();

    if json {
        print_json(&serde_json::json!({
            "valid": issues.is_empty(),
            "issues": issues,
        }))?;
    } else if issues.is_empty() {
        println!(
            "Entry is valid: {} activit{} on {}.",
            form.activities.len(),
            if form.activities.len() == 1 { "y" } else { "ies" },
            form.date
        );
    } else {
        let rows = issues
            .iter()
            .map(|i| vec![i.path.clone(), i.message.clone()])
            .collect();
        print_table(&["FIELD", "PROBLEM"], rows);
    }

    if !issues.is_empty() {
        anyhow::bail!("diary entry has {} issue(s)", issues.len());
    }
    Ok(())
}
