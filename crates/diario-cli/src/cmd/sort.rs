use crate::output::{print_json, print_table};
use anyhow::Context;
use diario_core::{activity, form::DiaryForm};
use std::path::Path;

pub fn run(file: &Path, write: bool, json: bool) -> anyhow::Result<()> {
    let mut form = DiaryForm::load(file)
        .with_context(|| format!("failed to read diary entry {}", file.display()))?;
    activity::sort_in_place(&mut form.activities);

    if write {
        form.save(file)
            .with_context(|| format!("failed to write {}", file.display()))?;
        tracing::info!(file = %file.display(), "rewrote entry in start-time order");
    }

    if json {
        print_json(&form.activities)?;
    } else {
        let rows = form
            .activities
            .iter()
            .enumerate()
            .map(|(i, a)| {
                vec![
                    (i + 1).to_string(),
                    a.start_time.clone(),
                    a.end_time.clone(),
                    a.equipment.clone(),
                    a.activity.clone(),
                    a.ss_number.clone().unwrap_or_default(),
                ]
            })
            .collect();
        print_table(&["#", "START", "END", "EQUIPMENT", "ACTIVITY", "SS"], rows);
    }
    Ok(())
}
