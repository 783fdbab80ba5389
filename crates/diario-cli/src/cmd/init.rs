use anyhow::Context;
use diario_core::{config::Config, paths};
use std::path::Path;

pub fn run(root: &Path, name: Option<&str>) -> anyhow::Result<()> {
    let site_name = name.map(str::to_string).unwrap_or_else(|| {
        root.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "site".to_string())
    });

    println!("Initializing diario in: {}", root.display());

    let config_path = paths::config_path(root);
    if config_path.exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        return Ok(());
    }

    let cfg = Config::new(&site_name);
    cfg.save(root).context("failed to write config.yaml")?;
    tracing::info!(site = %site_name, "wrote default config");
    println!("  created: {}", paths::CONFIG_FILE);
    println!("\nFill in report.leader_contact and report.coordinator_contact, then run 'diario config validate'.");
    Ok(())
}
