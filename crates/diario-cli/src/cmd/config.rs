use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use diario_core::config::{Config, WarnLevel};
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the site configuration and view guards
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;

    if json {
        return print_json(&config);
    }

    println!("Site: {}", config.site.name);
    println!("Leader contact: {}", config.report.leader_contact);
    println!("Coordinator contact: {}", config.report.coordinator_contact);
    println!();
    let rows = config
        .views
        .iter()
        .map(|(name, guard)| {
            let roles = guard
                .roles
                .as_ref()
                .map(|r| {
                    r.as_slice()
                        .iter()
                        .map(|role| role.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .unwrap_or_else(|| "-".to_string());
            vec![
                name.clone(),
                if guard.require_auth { "yes" } else { "no" }.to_string(),
                roles,
            ]
        })
        .collect();
    print_table(&["VIEW", "SIGN-IN", "ROLES"], rows);
    Ok(())
}

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }
    Ok(())
}
