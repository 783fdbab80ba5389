use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::{Args, Subcommand};
use diario_core::auth::SessionUser;
use diario_core::config::{Config, ReportConfig};
use diario_core::records::{load_diaries, Diary};
use diario_core::report::{self, ReportPeriod};
use diario_core::types::Role;
use diario_core::DiarioError;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ReportSubcommand {
    /// Daily text reports for every selected diary
    Text(ReportArgs),
    /// Daily text reports grouped by cluster
    Clusters(ReportArgs),
    /// Service-ticket (SS) numbers per plant
    Ss(ReportArgs),
    /// Worked hours per day and cluster
    Hours(ReportArgs),
    /// Find diaries by activity, equipment, SS number or plant name
    Search {
        #[command(flatten)]
        args: ReportArgs,
        /// Text to look for (case-insensitive); omit to match every diary
        #[arg(long, default_value = "")]
        term: String,
        /// Only diaries on this day (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// Calendar events, one per diary
    Calendar(ReportArgs),
}

#[derive(Args)]
pub struct ReportArgs {
    /// Exported diary list (YAML or JSON)
    file: PathBuf,
    /// First day to include (YYYY-MM-DD); needs --to
    #[arg(long, requires = "to")]
    from: Option<String>,
    /// Last day to include (YYYY-MM-DD); needs --from
    #[arg(long, requires = "from")]
    to: Option<String>,
    /// Build the report as a user with this role (non-admins see only their cluster)
    #[arg(long = "as-role")]
    as_role: Option<Role>,
    /// Cluster id of the viewing user
    #[arg(long)]
    cluster: Option<String>,
}

pub fn run(root: &Path, subcmd: ReportSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ReportSubcommand::Text(args) => text(root, &args, false, json),
        ReportSubcommand::Clusters(args) => text(root, &args, true, json),
        ReportSubcommand::Ss(args) => ss(root, &args, json),
        ReportSubcommand::Hours(args) => hours(root, &args, json),
        ReportSubcommand::Search { args, term, on } => search(&args, &term, on.as_deref(), json),
        ReportSubcommand::Calendar(args) => calendar(&args, json),
    }
}

/// Report settings come from the site config when one exists.
fn report_config(root: &Path) -> anyhow::Result<ReportConfig> {
    match Config::load(root) {
        Ok(cfg) => Ok(cfg.report),
        Err(DiarioError::NotInitialized) => {
            tracing::warn!("no .diario/config.yaml found; report footer contacts will be blank");
            Ok(ReportConfig::default())
        }
        Err(e) => Err(e).context("failed to load config"),
    }
}

fn parse_day(s: &str) -> anyhow::Result<chrono::NaiveDate> {
    s.parse::<chrono::NaiveDate>()
        .map_err(|_| DiarioError::InvalidDate(s.to_string()))
        .context("invalid report period")
}

fn period(args: &ReportArgs) -> anyhow::Result<ReportPeriod> {
    Ok(ReportPeriod {
        start: args.from.as_deref().map(parse_day).transpose()?,
        end: args.to.as_deref().map(parse_day).transpose()?,
    })
}

fn viewer(args: &ReportArgs) -> Option<SessionUser> {
    args.as_role.map(|role| SessionUser {
        id: "cli".to_string(),
        name: "cli".to_string(),
        role,
        cluster_id: args.cluster.clone(),
    })
}

fn load(args: &ReportArgs) -> anyhow::Result<Vec<Diary>> {
    let diaries = load_diaries(&args.file)
        .with_context(|| format!("failed to read diaries from {}", args.file.display()))?;
    tracing::debug!(count = diaries.len(), "loaded diaries");
    for d in &diaries {
        let conflicts = d.conflicts();
        if !conflicts.is_empty() {
            tracing::warn!(diary = %d.id, ?conflicts, "diary has overlapping activities");
        }
    }
    Ok(diaries)
}

fn text(root: &Path, args: &ReportArgs, by_cluster: bool, json: bool) -> anyhow::Result<()> {
    let cfg = report_config(root)?;
    let period = period(args)?;
    let diaries = load(args)?;
    let viewer = viewer(args);
    let selected = report::select_diaries(&diaries, &period, viewer.as_ref());

    let body = if by_cluster {
        report::cluster_report_text(&selected, &period, &cfg)
    } else {
        report::complete_report_text(&selected, &period, &cfg)
    };

    if json {
        print_json(&serde_json::json!({
            "diaries": selected.len(),
            "text": body,
        }))?;
    } else {
        print!("{body}");
    }
    Ok(())
}

fn ss(root: &Path, args: &ReportArgs, json: bool) -> anyhow::Result<()> {
    let cfg = report_config(root)?;
    let period = period(args)?;
    let diaries = load(args)?;
    let viewer = viewer(args);
    let selected = report::select_diaries(&diaries, &period, viewer.as_ref());
    let rows = report::ss_report(&selected, &cfg);

    if json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No SS numbers in the selected diaries.");
        return Ok(());
    }
    let table = rows
        .iter()
        .map(|r| {
            vec![
                r.cluster_name.clone(),
                r.plant_name.clone(),
                r.ss_count.to_string(),
                r.ss_list.join(", "),
            ]
        })
        .collect();
    print_table(&["CLUSTER", "PLANT", "COUNT", "SS"], table);
    Ok(())
}

fn hours(root: &Path, args: &ReportArgs, json: bool) -> anyhow::Result<()> {
    let cfg = report_config(root)?;
    let period = period(args)?;
    let diaries = load(args)?;
    let viewer = viewer(args);
    let selected = report::select_diaries(&diaries, &period, viewer.as_ref());
    let rows = report::hours_report(&selected, &cfg);

    if json {
        return print_json(&rows);
    }
    let table = rows
        .iter()
        .map(|r| {
            vec![
                r.date.format("%d/%m/%Y").to_string(),
                r.cluster_name.clone(),
                r.activities.len().to_string(),
                r.total_hours.clone(),
            ]
        })
        .collect();
    print_table(&["DATE", "CLUSTER", "ACTIVITIES", "HOURS"], table);
    Ok(())
}

fn search(args: &ReportArgs, term: &str, on: Option<&str>, json: bool) -> anyhow::Result<()> {
    let day = on.map(parse_day).transpose()?;
    let period = period(args)?;
    let diaries = load(args)?;
    let viewer = viewer(args);
    let selected = report::select_diaries(&diaries, &period, viewer.as_ref());
    let found = report::search_diaries(&selected, term, day);
    tracing::debug!(term, matched = found.len(), "diary search");

    if json {
        return print_json(&found);
    }
    if found.is_empty() {
        println!("No diaries match.");
        return Ok(());
    }
    let table = found
        .iter()
        .map(|d| {
            vec![
                d.id.clone(),
                d.date.format("%d/%m/%Y").to_string(),
                d.plant_name().unwrap_or("N/A").to_string(),
                d.activities.len().to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "DATE", "PLANT", "ACTIVITIES"], table);
    Ok(())
}

fn calendar(args: &ReportArgs, json: bool) -> anyhow::Result<()> {
    let period = period(args)?;
    let diaries = load(args)?;
    let viewer = viewer(args);
    let selected = report::select_diaries(&diaries, &period, viewer.as_ref());
    let events = report::calendar_events(&selected);

    if json {
        return print_json(&events);
    }
    let table = events
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.start.format("%d/%m/%Y %H:%M").to_string(),
                e.end.format("%H:%M").to_string(),
                e.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "START", "END", "TITLE"], table);
    Ok(())
}
