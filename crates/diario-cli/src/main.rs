mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, report::ReportSubcommand};
use diario_core::types::Role;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "diario",
    about = "Operations diary rules: validate activity entries, check role access, build reports",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root (default: auto-detect from .diario/ or .git/)
    #[arg(long, global = true, env = "DIARIO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .diario/config.yaml for this site
    Init {
        /// Site name written into the config (default: directory name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Validate a diary entry file (YAML or JSON) before submission
    Validate { file: PathBuf },

    /// Print a diary entry's activities ordered by start time
    Sort {
        file: PathBuf,
        /// Write the sorted entry back to the file
        #[arg(long)]
        write: bool,
    },

    /// Check whether a role satisfies a role requirement
    Authorize {
        /// Role of the requesting user
        #[arg(long)]
        role: Role,
        /// Required role; repeat to list several (the lowest one applies)
        #[arg(long = "require", required = true)]
        required: Vec<Role>,
    },

    /// Evaluate the configured guard for a view
    Guard {
        /// View name, e.g. `admin` or `diaries/new`; `login` is the public page
        view: String,
        /// Role of the signed-in user (omit for an anonymous visitor)
        #[arg(long)]
        role: Option<Role>,
    },

    /// Build reports from an exported diary list
    Report {
        #[command(subcommand)]
        subcommand: ReportSubcommand,
    },

    /// Inspect and validate the site configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    tracing::debug!(root = %root.display(), "resolved site root");

    let result = match cli.command {
        Commands::Init { name } => cmd::init::run(&root, name.as_deref()),
        Commands::Validate { file } => cmd::validate::run(&file, cli.json),
        Commands::Sort { file, write } => cmd::sort::run(&file, write, cli.json),
        Commands::Authorize { role, required } => cmd::authorize::run(role, required, cli.json),
        Commands::Guard { view, role } => cmd::guard::run(&root, &view, role, cli.json),
        Commands::Report { subcommand } => cmd::report::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
