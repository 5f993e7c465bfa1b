//! qdesk - Entry Point

use chrono::NaiveDate;
use clap::Parser;
use qdesk::config::CliOverrides;
use qdesk::model::{AppError, QueueFilter};
use qdesk::source::FileBackend;
use std::path::PathBuf;
use tracing::info;

/// qdesk - front desk TUI for the outpatient check-in queue
#[derive(Parser, Debug)]
#[command(name = "qdesk")]
#[command(version)]
#[command(about = "TUI front desk for the outpatient check-in queue")]
pub struct Args {
    /// Path to the JSON queue file (falls back to config / QDESK_QUEUE_FILE)
    pub file: Option<PathBuf>,

    /// Day to show, as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Only show appointments for this department
    #[arg(long)]
    pub department: Option<String>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show statistics panel on startup
    #[arg(long)]
    pub stats: bool,

    /// Only allow forward steps along the visit workflow
    #[arg(long)]
    pub strict: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = qdesk::config::load_config_with_precedence(args.config.clone())?;
        let merged = qdesk::config::merge_config(config_file);
        let with_env = qdesk::config::apply_env_overrides(merged)?;

        qdesk::config::apply_cli_overrides(
            with_env,
            CliOverrides {
                queue_file: args.file.clone(),
                department: args.department.clone(),
                show_stats: args.stats,
                strict: args.strict,
            },
        )
    };

    qdesk::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let queue_file = config.queue_file.ok_or(AppError::NoQueueFile)?;
    let backend = FileBackend::new(queue_file).map_err(AppError::from)?;
    info!(queue_file = %backend.path().display(), "Opened queue file");

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut filter = QueueFilter::for_date(date);
    if let Some(department) = config.department {
        filter = filter.with_department(department);
    }

    let cli_args = qdesk::view::CliArgs {
        stats: config.show_stats,
        search: args.search,
        no_color: args.no_color,
    };

    qdesk::view::run_with_backend(
        Box::new(backend),
        filter,
        config.transition_policy,
        cli_args,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["qdesk", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["qdesk", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["qdesk"]);
        assert_eq!(args.file, None);
        assert_eq!(args.date, None);
        assert_eq!(args.department, None);
        assert_eq!(args.search, None);
        assert!(!args.stats);
        assert!(!args.strict);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["qdesk", "queue.json"]);
        assert_eq!(args.file, Some(PathBuf::from("queue.json")));
    }

    #[test]
    fn test_date_short_flag() {
        let args = Args::parse_from(["qdesk", "-d", "2026-10-18"]);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 10, 18));
    }

    #[test]
    fn test_date_rejects_garbage() {
        let result = Args::try_parse_from(["qdesk", "--date", "tomorrow"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_short_flag() {
        let args = Args::parse_from(["qdesk", "-s", "smith"]);
        assert_eq!(args.search, Some("smith".to_string()));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "qdesk",
            "queue.json",
            "--department",
            "Cardiology",
            "--stats",
            "--strict",
            "--no-color",
            "--config",
            "/tmp/qdesk.toml",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("queue.json")));
        assert_eq!(args.department, Some("Cardiology".to_string()));
        assert!(args.stats);
        assert!(args.strict);
        assert!(args.no_color);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/qdesk.toml")));
    }

    #[test]
    fn test_strict_flag_flows_through_config_precedence_chain() {
        let args = Args::parse_from(["qdesk", "--strict"]);
        let config = qdesk::config::apply_cli_overrides(
            qdesk::config::merge_config(None),
            CliOverrides {
                strict: args.strict,
                ..CliOverrides::default()
            },
        );
        assert_eq!(
            config.transition_policy,
            qdesk::state::TransitionPolicy::Strict
        );
    }
}
