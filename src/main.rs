//! dragcal - Entry Point

use clap::Parser;
use dragcal::model::{CalendarDate, WeekStart};
use dragcal::view::{ColorConfig, RunOptions};
use std::path::PathBuf;
use tracing::info;

/// dragcal - monthly calendar with tap and drag multi-day selection
#[derive(Parser, Debug)]
#[command(name = "dragcal")]
#[command(version)]
#[command(about = "Terminal month calendar: click days to toggle them, drag to select runs")]
pub struct Args {
    /// Month to show first, as YYYY-MM or YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub month: Option<CalendarDate>,

    /// First column of the grid: sunday or monday
    #[arg(short, long)]
    pub week_start: Option<WeekStart>,

    /// Open with the help overlay visible
    #[arg(long)]
    pub show_help: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print selected dates (YYYY-MM-DD, one per line) after quitting
    #[arg(short, long)]
    pub print_selection: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = dragcal::config::load_config_with_precedence(args.config.clone())?;
        let merged = dragcal::config::merge_config(config_file);
        let with_env = dragcal::config::apply_env_overrides(merged)?;

        // Flags only override when explicitly set
        let help_override = args.show_help.then_some(true);
        dragcal::config::apply_cli_overrides(with_env, args.week_start, help_override)
    };

    dragcal::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let options = RunOptions {
        initial_month: args.month.unwrap_or_else(CalendarDate::today),
        week_start: config.week_start,
        show_help: config.show_help,
        color: ColorConfig::from_env_and_args(args.no_color),
    };

    let selected = dragcal::view::run(options)?;
    info!(count = selected.len(), "Exited with selection");

    if args.print_selection {
        for date in selected {
            println!("{date}");
        }
    }

    Ok(())
}
