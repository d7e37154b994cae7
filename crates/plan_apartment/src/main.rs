mod config;

use anyhow::{Context, Result};
use clap::Parser;
use floorplan::{ApartmentReport, DEFAULT_PLAN_FILE, export_report_csv, read_plan, segment_rooms};
use log::{debug, error, info};
use std::{io::Write, path::PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Count furniture per room of an ASCII apartment plan", long_about = None)]
struct Args {
    /// Apartment plan file
    #[arg(short = 'i', long = "rooms", default_value = DEFAULT_PLAN_FILE)]
    rooms: PathBuf,

    /// Also export the report as CSV (directory from PLAN_APARTMENT_OUTPUT_DIR)
    #[arg(long = "csv")]
    csv: bool,
}

fn main() {
    // Logs go to stderr; RUST_LOG overrides the default level
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    // Unknown flags print usage and exit with status 2
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("Error: {e}");
        for cause in e.chain().skip(1) {
            error!("Caused by: {cause}");
        }
        let _ = std::io::stderr().flush();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    debug!("Reading plan from {}", args.rooms.display());
    let plan = read_plan(&args.rooms)?;

    let report = ApartmentReport::new(segment_rooms(&plan));
    if report.is_empty() {
        info!("No rooms found in {}", args.rooms.display());
    }
    println!("{report}");

    if args.csv {
        let config = config::Config::from_env()?;
        let path = export_report_csv(&report, config.output_dir.as_deref())
            .context("exporting CSV report")?;
        info!("Report saved to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};
    use tempfile::TempDir;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_rooms_file() {
        let args = Args::try_parse_from(["plan_apartment"]).unwrap();
        assert_eq!(args.rooms, PathBuf::from("rooms.txt"));
        assert!(!args.csv);
    }

    #[test]
    fn test_short_and_long_rooms_flag() {
        let args = Args::try_parse_from(["plan_apartment", "-i", "plan.txt"]).unwrap();
        assert_eq!(args.rooms, PathBuf::from("plan.txt"));

        let args = Args::try_parse_from(["plan_apartment", "--rooms", "other.txt", "--csv"]).unwrap();
        assert_eq!(args.rooms, PathBuf::from("other.txt"));
        assert!(args.csv);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["plan_apartment", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_help_flag() {
        let err = Args::try_parse_from(["plan_apartment", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_run_missing_file_fails() {
        let args = Args {
            rooms: PathBuf::from("definitely_missing_rooms.txt"),
            csv: false,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("definitely_missing_rooms.txt"));
    }

    #[test]
    fn test_run_reads_plan() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rooms.txt");
        std::fs::write(&path, "+----+\n|(a)W|\n+----+\n").unwrap();

        let args = Args {
            rooms: path,
            csv: false,
        };
        assert!(run(&args).is_ok());
    }
}
