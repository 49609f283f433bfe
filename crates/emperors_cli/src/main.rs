//! Command-line front-end over `emperors_core`.
//!
//! # Responsibility
//! - Load a dataset file and print derived chart data as text or JSON.
//! - Keep output deterministic so it can be diffed between dataset edits.

use clap::{Parser, Subcommand};
use emperors_core::{
    core_version, default_log_level, flush_logging, format_year, init_logging, DatasetReport,
    JsonFileSource, LogSettings, ReportService, Timeline,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "emperors", about = "Derive chart data from the Roman emperors dataset")]
struct Cli {
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print medians, lanes and tallies for a dataset file.
    Report {
        path: PathBuf,
        /// Print the full report as pretty JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print one line per timeline entry.
    Timeline { path: PathBuf },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let started =
            LogSettings::new(level, log_dir).and_then(|settings| init_logging(&settings));
        if let Err(err) = started {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let code = match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    };
    // File logs are buffered; the process exits before the flush interval.
    flush_logging();
    code
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Report { path, json } => {
            let report = ReportService::new(JsonFileSource::new(path)).build_report()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Timeline { path } => {
            let timeline = ReportService::new(JsonFileSource::new(path)).build_timeline()?;
            print_timeline(&timeline);
        }
        Command::Version => println!("emperors_core version={}", core_version()),
    }
    Ok(())
}

fn print_report(report: &DatasetReport) {
    println!("records={}", report.record_count);
    println!(
        "timeline entries={} lanes={} excluded={}",
        report.timeline.entries.len(),
        report.timeline.total_lanes,
        report.timeline_excluded()
    );
    println!(
        "median_reign={} median_age={}",
        years(report.medians.median_reign),
        years(report.medians.median_age)
    );
    for tally in &report.killers {
        println!("killer {}={}", tally.killer, tally.count);
    }
    for group in &report.dynasty_ages {
        println!(
            "dynasty {} members={} median_age={}",
            group.dynasty,
            group.members.len(),
            years(group.median_age)
        );
    }
}

fn print_timeline(timeline: &Timeline) {
    for entry in &timeline.entries {
        println!(
            "{:>2} {} {} - {}",
            entry.lane,
            entry.identifier,
            format_year(entry.start_year),
            format_year(entry.end_year)
        );
    }
    println!("lanes={}", timeline.total_lanes);
}

fn years(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |value| format!("{value} years"))
}
