use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod fines;
mod loader;
mod members;
mod models;
mod names;
mod pipeline;
mod report;
mod roster;
mod session;
mod submissions;

use config::LedgerConfig;
use error::LedgerError;
use loader::InputPaths;

#[derive(Parser)]
#[command(name = "fine-ledger")]
#[command(about = "Attendance and assignment fine ledger for book club sessions", long_about = None)]
struct Cli {
    /// JSON file overriding fine amounts, thresholds and roster columns
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a roster CSV export into a members JSON file
    Roster {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "members.json")]
        out: PathBuf,
    },
    /// Build the fine ledger for one session
    Report {
        #[arg(long)]
        roster: Option<PathBuf>,
        /// Session record (서기록) as plain text
        #[arg(long)]
        session: Option<PathBuf>,
        /// Submission log downloaded at the deadline, as plain text
        #[arg(long)]
        interim: Option<PathBuf>,
        /// Final submission log, as plain text
        #[arg(long = "final")]
        final_log: Option<PathBuf>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        best_assignee: Option<String>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    let config = LedgerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Roster { input, out } => {
            let file = std::fs::File::open(&input)
                .with_context(|| format!("failed to open roster {}", input.display()))?;
            let rows = roster::read_roster_csv(file, &config.roster)
                .with_context(|| format!("failed to parse roster {}", input.display()))?;
            let members = roster::build_roster(rows, &config.roster);
            std::fs::write(&out, roster::to_members_json(&members)?)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote {} members to {}.", members.len(), out.display());
        }
        Commands::Report {
            roster,
            session,
            interim,
            final_log,
            date,
            best_assignee,
            format,
            out,
        } => {
            let paths = InputPaths {
                roster,
                session,
                interim,
                final_log,
            }
            .require()?;
            let date = date.ok_or(LedgerError::MissingInput { input: "session date" })?;
            let best_assignee = best_assignee.ok_or(LedgerError::MissingInput {
                input: "best assignee name",
            })?;

            let inputs = loader::load_inputs(&paths, &config.roster).await?;
            let ledger = pipeline::run_ledger(&inputs, date, &best_assignee, &config)?;

            let (rendered, extension) = match format {
                ReportFormat::Markdown => (report::build_report(&ledger, &config), "md"),
                ReportFormat::Json => (report::build_json_report(&ledger)?, "json"),
            };
            let out =
                out.unwrap_or_else(|| PathBuf::from(format!("따책회계록_{date}.{extension}")));
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;

            println!(
                "Ledger for {} written to {} (total fines {}).",
                date,
                out.display(),
                report::format_won(ledger.summary.total)
            );
        }
    }

    Ok(())
}
