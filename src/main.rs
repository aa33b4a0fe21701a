// Enrolment Calendar - CLI
// Assess a date of birth, list intake dates, print the term table.

use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use enrolment_calendar::{
    assess, intake_dates, logging, parse_date_of_birth, parse_today, report, upcoming_intakes,
    EnrolmentConfig,
};

/// Pre-enrolment calculator: age, year level and intake dates.
#[derive(Parser)]
#[command(name = "enrolment-calendar", version, about)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a JSON config file (calendar, classification policy).
    #[arg(short, long, global = true, env = "ENROLMENT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a child from their date of birth (YYYY-MM-DD).
    Assess {
        date_of_birth: String,

        /// Evaluate as of this date instead of today.
        #[arg(long)]
        today: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List intake dates of the configured calendar.
    Intakes {
        /// Evaluate as of this date instead of today.
        #[arg(long)]
        today: Option<String>,

        /// Include past dates and skip the display limit.
        #[arg(long)]
        all: bool,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the configured term table.
    Calendar {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = EnrolmentConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Assess {
            date_of_birth,
            today: pinned,
            json,
        } => {
            let dob = parse_date_of_birth(&date_of_birth)?;
            let assessment = assess(dob, parse_today(pinned.as_deref())?, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                println!("{}", report::render_assessment(&assessment));
            }
        }
        Command::Intakes {
            today: pinned,
            all,
            json,
        } => {
            let dates = intake_dates(&config.calendar);
            let dates = if all {
                dates
            } else {
                upcoming_intakes(
                    &dates,
                    parse_today(pinned.as_deref())?,
                    config.max_upcoming_intakes,
                )
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&dates)?);
            } else if dates.is_empty() {
                println!(
                    "No upcoming intake dates in the {} calendar",
                    config.calendar.year()
                );
            } else {
                println!("{}", report::render_intakes(&dates, &config.calendar));
            }
        }
        Command::Calendar { json } => {
            if json {
                let body = serde_json::to_string_pretty(&config.calendar)
                    .context("Failed to serialize calendar")?;
                println!("{}", body);
            } else {
                println!("{}", report::render_calendar(&config.calendar));
            }
        }
    }

    Ok(())
}
