mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spbu_timetable::{
    DEFAULT_BASE_URL, HttpTransport, TimetableClient,
    timetable::addresses::{ClassroomFilter, SeatingType},
};

/// Query the St. Petersburg University timetable
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Root of the timetable API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Log requests (-v) or everything including dependencies (-vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search educators by last name
    Search { query: String },

    /// Events of an educator between two dates (YYYY-MM-DD)
    Week {
        educator_id: u32,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },

    /// Events of an educator for the whole term
    Term {
        educator_id: u32,
        /// Show the next term instead of the current one
        #[arg(long)]
        next: bool,
    },

    /// Events in a classroom (datetimes as YYYY-MM-DDThh:mm:ss)
    ClassroomEvents {
        oid: String,
        #[arg(long)]
        from: NaiveDateTime,
        #[arg(long)]
        to: NaiveDateTime,
    },

    /// Whether a classroom is occupied within a time range
    Busy {
        oid: String,
        #[arg(long)]
        from: NaiveDateTime,
        #[arg(long)]
        to: NaiveDateTime,
    },

    /// University buildings
    Addresses(FilterArgs),

    /// Classrooms of a building
    Classrooms {
        address_oid: String,
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Extracurricular divisions
    Divisions,

    /// Events of an extracurricular division
    Extracur {
        alias: String,
        /// Any date within the wanted month
        #[arg(long)]
        month: Option<NaiveDate>,
    },
}

#[derive(ClapArgs)]
struct FilterArgs {
    #[arg(long)]
    seating: Option<Seating>,

    /// Minimal number of seats
    #[arg(long)]
    capacity: Option<u32>,

    #[arg(long)]
    equipment: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Seating {
    Theater,
    Amphitheater,
    Roundtable,
}

impl From<FilterArgs> for ClassroomFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            seating: args.seating.map(|s| match s {
                Seating::Theater => SeatingType::Theater,
                Seating::Amphitheater => SeatingType::Amphitheater,
                Seating::Roundtable => SeatingType::Roundtable,
            }),
            capacity: args.capacity,
            equipment: args.equipment,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let transport = match args.timeout {
        Some(secs) => HttpTransport::with_timeout(&args.base_url, Duration::from_secs(secs)),
        None => HttpTransport::new(&args.base_url),
    }
    .context("Could not create HTTP transport")?;
    let client = TimetableClient::with_transport(transport);

    match args.command {
        Command::Search { query } => {
            let educators = client
                .search_educators(&query)
                .with_context(|| format!("Could not search educators for {query:?}"))?;
            log::info!("Found {} educator(s)", educators.len());
            print_json(&educators)
        }
        Command::Week {
            educator_id,
            from,
            to,
        } => print_json(
            &client
                .educator_week_events(educator_id, from, to)
                .context("Could not get educator events")?,
        ),
        Command::Term { educator_id, next } => print_json(
            &client
                .educator_term_events(educator_id, next)
                .context("Could not get educator term events")?,
        ),
        Command::ClassroomEvents { oid, from, to } => print_json(
            &client
                .classroom_events(&oid, from, to)
                .context("Could not get classroom events")?,
        ),
        Command::Busy { oid, from, to } => {
            let busyness = client
                .is_classroom_busy(&oid, from, to)
                .context("Could not check classroom busyness")?;
            log::info!(
                "Classroom {oid} is {}",
                if busyness.is_busy { "busy" } else { "free" }
            );
            print_json(&busyness)
        }
        Command::Addresses(filter) => print_json(
            &client
                .addresses(&filter.into())
                .context("Could not get addresses")?,
        ),
        Command::Classrooms {
            address_oid,
            filter,
        } => print_json(
            &client
                .classrooms(&address_oid, &filter.into())
                .context("Could not get classrooms")?,
        ),
        Command::Divisions => print_json(
            &client
                .extracur_divisions()
                .context("Could not get extracurricular divisions")?,
        ),
        Command::Extracur { alias, month } => print_json(
            &client
                .extracur_events(&alias, month)
                .context("Could not get extracurricular events")?,
        ),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Could not serialize result")?;
    println!("{json}");
    Ok(())
}
