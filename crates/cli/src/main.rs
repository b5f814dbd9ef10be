use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::{PageRequest, ShipCriteria, ShipOrder, ShipQuery};
use service::{ServiceConfig, ShipService};
use ship_data::{
    DEFAULT_CURRENT_YEAR, FileShipRepository, Ship, ShipDraft, ShipType, ShipUpdate,
    parse_ship_id,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Page size used by `list` when none is given
const DEFAULT_PAGE_SIZE: usize = 3;

/// Starfleet - ship registry
#[derive(Parser)]
#[command(name = "starfleet")]
#[command(about = "Register, search and rate starships", long_about = None)]
struct Cli {
    /// Path to the ship store
    #[arg(short, long, default_value = "data/ships.dat")]
    data_file: PathBuf,

    /// Year every rating is measured against
    #[arg(long, default_value_t = DEFAULT_CURRENT_YEAR)]
    current_year: i32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ships matching the given filters
    List {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Sort by ID, SPEED, DATE or RATING (ascending)
        #[arg(long)]
        order: Option<ShipOrder>,

        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page_number: usize,

        /// Ships per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Count ships matching the given filters
    Count {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    /// Show a single ship
    Show {
        /// Ship ID
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Register a new ship
    Create {
        #[command(flatten)]
        fields: ShipFieldArgs,
    },

    /// Change some fields of a ship
    Update {
        /// Ship ID
        id: String,

        #[command(flatten)]
        fields: ShipFieldArgs,
    },

    /// Remove a ship
    Delete {
        /// Ship ID
        id: String,
    },

    /// Compute a rating without storing anything
    Rate {
        #[arg(long)]
        speed: f64,

        /// Production year
        #[arg(long)]
        year: i32,

        #[arg(long)]
        used: bool,
    },
}

/// Filters shared by `list` and `count`.
///
/// Dates accept either a year (`3010`, meaning 1 January of that year) or
/// epoch milliseconds.
#[derive(Args)]
struct CriteriaArgs {
    /// Substring of the ship name (case-sensitive)
    #[arg(long)]
    name: Option<String>,

    /// Substring of the home planet (case-sensitive)
    #[arg(long)]
    planet: Option<String>,

    #[arg(long)]
    ship_type: Option<ShipType>,

    /// Produced at or after this date
    #[arg(long, value_parser = parse_date)]
    after: Option<DateTime<Utc>>,

    /// Produced at or before this date
    #[arg(long, value_parser = parse_date)]
    before: Option<DateTime<Utc>>,

    #[arg(long)]
    is_used: Option<bool>,

    #[arg(long)]
    min_speed: Option<f64>,

    #[arg(long)]
    max_speed: Option<f64>,

    #[arg(long)]
    min_crew_size: Option<i32>,

    #[arg(long)]
    max_crew_size: Option<i32>,

    #[arg(long)]
    min_rating: Option<f64>,

    #[arg(long)]
    max_rating: Option<f64>,
}

impl From<CriteriaArgs> for ShipCriteria {
    fn from(args: CriteriaArgs) -> Self {
        ShipCriteria {
            name: args.name,
            planet: args.planet,
            ship_type: args.ship_type,
            after: args.after,
            before: args.before,
            is_used: args.is_used,
            min_speed: args.min_speed,
            max_speed: args.max_speed,
            min_crew_size: args.min_crew_size,
            max_crew_size: args.max_crew_size,
            min_rating: args.min_rating,
            max_rating: args.max_rating,
        }
    }
}

/// Client-settable ship fields for `create` and `update`
#[derive(Args)]
struct ShipFieldArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    planet: Option<String>,

    #[arg(long)]
    ship_type: Option<ShipType>,

    /// Production date, as a year or epoch milliseconds
    #[arg(long, value_parser = parse_date)]
    prod_date: Option<DateTime<Utc>>,

    #[arg(long)]
    is_used: Option<bool>,

    #[arg(long)]
    speed: Option<f64>,

    #[arg(long)]
    crew_size: Option<i32>,
}

impl From<ShipFieldArgs> for ShipDraft {
    fn from(args: ShipFieldArgs) -> Self {
        ShipDraft {
            name: args.name,
            planet: args.planet,
            ship_type: args.ship_type,
            prod_date: args.prod_date,
            is_used: args.is_used,
            speed: args.speed,
            crew_size: args.crew_size,
        }
    }
}

impl From<ShipFieldArgs> for ShipUpdate {
    fn from(args: ShipFieldArgs) -> Self {
        ShipUpdate {
            name: args.name,
            planet: args.planet,
            ship_type: args.ship_type,
            prod_date: args.prod_date,
            is_used: args.is_used,
            speed: args.speed,
            crew_size: args.crew_size,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::with_current_year(cli.current_year);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            criteria,
            order,
            page_number,
            page_size,
            json,
        } => {
            let service = open_service(&cli.data_file, config)?;
            let query = ShipQuery::new(
                criteria.into(),
                order,
                PageRequest::new(page_number, page_size),
            );
            handle_list(&service, &query, json)?
        }
        Commands::Count { criteria } => {
            let service = open_service(&cli.data_file, config)?;
            println!("{}", service.count_ships(&criteria.into())?);
        }
        Commands::Show { id, json } => {
            let service = open_service(&cli.data_file, config)?;
            let ship = service.get_ship(parse_ship_id(&id)?)?;
            print_ship(&ship, json)?;
        }
        Commands::Create { fields } => {
            let mut service = open_service(&cli.data_file, config)?;
            let ship = service.create_ship(fields.into())?;
            println!("{} Created ship", "✓".green());
            print_ship(&ship, false)?;
        }
        Commands::Update { id, fields } => {
            let update: ShipUpdate = fields.into();
            if update.is_empty() {
                return Err(anyhow!("Nothing to update: pass at least one field"));
            }
            let mut service = open_service(&cli.data_file, config)?;
            let ship = service.update_ship(parse_ship_id(&id)?, &update)?;
            println!("{} Updated ship", "✓".green());
            print_ship(&ship, false)?;
        }
        Commands::Delete { id } => {
            let id = parse_ship_id(&id)?;
            let mut service = open_service(&cli.data_file, config)?;
            service.delete_ship(id)?;
            println!("{} Deleted ship {}", "✓".green(), id);
        }
        Commands::Rate { speed, year, used } => handle_rate(&config, speed, year, used)?,
    }

    Ok(())
}

/// Load the ship store and wrap it in a service
fn open_service(
    data_file: &Path,
    config: ServiceConfig,
) -> Result<ShipService<FileShipRepository>> {
    let start = Instant::now();
    let repo = FileShipRepository::open(data_file, &config.rating)
        .with_context(|| format!("Failed to open ship store {}", data_file.display()))?;
    tracing::debug!(
        "Opened ship store {} in {:?}",
        repo.path().display(),
        start.elapsed()
    );
    Ok(ShipService::new(repo, config))
}

/// Handle the 'list' command
fn handle_list(
    service: &ShipService<FileShipRepository>,
    query: &ShipQuery,
    json: bool,
) -> Result<()> {
    let ships = service.get_ships(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ships)?);
        return Ok(());
    }

    let total = service.count_ships(&query.criteria)?;
    let ordering = query
        .order
        .map(|order| format!(", by {}", order.field_name()))
        .unwrap_or_default();
    print!(
        "{}",
        format!(
            "Ships {} of {} (page {}{}):\n",
            ships.len(),
            total,
            query.page.number,
            ordering
        )
        .bold()
        .blue()
    );
    for ship in &ships {
        print_row(ship);
    }
    Ok(())
}

/// Handle the 'rate' command
fn handle_rate(config: &ServiceConfig, speed: f64, year: i32, used: bool) -> Result<()> {
    let rating = config.rating.calculate(speed, used, year)?;
    println!(
        "Rating for speed {} ({}, built {}): {}",
        speed,
        if used { "used" } else { "new" },
        year,
        rating.to_string().green()
    );
    Ok(())
}

fn print_ship(ship: &Ship, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ship)?);
        return Ok(());
    }
    print!("{}", format!("Ship {}\n", display_id(ship)).bold().blue());
    println!("{}Name: {}", "• ".green(), ship.name);
    println!("{}Planet: {}", "• ".green(), ship.planet);
    println!("{}Type: {}", "• ".green(), ship.ship_type);
    println!(
        "{}Produced: {}",
        "• ".green(),
        ship.prod_date.format("%Y-%m-%d")
    );
    println!("{}Used: {}", "• ".green(), ship.is_used);
    println!("{}Speed: {}", "• ".cyan(), ship.speed);
    println!("{}Crew: {}", "• ".cyan(), ship.crew_size);
    println!("{}Rating: {}", "• ".cyan(), ship.rating);
    Ok(())
}

fn print_row(ship: &Ship) {
    println!(
        "{:>4}  {:<24} {:<12} {:<9} {}  {:<5} speed {:<5} crew {:<5} rating {}",
        display_id(ship).green(),
        ship.name,
        ship.planet,
        ship.ship_type.to_string(),
        ship.production_year(),
        if ship.is_used { "used" } else { "new" },
        ship.speed,
        ship.crew_size,
        ship.rating.to_string().bold()
    );
}

fn display_id(ship: &Ship) -> String {
    ship.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Parse a year (up to four digits) or epoch milliseconds
fn parse_date(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a year or epoch milliseconds", raw))?;

    let date = if (0..=9999).contains(&value) {
        Utc.with_ymd_and_hms(value as i32, 1, 1, 0, 0, 0).single()
    } else {
        Utc.timestamp_millis_opt(value).single()
    };
    date.ok_or_else(|| format!("'{}' is out of range", raw))
}
