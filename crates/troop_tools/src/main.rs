//! Troop logistics - command-line tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use troop_core::unit_type::{TravelRole, UnitType};
use troop_tools::loader::{self, ToolResult, DEFAULT_CATALOG_PATH};
use troop_tools::{report, validate};

#[derive(Parser)]
#[command(name = "troop-tools")]
#[command(about = "Troop logistics calculator")]
struct Cli {
    /// Path to the unit catalog
    #[arg(long, global = true, default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a unit catalog file
    Validate {
        /// Path to the catalog (defaults to --catalog)
        path: Option<PathBuf>,
    },
    /// Travel time over a distance, per unit type or for a troop group
    Travel {
        /// Distance in fields
        #[arg(long)]
        distance: f64,
        /// attack or support
        #[arg(long, default_value = "attack")]
        role: TravelRole,
        /// Troop list, e.g. "axe=6500,ram=300" or 13 comma-separated counts
        #[arg(long)]
        troops: Option<String>,
        /// World speed (passed through, not applied)
        #[arg(long, default_value_t = 1.0)]
        world_speed: f64,
        /// Unit speed (passed through, not applied)
        #[arg(long, default_value_t = 1.0)]
        unit_speed: f64,
    },
    /// Troops needed to haul an amount of resources
    Haul {
        /// Unit type doing the hauling
        #[arg(long)]
        unit: UnitType,
        /// Resources to haul
        #[arg(long)]
        resources: f64,
        /// Extra haul percentage (30 for +30%)
        #[arg(long, default_value_t = 0.0)]
        bonus: f64,
    },
    /// Population used by a troop group
    Population {
        /// Troop list, e.g. "axe=6500,ram=300" or 13 comma-separated counts
        #[arg(long)]
        troops: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> ToolResult<()> {
    match &cli.command {
        Commands::Validate { path } => {
            let path = path.as_deref().unwrap_or(&cli.catalog);
            tracing::info!("Validating unit catalog: {}", path.display());
            validate::validate_catalog_file(path)?;
            tracing::info!("Validation passed");
        }
        Commands::Travel {
            distance,
            role,
            troops,
            world_speed,
            unit_speed,
        } => {
            let config = load_checked(&cli.catalog)?;
            match troops {
                Some(list) => {
                    let troops = loader::parse_troops(list)?;
                    let group = report::group_travel(
                        &config,
                        &troops,
                        *distance,
                        *role,
                        *world_speed,
                        *unit_speed,
                    );
                    if cli.json {
                        print_json(&group);
                    } else {
                        println!("{} over {distance} fields: {}", group.role, group.formatted);
                    }
                }
                None => {
                    let table =
                        report::travel_table(&config, *distance, *world_speed, *unit_speed);
                    if cli.json {
                        print_json(&table);
                    } else {
                        for row in table {
                            println!("{:<10}{}", row.unit, row.formatted);
                        }
                    }
                }
            }
        }
        Commands::Haul {
            unit,
            resources,
            bonus,
        } => {
            let config = load_checked(&cli.catalog)?;
            let haul = report::haul(&config, *unit, *resources, *bonus);
            if cli.json {
                print_json(&haul);
            } else if let Some(count) = haul.count {
                println!("{count} {unit}");
            } else {
                println!("{unit} cannot carry resources");
            }
        }
        Commands::Population { troops } => {
            let config = load_checked(&cli.catalog)?;
            let troops = loader::parse_troops(troops)?;
            let population = troops.population_used(&config);
            if cli.json {
                print_json(&serde_json::json!({ "population": population }));
            } else {
                println!("{population}");
            }
        }
    }
    Ok(())
}

fn load_checked(path: &Path) -> ToolResult<troop_core::catalog::TroopConfig> {
    let config = loader::load_catalog_from_file(path)?;
    for problem in config.validate() {
        tracing::warn!("Catalog problem: {problem}");
    }
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!("Failed to encode JSON: {e}"),
    }
}
