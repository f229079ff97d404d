#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for the outbreak risk engine.
//!
//! ```text
//! outbreak_risk predict --district Pune --rainfall-dev 25 --temperature 30 \
//!     --case-growth 18 --baseline 45 [--json]
//! outbreak_risk districts
//! outbreak_risk serve
//! ```
//!
//! Running `outbreak_risk` with no subcommand enters interactive mode.

use clap::{Parser, Subcommand};
use outbreak_risk_cli::{format_districts, format_report};
use outbreak_risk_models::PredictionInput;
use outbreak_risk_server::ServerConfig;

#[derive(Parser)]
#[command(
    name = "outbreak_risk",
    about = "Score district outbreak risk from climate and case data"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict outbreak risk for a district
    Predict {
        /// District name (unknown names use the default profile)
        #[arg(long)]
        district: String,
        /// Rainfall deviation from normal, in millimeters
        #[arg(long, allow_negative_numbers = true)]
        rainfall_dev: f64,
        /// Mean temperature in degrees Celsius
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// Week-over-week case growth, in percent
        #[arg(long, allow_negative_numbers = true)]
        case_growth: f64,
        /// Current baseline case count
        #[arg(long, allow_negative_numbers = true)]
        baseline: f64,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List known districts
    Districts,
    /// Start the HTTP API server
    Serve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return outbreak_risk_cli::interactive::run();
    };

    match command {
        Commands::Predict {
            district,
            rainfall_dev,
            temperature,
            case_growth,
            baseline,
            json,
        } => {
            let input = PredictionInput {
                district,
                rainfall_dev,
                temperature,
                case_growth,
                baseline,
            };
            input.validate()?;

            if !outbreak_risk_district::is_known(&input.district) {
                log::warn!(
                    "Unknown district '{}', scoring with the {} profile",
                    input.district,
                    outbreak_risk_district::DEFAULT_DISTRICT
                );
            }

            let result = outbreak_risk::predict_outbreak(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", format_report(&result));
            }
        }
        Commands::Districts => {
            print!("{}", format_districts(outbreak_risk_district::all()));
        }
        Commands::Serve => {
            actix_web::rt::System::new()
                .block_on(outbreak_risk_server::run_server(ServerConfig::from_env()))?;
        }
    }

    Ok(())
}
