use crate::models::Observation;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agrismart",
    version,
    about = "Crop health assessment with rule-based agronomic scoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single observation and print the report
    Analyze(AnalyzeArgs),
    /// Prompt for an observation interactively, then score it
    Assess,
    /// List the plant catalog
    Plants {
        /// Only show plants in this category (e.g. Cereal)
        #[arg(long)]
        category: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the full profile for one plant
    Show {
        /// Plant id (e.g. tomato)
        id: String,

        #[arg(long)]
        json: bool,
    },
    /// Show current conditions and the 4-day forecast
    Weather {
        /// Use the generic fallback instead of the farm location
        #[arg(long)]
        deny_location: bool,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and print the active settings
    Check,
}

/// Observation fields for `analyze`. Unset flags fall back to the
/// `--input` file, then to config defaults.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Plant id (tomato, wheat, rice, maize, cotton, potato)
    #[arg(short, long)]
    pub plant: Option<String>,

    /// Read the observation from a JSON file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Plant height in cm
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Leaf color label (dark-green, green, light-green, yellow-green, yellow, brown)
    #[arg(long)]
    pub leaf: Option<String>,

    /// Air temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    pub temp: Option<f64>,

    /// Relative humidity in %
    #[arg(long, allow_negative_numbers = true)]
    pub humidity: Option<f64>,

    /// Soil moisture in %
    #[arg(long, allow_negative_numbers = true)]
    pub moisture: Option<f64>,

    /// Nitrogen in ppm
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub nitrogen: Option<f64>,

    /// Phosphorus in ppm
    #[arg(long, allow_negative_numbers = true)]
    pub phosphorus: Option<f64>,

    /// Potassium in ppm
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub potassium: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    /// Overlay any flags that were given onto `base`
    pub fn apply(&self, mut base: Observation) -> Observation {
        if let Some(ref plant) = self.plant {
            base.plant_id = plant.clone();
        }
        if let Some(height) = self.height {
            base.height_cm = height;
        }
        if let Some(ref leaf) = self.leaf {
            base.leaf_color = leaf.clone();
        }
        if let Some(temp) = self.temp {
            base.temperature_c = temp;
        }
        if let Some(humidity) = self.humidity {
            base.humidity_pct = humidity;
        }
        if let Some(moisture) = self.moisture {
            base.soil_moisture_pct = moisture;
        }
        if let Some(n) = self.nitrogen {
            base.nitrogen_ppm = n;
        }
        if let Some(p) = self.phosphorus {
            base.phosphorus_ppm = p;
        }
        if let Some(k) = self.potassium {
            base.potassium_ppm = k;
        }
        base
    }
}
