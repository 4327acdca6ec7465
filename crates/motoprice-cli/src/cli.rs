//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use motoprice_domain::constants::{DEFAULT_MILEAGE_KM, DEFAULT_REGISTRATION_YEAR};
use motoprice_types::OutputFormat;
use std::path::PathBuf;

/// Pick-list table selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    /// Engine-size brackets
    Cc,
    /// Vehicle models from the mapping file
    Model,
    Fuel,
    Gear,
}

#[derive(Parser)]
#[command(name = "motoprice")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Used motorcycle price estimation from a pre-trained model")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Model mapping CSV (nama_model,kode_model). Uses config value if not specified.
    #[arg(long, global = true, env = "MOTOPRICE_MAPPING")]
    pub mapping: Option<PathBuf>,

    /// Model artifact (JSON). Uses config value if not specified.
    #[arg(long, global = true, env = "MOTOPRICE_MODEL")]
    pub model: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the market price range of a motorcycle
    Predict {
        /// Engine-size bracket (e.g., "100 - 150 CC")
        #[arg(long)]
        cc: String,

        /// Mileage in km
        #[arg(long, default_value_t = DEFAULT_MILEAGE_KM)]
        mileage: f64,

        /// Registration year (1990 to current year)
        #[arg(long, default_value_t = DEFAULT_REGISTRATION_YEAR)]
        year: i32,

        /// Vehicle model as listed in the mapping file (e.g., "Honda Vario 125")
        #[arg(long)]
        make_model: String,

        /// Fuel type (e.g., "Gasoline (Bensin)")
        #[arg(long, default_value = "Gasoline (Bensin)")]
        fuel: String,

        /// Transmission (Manual, Otomatis, Semi-Otomatis)
        #[arg(long, default_value = "Manual")]
        gear: String,
    },

    /// List the choices offered for each field
    Choices {
        /// Only list one table
        #[arg(long, short = 't')]
        table: Option<TableKind>,
    },

    /// Show the model artifact in use
    ModelInfo,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set model mapping CSV path
        #[arg(long)]
        set_mapping: Option<PathBuf>,

        /// Set model artifact path
        #[arg(long)]
        set_model: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_predict_defaults() {
        let cli = Cli::try_parse_from([
            "motoprice",
            "predict",
            "--cc",
            "100 - 150 CC",
            "--make-model",
            "Honda Beat",
        ])
        .unwrap();
        match cli.command {
            Commands::Predict {
                mileage,
                year,
                fuel,
                gear,
                ..
            } => {
                assert_eq!(mileage, 132.0);
                assert_eq!(year, 2020);
                assert_eq!(fuel, "Gasoline (Bensin)");
                assert_eq!(gear, "Manual");
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn test_choices_table_filter() {
        let cli = Cli::try_parse_from(["motoprice", "choices", "-t", "gear", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Choices {
                table: Some(TableKind::Gear)
            }
        ));
    }
}
