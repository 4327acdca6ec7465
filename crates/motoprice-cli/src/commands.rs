//! Command handlers

use crate::cli::{Cli, Commands, TableKind};
use crate::output::{output_choices, output_model_info, output_quote};
use motoprice_app::{load_catalog, Config, PriceService};
use motoprice_domain::model::FormInput;
use motoprice_infra::ArtifactPredictor;
use motoprice_types::{OutputFormat, Result};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref mapping) = cli.mapping {
        config.mapping_path = mapping.clone();
    }
    if let Some(ref model) = cli.model {
        config.model_path = model.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    tracing::debug!(
        mapping = %config.mapping_path.display(),
        model = %config.model_path.display(),
        %output_format,
        "effective configuration"
    );

    match &cli.command {
        Commands::Predict {
            cc,
            mileage,
            year,
            make_model,
            fuel,
            gear,
        } => {
            let input = FormInput {
                engine_size: cc.clone(),
                mileage_km: *mileage,
                registration_year: *year,
                make_model: make_model.clone(),
                fuel: fuel.clone(),
                gear: gear.clone(),
            };
            cmd_predict(&config, &input, output_format)
        }

        Commands::Choices { table } => cmd_choices(&config, *table, output_format),

        Commands::ModelInfo => cmd_model_info(&config, output_format),

        Commands::Config {
            show,
            set_mapping,
            set_model,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_mapping.clone(),
            set_model.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn cmd_predict(config: &Config, input: &FormInput, output_format: OutputFormat) -> Result<()> {
    let service = PriceService::from_config(config)?;
    let quote = service.handle_submit(input)?;
    output_quote(output_format, &quote, input, service.warnings())
}

fn cmd_choices(config: &Config, table: Option<TableKind>, output_format: OutputFormat) -> Result<()> {
    let load = load_catalog(&config.mapping_path)?;
    output_choices(output_format, &load.catalog, table, &load.warnings)
}

fn cmd_model_info(config: &Config, output_format: OutputFormat) -> Result<()> {
    let predictor = ArtifactPredictor::open(&config.model_path)?;
    output_model_info(output_format, predictor.info()?)
}

fn cmd_config(
    show: bool,
    set_mapping: Option<PathBuf>,
    set_model: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(mapping) = set_mapping {
        config.mapping_path = mapping;
        modified = true;
    }

    if let Some(model) = set_model {
        config.model_path = model;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
