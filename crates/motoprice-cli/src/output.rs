//! Output formatting module

use crate::cli::TableKind;
use motoprice_domain::model::{Catalog, FormInput};
use motoprice_domain::LookupTable;
use motoprice_infra::ArtifactInfo;
use motoprice_types::{OutputFormat, PriceQuote, Result};
use serde::Serialize;

#[derive(Serialize)]
struct QuoteOutput<'a> {
    input: &'a FormInput,
    quote: &'a PriceQuote,
    warnings: &'a [String],
}

pub fn output_quote(
    output_format: OutputFormat,
    quote: &PriceQuote,
    input: &FormInput,
    warnings: &[String],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&QuoteOutput {
            input,
            quote,
            warnings,
        })?;
        println!("{}", content);
        return Ok(());
    }

    for warning in warnings {
        println!("Peringatan: {}", warning);
    }

    println!("\nDetail Kendaraan");
    println!("================");
    println!("Kisaran CC:      {}", input.engine_size);
    println!("Jarak tempuh:    {:.1} km", input.mileage_km);
    println!("Tahun:           {}", input.registration_year);
    println!("Model:           {}", input.make_model);
    println!("Bahan bakar:     {}", input.fuel);
    println!("Transmisi:       {}", input.gear);

    println!("\nKisaran Prediksi Harga Pasar:");
    println!("{}", quote.range_text);
    println!("\n{}", quote.note);

    Ok(())
}

#[derive(Serialize)]
struct ChoiceOutput<'a> {
    table: &'a str,
    label: &'a str,
    code: i64,
}

fn selected_tables(catalog: &Catalog, table: Option<TableKind>) -> Vec<&LookupTable> {
    let all = [
        (TableKind::Cc, &catalog.engine_sizes),
        (TableKind::Model, &catalog.models),
        (TableKind::Fuel, &catalog.fuels),
        (TableKind::Gear, &catalog.gears),
    ];
    all.into_iter()
        .filter(|(kind, _)| table.map_or(true, |t| t == *kind))
        .map(|(_, t)| t)
        .collect()
}

pub fn output_choices(
    output_format: OutputFormat,
    catalog: &Catalog,
    table: Option<TableKind>,
    warnings: &[String],
) -> Result<()> {
    let tables = selected_tables(catalog, table);

    if output_format == OutputFormat::Json {
        let rows: Vec<ChoiceOutput> = tables
            .iter()
            .flat_map(|t| {
                t.entries().iter().map(move |(label, code)| ChoiceOutput {
                    table: t.name(),
                    label: label.as_str(),
                    code: *code,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for warning in warnings {
        println!("Peringatan: {}", warning);
    }

    for t in tables {
        println!("\n{} ({})", t.name(), t.len());
        println!("{}", "-".repeat(40));
        for (label, code) in t.entries() {
            println!("  {:<36} {:>5}", label, code);
        }
    }

    Ok(())
}

pub fn output_model_info(output_format: OutputFormat, info: &ArtifactInfo) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(info)?);
        return Ok(());
    }

    println!("\nModel Artifact");
    println!("==============");
    println!("Path:       {}", info.path.display());
    println!("SHA-256:    {}", info.sha256);
    println!("Estimator:  {}", info.kind);
    if info.tree_count > 0 {
        println!("Trees:      {}", info.tree_count);
    }
    println!("Features:   {}", info.feature_names.join(", "));

    Ok(())
}
