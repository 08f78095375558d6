//! Command-line flow shared by the binary: resolve config, then either
//! tender an amount or decode a symbol string, and render the output.

use crate::config::{toml_config::TomlConfig, CliConfig};
use crate::core::tender::{parse_symbols, tender_str};
use crate::utils::validation::Validate;
use anyhow::Context;
use serde_json::json;

pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?,
        ),
        None => None,
    };
    let format = config.output_format(file_config.as_ref());

    if let Some(symbols) = &config.decode {
        let amount = parse_symbols(symbols)?;
        tracing::info!("decoded {} -> {}", symbols.trim(), amount);
        return Ok(match format.as_str() {
            "json" => json!({ "symbols": symbols.trim(), "amount": amount }).to_string(),
            _ => amount.to_string(),
        });
    }

    let input = config.amount_input(file_config.as_ref());
    let breakdown = tender_str(&input)?;
    let symbols = breakdown.symbols();
    tracing::info!("tendered {} -> {}", breakdown.amount, symbols);

    match format.as_str() {
        "json" => Ok(serde_json::to_string_pretty(&json!({
            "amount": breakdown.amount,
            "symbols": symbols,
            "lines": breakdown.lines,
        }))?),
        _ => Ok(symbols),
    }
}
