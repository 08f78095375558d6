pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Amount tendered when neither the command line nor the config file gives one.
pub const DEFAULT_AMOUNT: i64 = 116;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "coin-tender"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Break an amount into dollars (D), dimes (Y), nickels (N) and pennies (P)")
)]
pub struct CliConfig {
    /// Amount to tender; a whole, non-negative number
    #[cfg_attr(feature = "cli", arg(allow_hyphen_values = true))]
    pub amount: Option<String>,

    /// Path to a TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Output format: text or json
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub format: Option<String>,

    /// Sum a symbol string (e.g. DYNP) instead of tendering an amount
    #[cfg_attr(feature = "cli", arg(long, conflicts_with = "amount"))]
    pub decode: Option<String>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數優先，其次是設定檔，最後才用預設值
    pub fn amount_input(&self, file: Option<&toml_config::TomlConfig>) -> String {
        self.amount
            .clone()
            .or_else(|| file.and_then(|f| f.demo_amount()).map(|a| a.to_string()))
            .unwrap_or_else(|| DEFAULT_AMOUNT.to_string())
    }

    pub fn output_format(&self, file: Option<&toml_config::TomlConfig>) -> String {
        self.format
            .clone()
            .or_else(|| file.and_then(|f| f.output_format()).map(str::to_string))
            .unwrap_or_else(|| "text".to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(format) = &self.format {
            validation::validate_one_of("format", format, &OUTPUT_FORMATS)?;
        }
        Ok(())
    }
}
