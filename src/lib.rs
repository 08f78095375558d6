pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::tender::{denominate, denominate_str, parse_symbols, tender, tender_str};
pub use domain::model::{Denomination, Tender, TenderLine, DENOMINATIONS};
pub use utils::error::{Result, TenderError};
