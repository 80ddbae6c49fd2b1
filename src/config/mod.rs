use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "card-pricer")]
#[command(about = "Resolve card references and look up their Ungraded market prices")]
pub struct CliConfig {
    /// Card references, separated by commas or newlines. Read from stdin
    /// when omitted.
    pub message: Option<String>,

    #[arg(long, default_value = "https://tcgrepublic.com")]
    pub catalog_base_url: String,

    #[arg(long, default_value = "https://www.pricecharting.com")]
    pub pricing_base_url: String,

    /// Pause between successive lookups, in milliseconds.
    #[arg(long, default_value = "1500")]
    pub pause_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_base_url(&self) -> &str {
        &self.catalog_base_url
    }

    fn pricing_base_url(&self) -> &str {
        &self.pricing_base_url
    }

    fn pause_ms(&self) -> u64 {
        self.pause_ms
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_base_url", &self.catalog_base_url)?;
        validate_url("pricing_base_url", &self.pricing_base_url)?;
        Ok(())
    }
}
