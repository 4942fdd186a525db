//! Client configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `marketplace.{toml,json,yaml}` file, `MARKETPLACE_*` environment variables.

use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;
use std::time::Duration;

use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::lcd_url")]
    pub lcd_url: String,

    /// Marketplace contract. Required.
    #[serde(default)]
    pub contract_address: String,

    #[serde(default = "defaults::address_prefix")]
    pub address_prefix: String,

    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lcd_url: defaults::lcd_url(),
            contract_address: String::new(),
            address_prefix: defaults::address_prefix(),
            request_timeout_secs: defaults::request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load from `marketplace.*` (if present) and `MARKETPLACE_*` env vars.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("marketplace").required(false))
                .add_source(config::Environment::with_prefix("MARKETPLACE")),
        )
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.lcd_url.starts_with("http://") || self.lcd_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "lcd_url must be an http(s) URL, got '{}'",
                self.lcd_url
            )));
        }
        if self.contract_address.is_empty() {
            return Err(Error::Config("contract_address is required".into()));
        }
        let hrp = format!("{}1", self.address_prefix);
        if !self.contract_address.starts_with(&hrp) {
            return Err(Error::Config(format!(
                "contract_address '{}' does not start with '{hrp}'",
                self.contract_address
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config("request_timeout_secs must be > 0".into()));
        }
        Ok(())
    }
}

mod defaults {
    fn network() -> String {
        std::env::var("MARKETPLACE_NETWORK").unwrap_or_else(|_| "euphoria".into())
    }

    pub fn lcd_url() -> String {
        if network().contains("mainnet") {
            "https://lcd.aura.network".into()
        } else {
            "https://lcd.euphoria.aura.network".into()
        }
    }

    pub fn address_prefix() -> String {
        "aura".into()
    }

    pub fn request_timeout_secs() -> u64 {
        10
    }
}
