//! Engine configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Pricing engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Installment schedule configuration.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Pricing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Operating fee charged on the net rental basis, in percent.
    #[serde(default = "default_operating_fee_rate")]
    pub operating_fee_rate: Decimal,
    /// Code of the currency every tier and add-on price is stored in.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_operating_fee_rate() -> Decimal {
    Decimal::from(3)
}

fn default_base_currency() -> String {
    "LYD".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            operating_fee_rate: default_operating_fee_rate(),
            base_currency: default_base_currency(),
        }
    }
}

/// Installment schedule configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Days between signing and the installation payment of a two-part split.
    #[serde(default = "default_installation_offset_days")]
    pub installation_offset_days: u64,
    /// Payment type of the installment due at signing.
    #[serde(default = "default_signing_label")]
    pub signing_label: String,
    /// Payment type of the installment due at installation.
    #[serde(default = "default_installation_label")]
    pub installation_label: String,
    /// Payment type of every other installment.
    #[serde(default = "default_recurring_label")]
    pub recurring_label: String,
}

fn default_installation_offset_days() -> u64 {
    7
}

fn default_signing_label() -> String {
    "on signing".to_string()
}

fn default_installation_label() -> String {
    "on installation".to_string()
}

fn default_recurring_label() -> String {
    "installment".to_string()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            installation_offset_days: default_installation_offset_days(),
            signing_label: default_signing_label(),
            installation_label: default_installation_label(),
            recurring_label: default_recurring_label(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("RENTBOARD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
