//! API configuration

use core_kernel::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for local development
    Pretty,
    /// One JSON object per event for log shippers
    Json,
}

/// API configuration
///
/// Every field can be overridden with an `API_`-prefixed environment
/// variable, e.g. `API_PORT=9090` or `API_LOG_FORMAT=json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Indicative third-party premium returned when pricing fails
    pub third_party_placeholder: Decimal,
    /// Indicative comprehensive premium returned when pricing fails
    pub comprehensive_placeholder: Decimal,
    /// Indicative TPFT premium returned when pricing fails
    pub tpft_placeholder: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            third_party_placeholder: dec!(25000),
            comprehensive_placeholder: dec!(50000),
            tpft_placeholder: dec!(25000),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, CoreError> {
        let config: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects placeholder premiums that could not be shown to a customer
    pub fn validate(&self) -> Result<(), CoreError> {
        let placeholders = [
            ("third_party_placeholder", self.third_party_placeholder),
            ("comprehensive_placeholder", self.comprehensive_placeholder),
            ("tpft_placeholder", self.tpft_placeholder),
        ];
        for (name, amount) in placeholders {
            if amount <= Decimal::ZERO {
                return Err(CoreError::validation(format!("{name} must be positive, got {amount}")));
            }
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
