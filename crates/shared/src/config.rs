//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Token economics configuration.
    pub tokenomics: TokenomicsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

/// JWT configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing session tokens.
    pub secret: String,
    /// Session token expiration in seconds.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: i64,
}

fn default_token_expiry() -> i64 {
    86400 // 24 hours
}

/// Token economics: the fee retained on sales and the token/fiat exchange value.
///
/// Both values are decimals, never floats. Range validation happens when the
/// conversion policy is constructed at startup; a value outside its range is
/// fatal there, not per request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenomicsConfig {
    /// Fraction of a sale's fiat amount retained as platform fee.
    pub fee_ratio: Decimal,
    /// Fiat value of a single token.
    pub token_value: Decimal,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails to
    /// deserialize (missing or non-numeric values are fatal here).
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TOKENFLOW").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 5000);
        assert_eq!(default_max_connections(), 10);
        assert_eq!(default_token_expiry(), 86400);
    }

    #[test]
    fn test_tokenomics_deserializes_from_strings() {
        let toml = r#"
            fee_ratio = "0.05"
            token_value = "1.0"
        "#;
        let cfg: TokenomicsConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.fee_ratio, dec!(0.05));
        assert_eq!(cfg.token_value, dec!(1.0));
    }

    #[test]
    fn test_tokenomics_rejects_non_numeric() {
        let toml = r#"
            fee_ratio = "five percent"
            token_value = "1.0"
        "#;
        let result: Result<TokenomicsConfig, _> = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize();

        assert!(result.is_err());
    }
}
