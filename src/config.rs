use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_COIN_LEDGER_ID: &str = "ryjl3-tyaaa-aaaaa-aaaba-cai";
pub const DEFAULT_TOKEN_LEDGER_ID: &str = "xevnm-gaaaa-aaaar-qafnq-cai";
pub const DEFAULT_POOL_ID: &str = "mohjv-bqaaa-aaaag-qjyia-cai";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    pub gateway_url: String,
    pub self_address: String,
    pub coin_ledger_id: String,
    pub token_ledger_id: String,
    pub pool_id: String,
    /// Funding threshold in the token's smallest denomination.
    pub threshold: u64,
    pub lookback_days: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = required(&env_map, "DATABASE_PATH")?;
        let gateway_url = required(&env_map, "GATEWAY_URL")?
            .trim_end_matches('/')
            .to_string();
        let self_address = required(&env_map, "SELF_ADDRESS")?;

        let coin_ledger_id = optional(&env_map, "COIN_LEDGER_ID", DEFAULT_COIN_LEDGER_ID);
        let token_ledger_id = optional(&env_map, "TOKEN_LEDGER_ID", DEFAULT_TOKEN_LEDGER_ID);
        let pool_id = optional(&env_map, "POOL_ID", DEFAULT_POOL_ID);

        let threshold = parse_u64(&env_map, "THRESHOLD", 100)?;

        let lookback_days = parse_u64(&env_map, "LOOKBACK_DAYS", 10)?;
        if lookback_days == 0 {
            return Err(ConfigError::InvalidValue(
                "LOOKBACK_DAYS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            port,
            database_path,
            gateway_url,
            self_address,
            coin_ledger_id,
            token_ledger_id,
            pool_id,
            threshold,
            lookback_days,
        })
    }
}

fn required(env_map: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
    env_map
        .get(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingEnv(name.to_string()))
}

fn optional(env_map: &HashMap<String, String>, name: &str, default: &str) -> String {
    env_map
        .get(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_u64(
    env_map: &HashMap<String, String>,
    name: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    match env_map.get(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            ConfigError::InvalidValue(name.to_string(), "must be a valid u64".to_string())
        }),
    }
}
