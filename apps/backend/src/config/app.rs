//! Centralized application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use crate::error::AppError;
use crate::services::turn_flow::DEFAULT_SEARCH_DEPTH;

pub const DEFAULT_NEYNAR_API_KEY: &str = "NEYNAR_API_DOCS";
pub const DEFAULT_NEYNAR_VALIDATE_URL: &str = "https://api.neynar.com/v2/farcaster/frame/validate";
pub const DEFAULT_SYNDICATE_MINT_URL: &str = "https://frame.syndicate.io/api/mint";

/// Search deeper than this and a request stalls for seconds.
const MAX_SEARCH_DEPTH: u8 = 5;

/// Centralized application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,
    /// Public origin frames link back to.
    pub base_url: String,

    // Session store; `None` runs on the in-memory store
    pub redis_url: Option<String>,
    pub store_timeout: Duration,

    // Frame validation
    pub neynar_api_key: String,
    pub neynar_validate_url: String,
    pub verify_timeout: Duration,

    // Rewards; `None` disables minting
    pub syndicate_api_key: Option<String>,
    pub syndicate_mint_url: String,
    pub reward_timeout: Duration,

    pub search_depth: u8,
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&var, "BACKEND_PORT", 3001u16)?;

        let base_url = var("BASE_URL")
            .ok_or_else(|| AppError::config("BASE_URL must be set"))?
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "BASE_URL must be an absolute http(s) URL, got '{base_url}'"
            )));
        }

        let search_depth = parse_or(&var, "AI_SEARCH_DEPTH", DEFAULT_SEARCH_DEPTH)?;
        if !(1..=MAX_SEARCH_DEPTH).contains(&search_depth) {
            return Err(AppError::config(format!(
                "AI_SEARCH_DEPTH must be between 1 and {MAX_SEARCH_DEPTH}, got {search_depth}"
            )));
        }

        Ok(Config {
            host,
            port,
            base_url,
            redis_url: var("REDIS_URL"),
            store_timeout: millis_or(&var, "STORE_TIMEOUT_MS", 2_000)?,
            neynar_api_key: var("NEYNAR_API_KEY")
                .unwrap_or_else(|| DEFAULT_NEYNAR_API_KEY.to_string()),
            neynar_validate_url: var("NEYNAR_VALIDATE_URL")
                .unwrap_or_else(|| DEFAULT_NEYNAR_VALIDATE_URL.to_string()),
            verify_timeout: millis_or(&var, "VERIFY_TIMEOUT_MS", 3_000)?,
            syndicate_api_key: var("SYNDICATE_FRAME_API_KEY"),
            syndicate_mint_url: var("SYNDICATE_MINT_URL")
                .unwrap_or_else(|| DEFAULT_SYNDICATE_MINT_URL.to_string()),
            reward_timeout: millis_or(&var, "REWARD_TIMEOUT_MS", 10_000)?,
            search_depth,
        })
    }
}

fn parse_or<V, T>(var: &V, name: &str, default: T) -> Result<T, AppError>
where
    V: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{name} is not valid, got '{raw}'"))),
    }
}

fn millis_or<V>(var: &V, name: &str, default: u64) -> Result<Duration, AppError>
where
    V: Fn(&str) -> Option<String>,
{
    let ms = parse_or(var, name, default)?;
    if ms == 0 {
        return Err(AppError::config(format!("{name} must be greater than zero")));
    }
    Ok(Duration::from_millis(ms))
}
