//! Server configuration read from the environment.

use std::net::SocketAddr;

use numdraw_draw::domain::policy::DrawPolicy;
use numdraw_draw::domain::sampler::{DEFAULT_ATTEMPT_FACTOR, SamplerConfig};

use crate::error::AppError;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Port to bind (`PORT`, default `3000`).
    pub port: u16,
    /// Sampler attempt multiplier (`DRAW_ATTEMPT_FACTOR`, default 10).
    pub attempt_factor: u64,
    /// Require session ids to belong to the caller (`ENFORCE_OWNERSHIP`).
    pub enforce_ownership: bool,
    /// Fixed RNG seed for reproducible runs (`RNG_SEED`).
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };

        let attempt_factor = match lookup("DRAW_ATTEMPT_FACTOR") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|factor| *factor >= 1)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "DRAW_ATTEMPT_FACTOR must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_ATTEMPT_FACTOR,
        };

        let enforce_ownership = match lookup("ENFORCE_OWNERSHIP") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("ENFORCE_OWNERSHIP must be a boolean, got {raw:?}"))
            })?,
            None => true,
        };

        let rng_seed = lookup("RNG_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("RNG_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            attempt_factor,
            enforce_ownership,
            rng_seed,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// The draw policy this configuration describes.
    #[must_use]
    pub fn policy(&self) -> DrawPolicy {
        DrawPolicy {
            enforce_ownership: self.enforce_ownership,
            sampler: SamplerConfig {
                attempt_factor: self.attempt_factor,
            },
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
