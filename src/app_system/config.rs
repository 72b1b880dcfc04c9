use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

/// Runtime configuration, loaded from the environment with logged
/// fallbacks. A missing or unparseable variable never aborts startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Mailbox depth for each resource actor.
    pub channel_buffer: usize,
    /// Annual compound-interest rate, in percent.
    pub interest_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            interest_rate: 5.0,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            channel_buffer: load_or("REGISTRY_CHANNEL_BUFFER", defaults.channel_buffer),
            interest_rate: load_or("REGISTRY_INTEREST_RATE", defaults.interest_rate),
        }
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
                default
            }
        },
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
