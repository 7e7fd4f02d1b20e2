//! Server configuration read from the environment.
//!
//! Every setting has a default, so the server starts with no environment at
//! all. A variable that is set but does not parse is a startup error.

use log::info;
use std::{env, fmt::Display, str::FromStr};

pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Result<Self, String> {
        Ok(Self {
            host: try_load("ACTIVITIES_HOST", "127.0.0.1")?,
            port: try_load("ACTIVITIES_PORT", "8080")?,
            open_browser: try_load("ACTIVITIES_OPEN_BROWSER", "true")?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, String>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.trim()
        .parse()
        .map_err(|e| format!("Invalid {key} value {raw:?}: {e}"))
}
