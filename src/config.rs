//! Startup configuration read from the environment.
//!
//! - `APP_DATA_PATH`: mood log file (default `data/moodData.json`)
//! - `PORT`: listen port (default 8080)

use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_DATA_PATH: &str = "data/moodData.json";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("APP_DATA_PATH").ok(), env::var("PORT").ok())
    }

    fn from_vars(data_path: Option<String>, port: Option<String>) -> Self {
        let data_path = data_path
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let port = port
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { data_path, port }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
