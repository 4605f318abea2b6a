// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

/// Default username recorded for submissions that do not carry one.
pub const GUEST_USERNAME: &str = "Гость";

/// Default number of users returned by the leaderboard.
pub const LEADERBOARD_LIMIT: i64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub guest_username: String,
    pub leaderboard_limit: i64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .expect("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        let guest_username = env::var("GUEST_USERNAME")
            .unwrap_or_else(|_| GUEST_USERNAME.to_string());

        let leaderboard_limit = env::var("LEADERBOARD_LIMIT")
            .ok()
            .map(|v| v.parse().expect("LEADERBOARD_LIMIT must be an integer"))
            .unwrap_or(LEADERBOARD_LIMIT);

        Self {
            database_url,
            bind_addr,
            rust_log,
            log_dir,
            guest_username,
            leaderboard_limit,
        }
    }
}
