use anyhow::{anyhow, Error};
use dotenv::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allow_localhost_cors: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TelemetryConfig {
    pub receiver_url: Option<String>,
    pub api_key: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, Error> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL environment variable not found"))?;

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow!("failed to parse server port"))?;
        let allow_localhost_cors = env::var("ALLOW_LOCALHOST_CORS")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .map_err(|_| anyhow!("failed to parse ALLOW_LOCALHOST_CORS"))?;

        Ok(Settings {
            database_url,
            server: ServerConfig {
                host,
                port,
                allow_localhost_cors,
            },
            telemetry: TelemetryConfig {
                receiver_url: env::var("TELEMETRY_RECEIVER_URL").ok(),
                api_key: env::var("TELEMETRY_API_KEY").ok(),
            },
        })
    }
}
