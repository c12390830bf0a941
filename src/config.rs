use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    pub signing_secret: String,
    pub command: String, // trigger the envelope must carry, e.g. "/drink"
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub slack: SlackConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| "./drink_tracker.db".into());
        let slack = SlackConfig {
            signing_secret: std::env::var("SLACK_SIGNING_SECRET")
                .context("SLACK_SIGNING_SECRET must be set")?,
            command: std::env::var("SLASH_COMMAND").unwrap_or_else(|_| "/drink".into()),
        };
        let port = match std::env::var("PORT") {
            Ok(v) => v.parse::<u16>().with_context(|| format!("invalid PORT {v:?}"))?,
            Err(_) => 8080,
        };
        Ok(Self {
            database_path,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            slack,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
