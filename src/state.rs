use crate::config::AppConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = crate::db::connect(&config.database_path).await?;
        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }

    #[cfg(test)]
    pub async fn fake() -> Self {
        use crate::config::SlackConfig;

        let db = crate::db::connect_in_memory()
            .await
            .expect("in-memory database");
        let config = Arc::new(AppConfig {
            database_path: ":memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
            slack: SlackConfig {
                signing_secret: "test-signing-secret".into(),
                command: "/drink".into(),
            },
        });
        Self::from_parts(db, config)
    }
}
