use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use time::{Duration, OffsetDateTime};

pub async fn connect(path: &str) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let db = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .with_context(|| format!("open database at {path}"))?;
    migrate(&db).await?;
    Ok(db)
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::new().filename(":memory:");
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .context("open in-memory database")?;
    migrate(&db).await?;
    Ok(db)
}

async fn migrate(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")?;
    tracing::info!("database migrations applied");
    Ok(())
}

/// Current UTC instant without sub-second precision.
///
/// Stored timestamps are compared as text, so every row must be written with
/// the same fixed-width RFC 3339 rendering.
pub fn now_utc() -> OffsetDateTime {
    truncate_to_second(OffsetDateTime::now_utc())
}

pub fn truncate_to_second(at: OffsetDateTime) -> OffsetDateTime {
    at - Duration::nanoseconds(at.nanosecond() as i64)
}

/// `[00:00:00Z, +24h)` of the UTC day containing `now`.
pub fn utc_day_window(now: OffsetDateTime) -> (OffsetDateTime, OffsetDateTime) {
    let start = now.to_offset(time::UtcOffset::UTC).replace_time(time::Time::MIDNIGHT);
    (start, start + Duration::days(1))
}
