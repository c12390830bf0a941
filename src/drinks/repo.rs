use anyhow::Context;
use sqlx::SqlitePool;
use time::{OffsetDateTime, UtcOffset};

use crate::{
    db,
    drinks::{
        catalog::DrinkKind,
        repo_types::{DailyTotals, DrinkRecord},
    },
};

/// Insert a record stamped with the current UTC instant.
pub async fn record(
    db: &SqlitePool,
    user_id: i64,
    kind: DrinkKind,
    amount_ml: i64,
    alcohol_fraction: f64,
) -> anyhow::Result<DrinkRecord> {
    insert_at(db, user_id, kind, amount_ml, alcohol_fraction, db::now_utc()).await
}

/// Insert a record with `recorded_at` and `created_at` both set to `at`,
/// normalized to UTC.
pub async fn insert_at(
    db: &SqlitePool,
    user_id: i64,
    kind: DrinkKind,
    amount_ml: i64,
    alcohol_fraction: f64,
    at: OffsetDateTime,
) -> anyhow::Result<DrinkRecord> {
    let at = db::truncate_to_second(at.to_offset(UtcOffset::UTC));
    let record = sqlx::query_as::<_, DrinkRecord>(
        r#"
        INSERT INTO drink_records
            (user_id, drink_type, amount_ml, alcohol_percentage, recorded_at, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, drink_type, amount_ml, alcohol_percentage, recorded_at, created_at
        "#,
    )
    .bind(user_id)
    .bind(kind.as_str())
    .bind(amount_ml)
    .bind(alcohol_fraction)
    .bind(at)
    .bind(at)
    .fetch_one(db)
    .await
    .context("insert drink record")?;
    Ok(record)
}

pub async fn today_totals(db: &SqlitePool, user_id: i64) -> anyhow::Result<DailyTotals> {
    totals_for_day(db, user_id, db::now_utc()).await
}

/// Pure alcohol grams and volume over the UTC day containing `now`.
pub async fn totals_for_day(
    db: &SqlitePool,
    user_id: i64,
    now: OffsetDateTime,
) -> anyhow::Result<DailyTotals> {
    let (start, end) = db::utc_day_window(now);
    let totals = sqlx::query_as::<_, DailyTotals>(
        r#"
        SELECT TOTAL(amount_ml * alcohol_percentage * 0.8) AS alcohol_g,
               CAST(TOTAL(amount_ml) AS INTEGER) AS total_ml
        FROM drink_records
        WHERE user_id = ? AND recorded_at >= ? AND recorded_at < ?
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_one(db)
    .await
    .context("aggregate daily totals")?;
    Ok(totals)
}

pub async fn list_today(db: &SqlitePool, user_id: i64) -> anyhow::Result<Vec<DrinkRecord>> {
    list_for_day(db, user_id, db::now_utc()).await
}

/// Newest first.
pub async fn list_for_day(
    db: &SqlitePool,
    user_id: i64,
    now: OffsetDateTime,
) -> anyhow::Result<Vec<DrinkRecord>> {
    let (start, end) = db::utc_day_window(now);
    let rows = sqlx::query_as::<_, DrinkRecord>(
        r#"
        SELECT id, user_id, drink_type, amount_ml, alcohol_percentage, recorded_at, created_at
        FROM drink_records
        WHERE user_id = ? AND recorded_at >= ? AND recorded_at < ?
        ORDER BY recorded_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
    .context("list daily records")?;
    Ok(rows)
}

pub async fn delete_today(db: &SqlitePool, user_id: i64) -> anyhow::Result<u64> {
    delete_for_day(db, user_id, db::now_utc()).await
}

/// Returns the number of rows removed.
pub async fn delete_for_day(
    db: &SqlitePool,
    user_id: i64,
    now: OffsetDateTime,
) -> anyhow::Result<u64> {
    let (start, end) = db::utc_day_window(now);
    let result = sqlx::query(
        r#"
        DELETE FROM drink_records
        WHERE user_id = ? AND recorded_at >= ? AND recorded_at < ?
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .execute(db)
    .await
    .context("delete daily records")?;
    Ok(result.rows_affected())
}
