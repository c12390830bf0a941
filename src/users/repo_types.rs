use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Daily limit assigned to newly created users.
pub const DEFAULT_DAILY_LIMIT_ML: i64 = 40_000;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub slack_user_id: String,
    pub slack_team_id: String,
    pub daily_limit_ml: i64, // stored but not consulted by the advisory
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
