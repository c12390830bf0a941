use crate::users::repo_types::{User, DEFAULT_DAILY_LIMIT_ML};
use sqlx::SqlitePool;
use time::OffsetDateTime;

impl User {
    /// Find a user by platform user id. The team id does not take part in the lookup.
    pub async fn find_by_slack_id(
        db: &SqlitePool,
        slack_user_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, slack_user_id, slack_team_id, daily_limit_ml, created_at, updated_at
            FROM users
            WHERE slack_user_id = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(slack_user_id)
        .fetch_optional(db)
        .await
    }

    /// Insert a user with the default daily limit.
    pub async fn create(
        db: &SqlitePool,
        slack_user_id: &str,
        slack_team_id: &str,
        now: OffsetDateTime,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (slack_user_id, slack_team_id, daily_limit_ml, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, slack_user_id, slack_team_id, daily_limit_ml, created_at, updated_at
            "#,
        )
        .bind(slack_user_id)
        .bind(slack_team_id)
        .bind(DEFAULT_DAILY_LIMIT_ML)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
    }
}
