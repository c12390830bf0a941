use anyhow::Context;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument, warn};

use crate::{db, users::repo_types::User};

/// Resolve the user behind a slash command, creating it on first contact.
///
/// Lookup is by platform user id only; the team id is recorded on creation.
/// A concurrent first command for the same pair trips the UNIQUE constraint,
/// in which case the row written by the other request is returned.
#[instrument(skip(db))]
pub async fn get_or_create(
    db: &SqlitePool,
    slack_user_id: &str,
    slack_team_id: &str,
) -> anyhow::Result<User> {
    if let Some(user) = User::find_by_slack_id(db, slack_user_id)
        .await
        .context("find user by slack id")?
    {
        debug!(user_id = user.id, "user found");
        return Ok(user);
    }

    match User::create(db, slack_user_id, slack_team_id, db::now_utc()).await {
        Ok(user) => {
            info!(user_id = user.id, "user created");
            Ok(user)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!("user created concurrently; re-reading");
            User::find_by_slack_id(db, slack_user_id)
                .await
                .context("re-read user after conflict")?
                .context("user vanished after unique violation")
        }
        Err(e) => Err(e).context("create user"),
    }
}
