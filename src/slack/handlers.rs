use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    slack::{dto::SlackMessage, extractors::SlackCommand, services},
    state::AppState,
};

pub fn slack_routes() -> Router<AppState> {
    Router::new().route("/slack/command", post(slash_command))
}

/// POST /slack/command (form-encoded, signed)
///
/// 200 with a chat message for every accepted envelope, including unknown
/// drinks and storage failures. Rejections come from [`SlackCommand`].
#[instrument(skip_all)]
pub async fn slash_command(
    State(state): State<AppState>,
    SlackCommand(cmd): SlackCommand,
) -> Json<SlackMessage> {
    Json(services::respond(&state.db, &cmd).await)
}
