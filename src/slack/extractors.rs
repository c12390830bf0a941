use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    http::HeaderMap,
    Form,
};
use tracing::{debug, warn};

use super::{dto::SlashCommandForm, signature};
use crate::{error::AppError, state::AppState};

/// Slash commands are small; anything larger is not from the platform.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Verified and decoded slash command.
///
/// Reads the raw body, checks the request signature over it, decodes the
/// form and requires the configured trigger.
pub struct SlackCommand(pub SlashCommandForm);

#[async_trait]
impl FromRequest<AppState> for SlackCommand {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| {
                warn!(error = %e, "cannot read request body");
                AppError::UnreadableBody
            })?;

        let verified = signature::verify_now(
            state.config.slack.signing_secret.as_bytes(),
            header_str(&parts.headers, signature::HEADER_TIMESTAMP),
            header_str(&parts.headers, signature::HEADER_SIGNATURE),
            &bytes,
        );
        if !verified {
            warn!("slack signature rejected");
            return Err(AppError::InvalidSignature);
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Form(form) = Form::<SlashCommandForm>::from_request(req, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "cannot parse slash command");
                AppError::MalformedCommand
            })?;

        if form.command != state.config.slack.command {
            warn!(command = %form.command, "unexpected slash command");
            return Err(AppError::UnknownCommand);
        }

        debug!(user = %form.user_id, team = %form.team_id, "slash command accepted");
        Ok(SlackCommand(form))
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
