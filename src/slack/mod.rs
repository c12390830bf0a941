use crate::state::AppState;
use axum::Router;

mod command;
pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
mod services;
pub mod signature;

pub fn router() -> Router<AppState> {
    handlers::slack_routes()
}
