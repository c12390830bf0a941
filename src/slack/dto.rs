use serde::{Deserialize, Serialize};

/// Form fields of a slash command invocation that the tracker reads.
#[derive(Debug, Clone, Deserialize)]
pub struct SlashCommandForm {
    pub command: String,
    #[serde(default)]
    pub text: String,
    pub user_id: String,
    pub team_id: String,
}

/// Reply body; the chat client renders `text` verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackMessage {
    pub text: String,
}

impl SlackMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
