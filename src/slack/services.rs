use sqlx::SqlitePool;
use tracing::{error, info, instrument};

use super::{
    command::{self, Command},
    dto::{SlackMessage, SlashCommandForm},
};
use crate::{
    drinks::{advice, amount, catalog, catalog::DrinkConfig, repo as drinks},
    users::{repo_types::User, services::get_or_create},
};

const USER_LOOKUP_FAILED: &str = "ユーザー情報の取得に失敗しました。";
const SAVE_FAILED: &str = "記録の保存に失敗しました。";
const TOTALS_FAILED: &str = "統計情報の取得に失敗しました。";
const DELETE_FAILED: &str = "記録の削除に失敗しました。";

/// Reply for an accepted slash command. Storage failures are logged and
/// turned into a short message; this never fails.
pub async fn respond(db: &SqlitePool, form: &SlashCommandForm) -> SlackMessage {
    match command::parse(&form.text) {
        Command::Usage => SlackMessage::new(command::USAGE_TEXT),
        Command::Help => SlackMessage::new(command::HELP_TEXT.as_str()),
        Command::Stats => SlackMessage::new(command::STATS_TEXT),
        Command::UnknownDrink(token) => SlackMessage::new(command::unknown_drink_text(token)),
        Command::Record { drink, amount } => record_drink(db, form, drink, amount).await,
        Command::Today => today(db, form).await,
        Command::Reset => reset(db, form).await,
    }
}

async fn resolve_user(db: &SqlitePool, form: &SlashCommandForm) -> Result<User, SlackMessage> {
    get_or_create(db, &form.user_id, &form.team_id)
        .await
        .map_err(|e| {
            error!(error = %e, slack_user_id = %form.user_id, "get_or_create failed");
            SlackMessage::new(USER_LOOKUP_FAILED)
        })
}

#[instrument(skip(db, form, drink), fields(drink_type = drink.kind.as_str()))]
async fn record_drink(
    db: &SqlitePool,
    form: &SlashCommandForm,
    drink: &'static DrinkConfig,
    raw_amount: Option<&str>,
) -> SlackMessage {
    let user = match resolve_user(db, form).await {
        Ok(u) => u,
        Err(msg) => return msg,
    };

    let amount_ml = amount::resolve_amount(raw_amount, drink);

    let record =
        match drinks::record(db, user.id, drink.kind, amount_ml, drink.alcohol_fraction).await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, user_id = user.id, "record drink failed");
                return SlackMessage::new(SAVE_FAILED);
            }
        };
    info!(
        record_id = record.id,
        user_id = record.user_id,
        drink_type = %record.drink_type,
        amount_ml = record.amount_ml,
        "drink recorded"
    );

    let totals = match drinks::today_totals(db, user.id).await {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, user_id = user.id, "today totals failed");
            return SlackMessage::new(TOTALS_FAILED);
        }
    };

    SlackMessage::new(advice::recorded_message(drink.label, amount_ml, &totals))
}

#[instrument(skip(db, form))]
async fn today(db: &SqlitePool, form: &SlashCommandForm) -> SlackMessage {
    let user = match resolve_user(db, form).await {
        Ok(u) => u,
        Err(msg) => return msg,
    };

    let listing = async {
        let records = drinks::list_today(db, user.id).await?;
        let totals = drinks::today_totals(db, user.id).await?;
        anyhow::Ok((records, totals))
    };
    let (records, totals) = match listing.await {
        Ok(pair) => pair,
        Err(e) => {
            error!(error = %e, user_id = user.id, "today listing failed");
            return SlackMessage::new(TOTALS_FAILED);
        }
    };

    if records.is_empty() {
        return SlackMessage::new("📝 今日の記録はまだありません");
    }

    let mut lines = vec!["📝 今日の記録:".to_string()];
    lines.extend(records.iter().map(|r| {
        format!(
            "• {:02}:{:02} {} {}ml ({:.1}g)",
            r.recorded_at.hour(),
            r.recorded_at.minute(),
            catalog::label_for(&r.drink_type),
            r.amount_ml,
            r.alcohol_g()
        )
    }));
    lines.push(advice::totals_line(&totals));
    lines.push(advice::Advisory::for_alcohol_g(totals.alcohol_g).line().to_string());
    SlackMessage::new(lines.join("\n"))
}

#[instrument(skip(db, form))]
async fn reset(db: &SqlitePool, form: &SlashCommandForm) -> SlackMessage {
    let user = match resolve_user(db, form).await {
        Ok(u) => u,
        Err(msg) => return msg,
    };

    match drinks::delete_today(db, user.id).await {
        Ok(n) => {
            info!(user_id = user.id, deleted = n, "today's records deleted");
            SlackMessage::new(format!("🗑️ 今日の記録を{n}件削除しました"))
        }
        Err(e) => {
            error!(error = %e, user_id = user.id, "delete today failed");
            SlackMessage::new(DELETE_FAILED)
        }
    }
}
