use lazy_static::lazy_static;

use crate::drinks::catalog::{self, DrinkConfig, DRINKS};

/// What a slash command's free text asks for.
#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    Usage,
    Help,
    Stats,
    Today,
    Reset,
    Record {
        drink: &'static DrinkConfig,
        amount: Option<&'a str>,
    },
    UnknownDrink(&'a str),
}

/// Total: every input maps to exactly one command.
pub fn parse(text: &str) -> Command<'_> {
    let mut tokens = text.split_whitespace();
    let Some(head) = tokens.next() else {
        return Command::Usage;
    };
    let amount = tokens.next();

    match head {
        "stats" => Command::Stats,
        "help" => Command::Help,
        "today" => Command::Today,
        "reset" => Command::Reset,
        token => match catalog::lookup(token) {
            Some(drink) => Command::Record { drink, amount },
            None => Command::UnknownDrink(token),
        },
    }
}

pub const USAGE_TEXT: &str =
    "使用方法: `/drink [種類] [量]`\n例: `/drink beer`, `/drink wine 150ml`";

pub const STATS_TEXT: &str = "📊 統計機能は現在開発中です";

lazy_static! {
    pub static ref HELP_TEXT: String = build_help();
}

fn build_help() -> String {
    let mut lines = vec!["🍺 飲酒管理アプリ".to_string(), String::new(), "*使用方法:*".to_string()];
    for d in DRINKS.iter() {
        lines.push(format!(
            "`/drink {}` または `/drink {}` - {}{}mlを記録",
            d.alias,
            d.kind.as_str(),
            d.label,
            d.default_ml
        ));
    }
    lines.extend(
        [
            "`/drink b 500` または `/drink b 500ml` - 量を指定して記録",
            "`/drink sk 1go` または `/drink sk 一合` - 日本酒1合(180ml)を記録",
            "`/drink today` - 今日の記録を表示",
            "`/drink reset` - 今日の記録を削除",
            "`/drink stats` - 統計表示（開発中）",
            "`/drink help` - このヘルプを表示",
        ]
        .map(String::from),
    );
    lines.join("\n")
}

pub fn unknown_drink_text(token: &str) -> String {
    format!(
        "未対応の飲み物です: {token}\n対応している種類: {}",
        catalog::alias_list()
    )
}
