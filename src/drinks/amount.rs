use crate::drinks::catalog::{DrinkConfig, DrinkKind};

/// One gō, the traditional sake serving.
pub const ONE_GO_ML: i64 = 180;

const ONE_GO_TOKENS: [&str; 2] = ["1go", "一合"];

/// Volume in ml for an optional amount token.
///
/// Never fails: anything that does not parse as an integer records the
/// drink's default volume. Parsed values are taken as-is, including zero and
/// negatives.
pub fn resolve_amount(raw: Option<&str>, drink: &DrinkConfig) -> i64 {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return drink.default_ml,
    };
    if drink.kind == DrinkKind::Sake && ONE_GO_TOKENS.contains(&raw) {
        return ONE_GO_ML;
    }
    parse_ml(raw).unwrap_or(drink.default_ml)
}

/// `"350ml"`, `"  500  "`, `"500ML"` → ml. `None` when no integer remains.
pub fn parse_ml(raw: &str) -> Option<i64> {
    let lowered = raw.trim().to_lowercase();
    let number = lowered.strip_suffix("ml").unwrap_or(lowered.as_str()).trim();
    number.parse::<i64>().ok()
}
