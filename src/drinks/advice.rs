use crate::drinks::repo_types::DailyTotals;

/// Daily pure-alcohol grams still considered moderate.
///
/// Fixed for everyone; `users.daily_limit_ml` is not consulted here.
pub const MODERATE_ALCOHOL_G: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    Moderate,
    Excessive,
}

impl Advisory {
    pub fn for_alcohol_g(alcohol_g: f64) -> Self {
        if alcohol_g <= MODERATE_ALCOHOL_G {
            Advisory::Moderate
        } else {
            Advisory::Excessive
        }
    }

    pub fn line(self) -> &'static str {
        match self {
            Advisory::Moderate => "😊 適量内です",
            Advisory::Excessive => "🚨 適量を超えています。お気をつけください。",
        }
    }
}

pub fn totals_line(totals: &DailyTotals) -> String {
    format!(
        "📊 今日の飲酒量: {}ml (純アルコール{:.1}g)",
        totals.total_ml, totals.alcohol_g
    )
}

/// Confirmation for a freshly recorded drink.
pub fn recorded_message(label: &str, amount_ml: i64, totals: &DailyTotals) -> String {
    format!(
        "✅ {label}{amount_ml}mlを記録しました\n{}\n{}",
        totals_line(totals),
        Advisory::for_alcohol_g(totals.alcohol_g).line()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Advisory::for_alcohol_g(0.0), Advisory::Moderate);
        assert_eq!(Advisory::for_alcohol_g(20.0), Advisory::Moderate);
        assert_eq!(Advisory::for_alcohol_g(20.01), Advisory::Excessive);
    }

    #[test]
    fn single_beer_is_moderate() {
        let totals = DailyTotals { alcohol_g: 14.0, total_ml: 350 };
        let msg = recorded_message("ビール", 350, &totals);
        assert_eq!(
            msg,
            "✅ ビール350mlを記録しました\n📊 今日の飲酒量: 350ml (純アルコール14.0g)\n😊 適量内です"
        );
    }

    #[test]
    fn mixed_evening_exceeds() {
        let totals = DailyTotals { alcohol_g: 50.0, total_ml: 680 };
        let msg = recorded_message("日本酒", 180, &totals);
        assert!(msg.contains("680ml"));
        assert!(msg.contains("純アルコール50.0g"));
        assert!(msg.ends_with("🚨 適量を超えています。お気をつけください。"));
    }
}
