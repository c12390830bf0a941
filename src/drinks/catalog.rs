use std::collections::HashMap;

use lazy_static::lazy_static;

/// Canonical drink vocabulary stored in `drink_records.drink_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkKind {
    Beer,
    Wine,
    Sake,
    Whiskey,
    Shochu,
    Highball,
}

impl DrinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DrinkKind::Beer => "beer",
            DrinkKind::Wine => "wine",
            DrinkKind::Sake => "sake",
            DrinkKind::Whiskey => "whiskey",
            DrinkKind::Shochu => "shochu",
            DrinkKind::Highball => "highball",
        }
    }
}

/// Catalog entry: defaults used when recording a drink.
#[derive(Debug, Clone, PartialEq)]
pub struct DrinkConfig {
    pub kind: DrinkKind,
    pub alias: &'static str,
    pub default_ml: i64,
    pub alcohol_fraction: f64,
    pub label: &'static str,
}

pub static DRINKS: [DrinkConfig; 6] = [
    DrinkConfig { kind: DrinkKind::Beer, alias: "b", default_ml: 350, alcohol_fraction: 0.05, label: "ビール" },
    DrinkConfig { kind: DrinkKind::Wine, alias: "w", default_ml: 150, alcohol_fraction: 0.12, label: "ワイン" },
    DrinkConfig { kind: DrinkKind::Sake, alias: "sk", default_ml: 180, alcohol_fraction: 0.15, label: "日本酒" },
    DrinkConfig { kind: DrinkKind::Whiskey, alias: "wh", default_ml: 30, alcohol_fraction: 0.40, label: "ウイスキー" },
    DrinkConfig { kind: DrinkKind::Shochu, alias: "sh", default_ml: 60, alcohol_fraction: 0.25, label: "焼酎" },
    DrinkConfig { kind: DrinkKind::Highball, alias: "hi", default_ml: 350, alcohol_fraction: 0.09, label: "ハイボール" },
];

lazy_static! {
    static ref BY_TOKEN: HashMap<&'static str, &'static DrinkConfig> = DRINKS
        .iter()
        .flat_map(|d| [(d.kind.as_str(), d), (d.alias, d)])
        .collect();
}

/// Case-sensitive exact match on either the full name or the short alias.
pub fn lookup(token: &str) -> Option<&'static DrinkConfig> {
    BY_TOKEN.get(token).copied()
}

/// Label for a stored `drink_type`, falling back to the raw value.
pub fn label_for(drink_type: &str) -> &str {
    lookup(drink_type).map(|d| d.label).unwrap_or(drink_type)
}

/// `b/beer, w/wine, ...` in catalog order.
pub fn alias_list() -> String {
    DRINKS
        .iter()
        .map(|d| format!("{}/{}", d.alias, d.kind.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_alias_forms_resolve_to_same_entry() {
        let pairs = [
            ("b", "beer"),
            ("w", "wine"),
            ("sk", "sake"),
            ("wh", "whiskey"),
            ("sh", "shochu"),
            ("hi", "highball"),
        ];
        for (short, full) in pairs {
            let a = lookup(short).unwrap_or_else(|| panic!("{short} missing"));
            let b = lookup(full).unwrap_or_else(|| panic!("{full} missing"));
            assert_eq!(a, b);
            assert_eq!(a.kind.as_str(), full);
        }
    }

    #[test]
    fn catalog_values() {
        let beer = lookup("beer").unwrap();
        assert_eq!((beer.default_ml, beer.alcohol_fraction), (350, 0.05));
        let whiskey = lookup("wh").unwrap();
        assert_eq!((whiskey.default_ml, whiskey.alcohol_fraction), (30, 0.40));
        let highball = lookup("hi").unwrap();
        assert_eq!((highball.default_ml, highball.alcohol_fraction), (350, 0.09));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("Beer").is_none());
        assert!(lookup("B").is_none());
        assert!(lookup("cola").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn twelve_tokens_six_entries() {
        assert_eq!(BY_TOKEN.len(), 12);
    }

    #[test]
    fn alias_list_names_every_drink() {
        assert_eq!(
            alias_list(),
            "b/beer, w/wine, sk/sake, wh/whiskey, sh/shochu, hi/highball"
        );
    }

    #[test]
    fn label_falls_back_to_raw_type() {
        assert_eq!(label_for("sake"), "日本酒");
        assert_eq!(label_for("mead"), "mead");
    }
}
