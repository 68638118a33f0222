//! The fixed category set offered to users and their default icons.

/// Categories offered when adding an expense.
pub const CATEGORIES: [&str; 18] = [
    "Housing",
    "Utilities",
    "Food",
    "Transport",
    "Health",
    "Insurance",
    "Debt",
    "Savings",
    "Investing",
    "Entertainment",
    "Personal Care",
    "Education",
    "Family",
    "Pets",
    "Gifts",
    "Software",
    "Tech",
    "Miscellaneous",
];

/// Icon used when neither the draft nor the category provides one.
pub const FALLBACK_ICON: &str = "💸";

/// Default icon for a known category.
pub fn icon_for(category: &str) -> Option<&'static str> {
    let icon = match category {
        "Housing" => "🏠",
        "Utilities" => "💡",
        "Software" => "🔄",
        "Food" => "🍔",
        "Transport" => "🚗",
        "Health" => "❤️",
        "Debt" => "💳",
        "Savings" => "💰",
        "Investing" => "📈",
        "Entertainment" => "🎬",
        "Personal Care" => "💅",
        "Education" => "📚",
        "Tech" => "💻",
        "Family" => "👶",
        "Pets" => "🐾",
        "Gifts" => "🎁",
        "Insurance" => "🛡️",
        "Miscellaneous" => "📦",
        _ => return None,
    };
    Some(icon)
}

/// Icon to store for a new expense: explicit choice, then category default,
/// then the fallback.
pub fn resolve_icon(explicit: Option<&str>, category: &str) -> String {
    explicit
        .map(str::trim)
        .filter(|icon| !icon.is_empty())
        .or_else(|| icon_for(category))
        .unwrap_or(FALLBACK_ICON)
        .to_string()
}

pub fn is_known(category: &str) -> bool {
    CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_an_icon() {
        for category in CATEGORIES {
            assert!(icon_for(category).is_some(), "{category} has no icon");
        }
    }

    #[test]
    fn resolve_icon_prefers_explicit_then_category() {
        assert_eq!(resolve_icon(Some("☕"), "Food"), "☕");
        assert_eq!(resolve_icon(Some("  "), "Food"), "🍔");
        assert_eq!(resolve_icon(None, "Yachts"), FALLBACK_ICON);
    }
}
