//! # Display Formatting
//!
//! Currency and description formatting shared by the card list, the cart
//! pane, and the detail overlay. No state.

/// Placeholder shown when an item carries no description
pub const NO_DESCRIPTION: &str = "No description available.";

/// Longest prefix of a description shown on an item card, in characters
pub const CARD_DESCRIPTION_CHARS: usize = 100;

/// Format an amount as Bangladeshi taka, e.g. "৳ 1,300" or "৳ 1,50,000".
///
/// Uses en-BD digit grouping: the final group has three digits, every
/// group before it has two. Integral amounts render without decimals,
/// fractional amounts with two. Non-finite amounts are treated as zero,
/// matching the cart's coercion policy.
pub fn format_taka(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;

    // Work in whole paisa so 9.999 rounds to "10", not "9.100"
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_bd(whole);
    let sign = if negative { "-" } else { "" };

    if fraction > 0 {
        format!("৳ {sign}{grouped}.{fraction:02}")
    } else {
        format!("৳ {sign}{grouped}")
    }
}

/// Group an integer the Bangladeshi way: 1234567 -> "12,34,567"
fn group_bd(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();

    // Head is consumed right-to-left in pairs
    let head_chars: Vec<char> = head.chars().collect();
    let mut idx = head_chars.len();
    while idx > 0 {
        let start = idx.saturating_sub(2);
        groups.push(head_chars[start..idx].iter().collect());
        idx = start;
    }
    groups.reverse();
    groups.push(tail.to_string());

    groups.join(",")
}

/// Truncate a description for an item card.
///
/// Returns the first [`CARD_DESCRIPTION_CHARS`] characters followed by
/// "..." when the text is longer, the text unchanged when it fits, and
/// [`NO_DESCRIPTION`] when it is empty. Cuts on character boundaries so
/// multibyte text never splits mid-codepoint.
pub fn truncate_description(description: &str) -> String {
    if description.is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    if description.chars().count() <= CARD_DESCRIPTION_CHARS {
        return description.to_string();
    }

    let truncated: String = description.chars().take(CARD_DESCRIPTION_CHARS).collect();
    format!("{truncated}...")
}
