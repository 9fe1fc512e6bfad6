/// String utility functions

use crate::error::{MarketError, MarketResult};

/// Format a number with thousands separators
pub fn format_number_with_separators(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    if n < 0 {
        result.push('-');
    }
    let chars: Vec<char> = s.chars().collect();

    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }

    result
}

/// Parse a number written with thousands separators, e.g. `12,345`
pub fn parse_grouped_number(text: &str) -> MarketResult<i32> {
    let digits = text.trim().replace(',', "");
    digits
        .parse::<i32>()
        .map_err(|_| MarketError::InvalidNumber(text.to_string()))
}

/// Remove Minecraft color codes from text
/// Format: §x where x is a color code
pub fn remove_minecraft_colors(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == '§' {
            // Skip the next character (color code)
            chars.next();
        } else {
            result.push(ch);
        }
    }

    result
}
