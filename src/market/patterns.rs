/// Regular expressions for Trade Market tooltips and headings
///
/// Whole-line patterns are anchored with `^...$`; the slot lookups search
/// the joined lore and are not.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lore line 1 of a listing
pub static PRICE_STR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^§6Price:$").unwrap());

/// Lore line 2 of a listing, e.g. `§6 - §f64 §7x §f§m1,500§7§m²§b ✮ 1,350§3² (x)`
///
/// `amount` is present for bulk listings, `silverbull_price` for discounted ones.
pub static PRICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^§[67] - (?:§f(?P<amount>[\d,]+) §7x )?§(?:(?:(?:c✖|a✔) §f)|f§m|f)(?P<price>[\d,]+)§7(?:§m)?²(?:§b ✮ (?P<silverbull_price>[\d,]+)§3²)?(?: .+)?$",
    )
    .unwrap()
});

pub static TM_SELL_PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"- §7Per Unit:§f (\d{1,3}(?:,\d{3})*)").unwrap());

pub static TM_PRICE_CHECK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"§7Cheapest Sell Offer: §f(\d{1,3}(?:,\d{3})*)").unwrap());

/// Headings that wrap an item name, tried in order
pub static ITEM_NAME_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // Create buy order / create sell offer menu
        Regex::new(r"^§6(?:Buying|Selling) [^ ]+ (.+?)(?:§6)? for .+ Each$").unwrap(),
        // Trade overview menu
        Regex::new(r"^§6(?:Buying|Selling) [^ ]+ (.+)$").unwrap(),
        // Existing sell offer view
        Regex::new(r"^§7§l[^ ]+x (.+)$").unwrap(),
    ]
});
