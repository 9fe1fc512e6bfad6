/// Trade Market model
///
/// Reads prices out of Trade Market tooltips and keeps the player's saved
/// search filters:
/// - Listing price info (price, silverbull discount, bulk quantity)
/// - Unit price and cheapest offer on the sell screen
/// - Filter screen detection and the last typed search filter
/// - Preset filters, persisted through [`Storage`]
///
/// Every lookup is non-fatal: malformed text is logged and answered with
/// [`PriceInfo::EMPTY`] or `-1`.

use regex::Regex;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::patterns::{
    ITEM_NAME_PATTERNS, PRICE_PATTERN, PRICE_STR, TM_PRICE_CHECK_PATTERN, TM_SELL_PRICE_PATTERN,
};
use crate::error::{MarketError, MarketResult};
use crate::gui::{Container, TradeMarketSlot, FILTER_SCREEN_TITLE};
use crate::storage::Storage;
use crate::text::{get_lore, get_string_lore, StyledText};
use crate::types::{ContainerKind, ItemStack, PriceInfo};
use crate::utils::parse_grouped_number;

/// Storage key of the preset filter map
pub const PRESET_FILTERS_KEY: &str = "trade_market.preset_filters";

/// Lore index of the `Price:` marker; the value line follows it
const TRADE_MARKET_PRICE_LINE: usize = 1;

pub struct TradeMarketModel {
    preset_filters: Storage<BTreeMap<i32, String>>,
    last_search_filter: String,
}

impl TradeMarketModel {
    pub fn new() -> Self {
        Self::with_preset_filters(Storage::default())
    }

    /// Create the model around preset filters restored from disk
    pub fn with_preset_filters(preset_filters: Storage<BTreeMap<i32, String>>) -> Self {
        Self {
            preset_filters,
            last_search_filter: String::new(),
        }
    }

    /// Handle a screen being opened
    pub fn on_screen_open(&mut self, title: &StyledText) {
        if !Self::is_filter_screen(title) {
            return;
        }

        // A new filter screen starts a new search
        debug!("Filter screen opened, clearing last search filter");
        self.last_search_filter.clear();
    }

    pub fn is_filter_screen(title: &StyledText) -> bool {
        title.matches(&FILTER_SCREEN_TITLE)
    }

    pub fn last_search_filter(&self) -> &str {
        &self.last_search_filter
    }

    pub fn set_last_search_filter(&mut self, filter: impl Into<String>) {
        self.last_search_filter = filter.into();
    }

    pub fn preset_filter(&self, preset_id: i32) -> Option<String> {
        self.preset_filters.get().get(&preset_id).cloned()
    }

    pub fn set_preset_filter(&mut self, preset_id: i32, filter: impl Into<String>) {
        let filter = filter.into();
        info!("Saving preset filter {}: \"{}\"", preset_id, filter);

        self.preset_filters.get_mut().insert(preset_id, filter);
        self.preset_filters.touched();
    }

    /// Preset filters in id order
    pub fn preset_filters(&self) -> impl Iterator<Item = (i32, &str)> {
        self.preset_filters
            .get()
            .iter()
            .map(|(id, filter)| (*id, filter.as_str()))
    }

    /// The backing storage, for the persistence layer to flush
    pub fn preset_filters_storage_mut(&mut self) -> &mut Storage<BTreeMap<i32, String>> {
        &mut self.preset_filters
    }

    /// Price info of a Trade Market listing, or [`PriceInfo::EMPTY`]
    pub fn calculate_item_price_info(&self, item: &ItemStack) -> PriceInfo {
        let lore = get_lore(item);

        match parse_price_lore(&lore) {
            Ok(info) => info,
            Err(e) => {
                warn!("Trade Market item \"{}\" had {}", item.name, e);
                PriceInfo::EMPTY
            }
        }
    }

    /// Unit price of the item being sold on the sell screen, or -1
    pub fn unit_price(&self, container: &Container) -> i32 {
        Self::sell_screen_lookup(container, TradeMarketSlot::SellPrice, &TM_SELL_PRICE_PATTERN)
    }

    /// Cheapest existing sell offer for the item on the sell screen, or -1
    pub fn lowest_price(&self, container: &Container) -> i32 {
        Self::sell_screen_lookup(container, TradeMarketSlot::PriceCheck, &TM_PRICE_CHECK_PATTERN)
    }

    fn sell_screen_lookup(container: &Container, slot: TradeMarketSlot, pattern: &Regex) -> i32 {
        if container.kind != ContainerKind::TradeMarketSell {
            debug!("Not on the sell screen ({:?}), no {:?} price", container.kind, slot);
            return -1;
        }

        let Some(item) = container.item(slot.slot()) else {
            debug!("Slot {} is empty", slot.slot());
            return -1;
        };

        let lore = get_string_lore(item);
        let Some(caps) = lore.captures(pattern) else {
            debug!("No {:?} price in slot {} lore", slot, slot.slot());
            return -1;
        };

        match parse_grouped_number(&caps[1]) {
            Ok(price) => price,
            Err(e) => {
                warn!("Trade Market {:?} slot had {}", slot, e);
                -1
            }
        }
    }

    /// Bare item name from a Trade Market heading such as
    /// `§6Selling 4 §5Cindershade§6 for 1,000² Each`
    pub fn simplify_item_name(heading: &StyledText) -> Option<String> {
        ITEM_NAME_PATTERNS
            .iter()
            .find_map(|pattern| heading.captures(pattern))
            .map(|caps| caps[1].to_string())
    }
}

impl Default for TradeMarketModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the price marker and value lines of a listing's lore
pub fn parse_price_lore(lore: &[StyledText]) -> MarketResult<PriceInfo> {
    let price_line = lore
        .get(TRADE_MARKET_PRICE_LINE)
        .ok_or(MarketError::MissingLoreLine(TRADE_MARKET_PRICE_LINE))?;
    let value_line = lore
        .get(TRADE_MARKET_PRICE_LINE + 1)
        .ok_or(MarketError::MissingLoreLine(TRADE_MARKET_PRICE_LINE + 1))?;

    parse_price_lines(price_line, value_line)
}

/// Parse a `§6Price:` line and the value line below it
pub fn parse_price_lines(price_line: &StyledText, value_line: &StyledText) -> MarketResult<PriceInfo> {
    if !price_line.matches(&PRICE_STR) {
        return Err(MarketError::UnexpectedPriceLine(price_line.to_string()));
    }

    let caps = value_line
        .captures(&PRICE_PATTERN)
        .ok_or_else(|| MarketError::UnexpectedPriceValueLine(value_line.to_string()))?;

    let price = parse_grouped_number(&caps["price"])?;

    let discounted_price = match caps.name("silverbull_price") {
        Some(m) => parse_grouped_number(m.as_str())?,
        None => price,
    };

    let quantity = match caps.name("amount") {
        Some(m) => parse_grouped_number(m.as_str())?,
        None => 1,
    };

    Ok(PriceInfo::new(price, discounted_price, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price_line: &str, value_line: &str) -> ItemStack {
        ItemStack::new(
            "§5Cindershade",
            10,
            vec!["".to_string(), price_line.to_string(), value_line.to_string()],
        )
    }

    fn sell_screen(slot: usize, lore: Vec<String>) -> Container {
        let mut container = Container::new(2, "What would you like to sell?");
        let mut slots = vec![None; 54];
        slots[slot] = Some(ItemStack::new("§aPrice", slot, lore));
        container.set_slots(slots);
        container
    }

    #[test]
    fn test_price_info_plain() {
        let model = TradeMarketModel::new();
        let info = model.calculate_item_price_info(&listing("§6Price:", "§6 - §f12,345§7²"));
        assert_eq!(info, PriceInfo::new(12345, 12345, 1));
    }

    #[test]
    fn test_price_info_bulk_and_discount() {
        let model = TradeMarketModel::new();
        let info = model.calculate_item_price_info(&listing(
            "§6Price:",
            "§6 - §f1,024 §7x §f§m2,000§7§m²§b ✮ 1,800§3² §8(total)",
        ));
        assert_eq!(info, PriceInfo::new(2000, 1800, 1024));
    }

    #[test]
    fn test_price_info_missing_marker() {
        let model = TradeMarketModel::new();
        let info = model.calculate_item_price_info(&listing("§7Tier: Rare", "§6 - §f100§7²"));
        assert!(info.is_empty());
    }

    #[test]
    fn test_price_info_malformed_value() {
        let model = TradeMarketModel::new();
        assert!(model
            .calculate_item_price_info(&listing("§6Price:", "§6 - 100 emeralds"))
            .is_empty());
        assert!(model
            .calculate_item_price_info(&listing("§6Price:", "§6 - §f99,999,999,999§7²"))
            .is_empty());
    }

    #[test]
    fn test_price_info_short_lore() {
        let model = TradeMarketModel::new();
        let item = ItemStack::new("Stick", 0, vec!["".to_string(), "§6Price:".to_string()]);
        assert!(model.calculate_item_price_info(&item).is_empty());
        assert!(model
            .calculate_item_price_info(&ItemStack::new("Stick", 0, vec![]))
            .is_empty());

        assert_eq!(
            parse_price_lore(&[]),
            Err(MarketError::MissingLoreLine(1))
        );
    }

    #[test]
    fn test_price_info_json_lore() {
        let model = TradeMarketModel::new();
        let item = ItemStack::new(
            "Stick",
            0,
            vec![
                "".to_string(),
                r#"{"text":"Price:","color":"gold"}"#.to_string(),
                "§6 - §f500§7²".to_string(),
            ],
        );
        assert_eq!(model.calculate_item_price_info(&item), PriceInfo::new(500, 500, 1));
    }

    #[test]
    fn test_preset_filters() {
        let mut model = TradeMarketModel::new();
        assert_eq!(model.preset_filter(1), None);
        assert!(!model.preset_filters_storage_mut().is_dirty());

        model.set_preset_filter(2, "type:boots tier:legendary");
        model.set_preset_filter(1, "name:cindershade");
        assert_eq!(model.preset_filter(2).as_deref(), Some("type:boots tier:legendary"));
        assert_eq!(model.preset_filter(3), None);
        assert!(model.preset_filters_storage_mut().is_dirty());

        model.set_preset_filter(2, "type:helmet");
        let ordered: Vec<_> = model.preset_filters().collect();
        assert_eq!(ordered, vec![(1, "name:cindershade"), (2, "type:helmet")]);
    }

    #[test]
    fn test_filter_screen_resets_last_search() {
        let mut model = TradeMarketModel::new();
        model.set_last_search_filter("name:ring");

        model.on_screen_open(&"§8Character Info".into());
        assert_eq!(model.last_search_filter(), "name:ring");

        model.on_screen_open(&"[Pg. 1] Filter Items".into());
        assert_eq!(model.last_search_filter(), "");
    }

    #[test]
    fn test_is_filter_screen() {
        assert!(TradeMarketModel::is_filter_screen(&"[Pg. 3] Filter Items".into()));
        assert!(!TradeMarketModel::is_filter_screen(&"[Pg. x] Filter Items".into()));
        assert!(!TradeMarketModel::is_filter_screen(&"Filter Items".into()));
        assert!(!TradeMarketModel::is_filter_screen(&"§8[Pg. 1] §lFilter Items".into()));
    }

    #[test]
    fn test_unit_price() {
        let model = TradeMarketModel::new();
        let container = sell_screen(
            28,
            vec![
                "§7Selling 16 items".to_string(),
                "- §7Per Unit:§f 12,345²".to_string(),
                "- §7Total:§f 197,520²".to_string(),
            ],
        );
        assert_eq!(model.unit_price(&container), 12345);
        assert_eq!(model.lowest_price(&container), -1);
    }

    #[test]
    fn test_lowest_price() {
        let model = TradeMarketModel::new();
        let container = sell_screen(
            51,
            vec!["§7Cheapest Sell Offer: §f1,000,000²".to_string()],
        );
        assert_eq!(model.lowest_price(&container), 1_000_000);
        assert_eq!(model.unit_price(&container), -1);
    }

    #[test]
    fn test_lookup_wrong_screen() {
        let model = TradeMarketModel::new();
        let mut container = Container::new(4, "[Pg. 1] Filter Items");
        let mut slots = vec![None; 54];
        slots[28] = Some(ItemStack::new(
            "Price",
            28,
            vec!["- §7Per Unit:§f 10²".to_string()],
        ));
        container.set_slots(slots);

        assert_eq!(model.unit_price(&container), -1);
    }

    #[test]
    fn test_simplify_item_name() {
        let name = |h: &str| TradeMarketModel::simplify_item_name(&h.into());

        assert_eq!(
            name("§6Selling 4 §5Cindershade§6 for 1,000² Each"),
            Some("§5Cindershade".to_string())
        );
        assert_eq!(name("§6Buying 16 Liquid Emerald"), Some("Liquid Emerald".to_string()));
        assert_eq!(name("§7§l64x Emerald Block"), Some("Emerald Block".to_string()));
        assert_eq!(name("§6Price:"), None);
    }
}
