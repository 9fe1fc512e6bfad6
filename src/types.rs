use serde::{Deserialize, Serialize};

/// Price data scraped from a Trade Market listing's tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub price: i32,

    /// Price after the silverbull discount, equal to `price` when there is none
    #[serde(rename = "discountedPrice")]
    pub discounted_price: i32,

    pub quantity: i32,
}

impl PriceInfo {
    /// Returned whenever a tooltip cannot be parsed
    pub const EMPTY: PriceInfo = PriceInfo {
        price: -1,
        discounted_price: -1,
        quantity: -1,
    };

    pub fn new(price: i32, discounted_price: i32, quantity: i32) -> Self {
        Self {
            price,
            discounted_price,
            quantity,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Total cost of the listing at the discounted price
    pub fn total_price(&self) -> i64 {
        if self.is_empty() {
            return -1;
        }
        (self.discounted_price as i64).saturating_mul(self.quantity as i64)
    }
}

impl Default for PriceInfo {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Container screens the Trade Market opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerKind {
    /// "What would you like to sell?" - create sell offer screen
    TradeMarketSell,
    /// "[Pg. n] Filter Items" - search filter picker
    TradeMarketFilter,
    Other(String),
}

/// Represents an item in a container slot, as handed over by the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemStack {
    pub name: String,
    pub count: u32,
    pub slot: usize,
    /// Tooltip lines below the item name, with legacy `§` formatting
    #[serde(default)]
    pub lore: Vec<String>,
}

impl ItemStack {
    pub fn new(name: impl Into<String>, slot: usize, lore: Vec<String>) -> Self {
        Self {
            name: name.into(),
            count: 1,
            slot,
            lore,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.name.is_empty() || self.name.eq_ignore_ascii_case("air")
    }
}
