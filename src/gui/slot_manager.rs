/// Slot positions and screen kinds for the Trade Market GUIs
///
/// Slot numbers index into the container's own slots, not the player inventory.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::text::StyledText;
use crate::types::ContainerKind;

static SELL_SCREEN_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^What would you like to sell\?$").unwrap());

/// `[Pg. 3] Filter Items`
pub static FILTER_SCREEN_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[Pg\. \d+\] Filter Items$").unwrap());

/// Fixed slots read by the price lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeMarketSlot {
    /// Slot 28 - price summary of the offer being created in the sell screen
    SellPrice = 28,
    /// Slot 51 - price check item showing the cheapest sell offer
    PriceCheck = 51,
}

impl TradeMarketSlot {
    /// Get the raw slot number
    pub fn slot(&self) -> usize {
        *self as usize
    }
}

impl ContainerKind {
    /// Classify a screen from its title.
    ///
    /// Filter screens must match with their formatting intact; the sell screen
    /// title is compared without formatting.
    pub fn from_title(title: &StyledText) -> Self {
        let kind = if title.matches_unformatted(&SELL_SCREEN_TITLE) {
            ContainerKind::TradeMarketSell
        } else if title.matches(&FILTER_SCREEN_TITLE) {
            ContainerKind::TradeMarketFilter
        } else {
            ContainerKind::Other(title.unformatted())
        };

        debug!("Classified screen \"{}\" as {:?}", title, kind);
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_values() {
        assert_eq!(TradeMarketSlot::SellPrice.slot(), 28);
        assert_eq!(TradeMarketSlot::PriceCheck.slot(), 51);
    }

    #[test]
    fn test_kind_from_title() {
        assert_eq!(
            ContainerKind::from_title(&"What would you like to sell?".into()),
            ContainerKind::TradeMarketSell
        );
        assert_eq!(
            ContainerKind::from_title(&"[Pg. 4] Filter Items".into()),
            ContainerKind::TradeMarketFilter
        );
        assert_eq!(
            ContainerKind::from_title(&"§8[Pg. 4] §lFilter Items".into()),
            ContainerKind::Other("[Pg. 4] Filter Items".to_string())
        );
        assert_eq!(
            ContainerKind::from_title(&"§7Character Info".into()),
            ContainerKind::Other("Character Info".to_string())
        );
    }

    #[test]
    fn test_filter_title_shape() {
        let matches = |t: &str| StyledText::new(t).matches(&FILTER_SCREEN_TITLE);

        assert!(matches("[Pg. 1] Filter Items"));
        assert!(matches("[Pg. 12] Filter Items"));
        assert!(!matches("[Pg. ] Filter Items"));
        assert!(!matches("[Pg 1] Filter Items"));
        assert!(!matches("Filter Items"));
        assert!(!matches("[Pg. 1] Filter Items Extra"));
        assert!(!matches("Old [Pg. 1] Filter Items"));
        assert!(!matches("§8[Pg. 1] §lFilter Items"));
    }
}
