pub mod container;
pub mod slot_manager;

pub use container::{parse_window_title, Container};
pub use slot_manager::{TradeMarketSlot, FILTER_SCREEN_TITLE};
