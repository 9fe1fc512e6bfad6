//! Trade Market lore scraper
//!
//! Reads price data out of Trade Market item tooltips in a Minecraft client and
//! keeps the player's saved search filters between sessions.

pub mod config;
pub mod error;
pub mod gui;
pub mod handlers;
pub mod logging;
pub mod market;
pub mod state;
pub mod storage;
pub mod text;
pub mod types;
pub mod utils;

pub use error::{MarketError, MarketResult};
pub use handlers::{HostEvent, ScreenEventHandlers};
pub use market::TradeMarketModel;
pub use state::MarketState;
pub use types::{ContainerKind, ItemStack, PriceInfo};
