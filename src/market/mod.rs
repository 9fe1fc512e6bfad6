pub mod model;
pub mod patterns;

pub use model::{parse_price_lines, parse_price_lore, TradeMarketModel, PRESET_FILTERS_KEY};
