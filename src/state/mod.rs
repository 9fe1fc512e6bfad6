pub mod manager;

pub use manager::MarketState;
