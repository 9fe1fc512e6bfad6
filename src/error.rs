use thiserror::Error;

/// Errors raised while scraping Trade Market lore.
///
/// These never reach callers of the model's public lookups; they are logged and
/// turned into sentinel values at that boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarketError {
    #[error("lore line {0} is missing")]
    MissingLoreLine(usize),

    #[error("unexpected price line: {0}")]
    UnexpectedPriceLine(String),

    #[error("unexpected price value line: {0}")]
    UnexpectedPriceValueLine(String),

    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

pub type MarketResult<T> = std::result::Result<T, MarketError>;
