pub mod component;
pub mod lore;
pub mod styled;

pub use component::to_legacy_text;
pub use lore::{get_lore, get_string_lore};
pub use styled::StyledText;
