pub mod string;

pub use string::{format_number_with_separators, parse_grouped_number, remove_minecraft_colors};
