/// Tooltip access helpers

use super::styled::StyledText;
use crate::types::ItemStack;

/// Tooltip lines of an item, JSON components flattened to legacy text
pub fn get_lore(item: &ItemStack) -> Vec<StyledText> {
    item.lore
        .iter()
        .map(|line| StyledText::from_component(line))
        .collect()
}

/// All tooltip lines joined into a single text, for substring searches
pub fn get_string_lore(item: &ItemStack) -> StyledText {
    StyledText::join(&get_lore(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_lore_flattens_components() {
        let item = ItemStack::new(
            "Emerald Block",
            28,
            vec![
                "".to_string(),
                r#"{"text":"Price:","color":"gold"}"#.to_string(),
            ],
        );

        let lore = get_lore(&item);
        assert_eq!(lore.len(), 2);
        assert_eq!(lore[1].as_str(), "§6Price:");
        assert_eq!(get_string_lore(&item).as_str(), "\n§6Price:");
    }
}
