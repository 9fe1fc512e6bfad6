/// Container snapshots
///
/// The client reports an open container as a title plus its slot contents.
/// `Container` keeps the latest snapshot so lookups can read fixed slots
/// without touching the client again.

use tracing::debug;

use crate::text::{to_legacy_text, StyledText};
use crate::types::{ContainerKind, ItemStack};

/// Snapshot of an open container screen
#[derive(Debug, Clone)]
pub struct Container {
    pub id: u8,
    pub title: StyledText,
    pub kind: ContainerKind,
    pub slots: Vec<Option<ItemStack>>,
}

impl Container {
    /// Create an empty container from the raw title sent by the client
    pub fn new(id: u8, raw_title: &str) -> Self {
        let title = StyledText::new(parse_window_title(raw_title));
        let kind = ContainerKind::from_title(&title);

        Self {
            id,
            title,
            kind,
            slots: Vec::new(),
        }
    }

    /// Replace the slot contents, re-indexing items by position
    pub fn set_slots(&mut self, slots: Vec<Option<ItemStack>>) {
        self.slots = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.map(|mut item| {
                    item.slot = index;
                    item
                })
            })
            .collect();
        debug!(
            "Container {} now has {} slots ({} filled)",
            self.id,
            self.slots.len(),
            self.slots.iter().filter(|s| s.is_some()).count()
        );
    }

    /// Item in `index`, or `None` when out of range or empty
    pub fn item(&self, index: usize) -> Option<&ItemStack> {
        self.slots
            .get(index)?
            .as_ref()
            .filter(|item| !item.is_empty())
    }

    /// Find an item whose unformatted name contains `name`, case-insensitive
    pub fn find_item_containing(&self, name: &str) -> Option<usize> {
        let needle = StyledText::new(name).unformatted().to_lowercase();

        self.slots.iter().flatten().find_map(|item| {
            let item_name = StyledText::from_component(&item.name)
                .unformatted()
                .to_lowercase();
            item_name.contains(&needle).then_some(item.slot)
        })
    }
}

/// Parse a window title that may be a JSON chat component
///
/// Titles arrive like `{"italic":false,"extra":[{"text":"[Pg. 1] Filter Items"}],"text":""}`
pub fn parse_window_title(raw_title: &str) -> String {
    to_legacy_text(raw_title)
}
