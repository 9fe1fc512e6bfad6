use crate::types::ItemStack;

/// Events the client forwards from its UI
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Screen opened (container id, raw title)
    ScreenOpened { id: u8, title: String },
    /// Full slot contents of an open container
    ContainerContent {
        id: u8,
        slots: Vec<Option<ItemStack>>,
    },
    /// Current screen closed
    ScreenClosed,
}
