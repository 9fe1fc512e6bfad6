use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::events::HostEvent;
use crate::gui::Container;
use crate::state::MarketState;
use crate::types::{ContainerKind, ItemStack, PriceInfo};

/// Event handlers wiring client screen events into the Trade Market model
#[derive(Clone)]
pub struct ScreenEventHandlers {
    state: MarketState,
    /// Currently open container
    current_container: Arc<RwLock<Option<Container>>>,
}

impl ScreenEventHandlers {
    pub fn new(state: MarketState) -> Self {
        Self {
            state,
            current_container: Arc::new(RwLock::new(None)),
        }
    }

    pub fn state(&self) -> &MarketState {
        &self.state
    }

    /// Dispatch a client event
    pub fn handle(&self, event: HostEvent) {
        match event {
            HostEvent::ScreenOpened { id, title } => self.handle_screen_open(id, &title),
            HostEvent::ContainerContent { id, slots } => self.handle_container_content(id, slots),
            HostEvent::ScreenClosed => self.handle_screen_close(),
        }
    }

    /// Handle screen open event
    pub fn handle_screen_open(&self, id: u8, raw_title: &str) {
        let container = Container::new(id, raw_title);
        info!(
            "[Screen] Opened: id={} kind={:?} title=\"{}\"",
            id, container.kind, container.title
        );

        self.state.write().on_screen_open(&container.title);
        *self.current_container.write() = Some(container);
    }

    /// Handle container content update
    pub fn handle_container_content(&self, id: u8, slots: Vec<Option<ItemStack>>) {
        let mut current = self.current_container.write();
        match current.as_mut() {
            Some(container) if container.id == id => container.set_slots(slots),
            Some(container) => {
                debug!(
                    "Ignoring content for container {} while {} is open",
                    id, container.id
                );
            }
            None => warn!("Received content for container {} with no open screen", id),
        }
    }

    /// Handle screen close event
    pub fn handle_screen_close(&self) {
        if let Some(container) = self.current_container.write().take() {
            info!("[Screen] Closed: title=\"{}\"", container.title);
        }
    }

    pub fn current_container(&self) -> Option<Container> {
        self.current_container.read().clone()
    }

    pub fn current_kind(&self) -> Option<ContainerKind> {
        self.current_container.read().as_ref().map(|c| c.kind.clone())
    }

    /// Unit price on the open sell screen, or -1
    pub fn unit_price(&self) -> i32 {
        match self.current_container.read().as_ref() {
            Some(container) => self.state.read().unit_price(container),
            None => -1,
        }
    }

    /// Cheapest sell offer on the open sell screen, or -1
    pub fn lowest_price(&self) -> i32 {
        match self.current_container.read().as_ref() {
            Some(container) => self.state.read().lowest_price(container),
            None => -1,
        }
    }

    /// Price info of the listing in `slot` of the open container
    pub fn price_info_at(&self, slot: usize) -> PriceInfo {
        let current = self.current_container.read();
        let Some(item) = current.as_ref().and_then(|c| c.item(slot)) else {
            debug!("No item in slot {}", slot);
            return PriceInfo::EMPTY;
        };

        self.state.read().calculate_item_price_info(item)
    }
}
