pub mod events;
pub mod screen_handler;

pub use events::HostEvent;
pub use screen_handler::ScreenEventHandlers;
