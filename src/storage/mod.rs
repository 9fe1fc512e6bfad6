pub mod manager;
#[allow(clippy::module_inception)]
pub mod storage;

pub use manager::StorageManager;
pub use storage::Storage;
