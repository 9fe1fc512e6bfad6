use anyhow::Result;
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use tracing::info;

use crate::market::{TradeMarketModel, PRESET_FILTERS_KEY};
use crate::storage::StorageManager;

/// Shared handle to the Trade Market model and its persistence
///
/// The client calls into the model from its main thread only; the lock is
/// there so the console and the event handlers can hold the same model.
#[derive(Clone)]
pub struct MarketState {
    model: Arc<RwLock<TradeMarketModel>>,
    storage: Arc<Mutex<StorageManager>>,
    autosave: bool,
}

impl MarketState {
    /// Restore the model from `storage`
    pub fn load(storage: StorageManager, autosave: bool) -> Self {
        let presets = storage.restore(PRESET_FILTERS_KEY);
        let model = TradeMarketModel::with_preset_filters(presets);
        info!(
            "Restored {} preset filters",
            model.preset_filters().count()
        );

        Self {
            model: Arc::new(RwLock::new(model)),
            storage: Arc::new(Mutex::new(storage)),
            autosave,
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, TradeMarketModel> {
        self.model.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TradeMarketModel> {
        self.model.write()
    }

    /// Save a preset filter, flushing it right away when autosave is on
    pub fn set_preset_filter(&self, preset_id: i32, filter: impl Into<String>) -> Result<()> {
        self.model.write().set_preset_filter(preset_id, filter);

        if self.autosave {
            self.flush()?;
        }
        Ok(())
    }

    /// Write touched storages to disk. Returns whether anything was written.
    pub fn flush(&self) -> Result<bool> {
        let mut model = self.model.write();
        let mut storage = self.storage.lock();
        storage.flush(PRESET_FILTERS_KEY, model.preset_filters_storage_mut())
    }
}
