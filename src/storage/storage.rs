/// A persisted value with dirty tracking.
///
/// Owners mutate through [`get_mut`](Storage::get_mut) and call
/// [`touched`](Storage::touched) afterwards; the [`StorageManager`](super::StorageManager)
/// writes touched storages to disk on its next flush.
#[derive(Debug, Clone, Default)]
pub struct Storage<T> {
    value: T,
    dirty: bool,
}

impl<T> Storage<T> {
    pub fn new(value: T) -> Self {
        Self { value, dirty: false }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Mark the value as changed since the last flush
    pub fn touched(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_touched_marks_dirty() {
        let mut storage: Storage<BTreeMap<i32, String>> = Storage::default();
        assert!(!storage.is_dirty());

        storage.get_mut().insert(1, "tier:legendary".to_string());
        storage.touched();
        assert!(storage.is_dirty());
        assert_eq!(storage.get().get(&1).map(String::as_str), Some("tier:legendary"));

        storage.mark_clean();
        assert!(!storage.is_dirty());
    }
}
