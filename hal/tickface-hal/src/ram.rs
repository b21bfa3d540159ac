//! RAM-backed storage
//!
//! A [`FlashStorage`] implementation that keeps slots in memory. Used for
//! host-side simulation and tests. Contents survive as long as the value
//! does, so passing it from one app instance to the next models a reboot.

use heapless::{LinearMap, Vec};

use crate::flash::{FlashError, FlashStorage, StorageKey};

/// Number of slots a [`RamStorage`] can hold (one per [`StorageKey`])
const SLOT_COUNT: usize = 3;

/// In-memory key-value storage with `CAP` bytes per slot
#[derive(Debug, Clone, Default)]
pub struct RamStorage<const CAP: usize> {
    slots: LinearMap<StorageKey, Vec<u8, CAP>, SLOT_COUNT>,
    fail_writes: bool,
    writes: usize,
}

impl<const CAP: usize> RamStorage<CAP> {
    /// Create empty storage
    pub fn new() -> Self {
        Self {
            slots: LinearMap::new(),
            fail_writes: false,
            writes: 0,
        }
    }

    /// Make every subsequent write fail with [`FlashError::Flash`]
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw contents of a slot
    pub fn slot(&self, key: StorageKey) -> Option<&[u8]> {
        self.slots.get(&key).map(|v| v.as_slice())
    }

    /// Overwrite a slot directly, bypassing the write counter
    pub fn put(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        let value = Vec::from_slice(data).map_err(|_| FlashError::Full)?;
        self.slots
            .insert(key, value)
            .map_err(|_| FlashError::Full)?;
        Ok(())
    }
}

impl<const CAP: usize> FlashStorage for RamStorage<CAP> {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
        let data = self.slots.get(&key).ok_or(FlashError::NotFound)?;
        let len = data.len();
        if buffer.len() < len {
            return Err(FlashError::BufferTooSmall);
        }
        buffer[..len].copy_from_slice(data);
        Ok(len)
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
        if self.fail_writes {
            return Err(FlashError::Flash);
        }
        self.put(key, data)?;
        self.writes += 1;
        Ok(())
    }

    async fn exists(&mut self, key: StorageKey) -> bool {
        self.slots.contains_key(&key)
    }

    async fn erase_all(&mut self) -> Result<(), FlashError> {
        self.slots.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_missing_key() {
        let mut storage = RamStorage::<16>::new();
        let mut buf = [0u8; 16];
        let result = block_on(storage.read(StorageKey::Settings, &mut buf));
        assert_eq!(result, Err(FlashError::NotFound));
        assert!(!block_on(storage.exists(StorageKey::Settings)));
    }

    #[test]
    fn test_write_replaces_value() {
        let mut storage = RamStorage::<16>::new();
        block_on(storage.write(StorageKey::Settings, &[1, 2, 3, 4])).unwrap();
        block_on(storage.write(StorageKey::Settings, &[9, 8])).unwrap();

        let mut buf = [0u8; 16];
        let len = block_on(storage.read(StorageKey::Settings, &mut buf)).unwrap();
        assert_eq!(&buf[..len], &[9, 8]);
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn test_buffer_too_small() {
        let mut storage = RamStorage::<16>::new();
        block_on(storage.write(StorageKey::Settings, &[0; 8])).unwrap();

        let mut buf = [0u8; 4];
        let result = block_on(storage.read(StorageKey::Settings, &mut buf));
        assert_eq!(result, Err(FlashError::BufferTooSmall));
    }

    #[test]
    fn test_value_larger_than_slot() {
        let mut storage = RamStorage::<4>::new();
        let result = block_on(storage.write(StorageKey::Settings, &[0; 5]));
        assert_eq!(result, Err(FlashError::Full));
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_failing_writes_keep_old_value() {
        let mut storage = RamStorage::<16>::new();
        block_on(storage.write(StorageKey::Settings, &[1])).unwrap();

        storage.set_fail_writes(true);
        let result = block_on(storage.write(StorageKey::Settings, &[2]));
        assert_eq!(result, Err(FlashError::Flash));
        assert_eq!(storage.slot(StorageKey::Settings), Some(&[1u8][..]));
    }

    #[test]
    fn test_erase_all() {
        let mut storage = RamStorage::<16>::new();
        block_on(storage.write(StorageKey::Settings, &[1])).unwrap();
        block_on(storage.write(StorageKey::Reserved1, &[2])).unwrap();

        block_on(storage.erase_all()).unwrap();
        assert!(storage.slot(StorageKey::Settings).is_none());
        assert!(storage.slot(StorageKey::Reserved1).is_none());
    }
}
