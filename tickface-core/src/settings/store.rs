//! Settings store
//!
//! Owns the settings record and the storage it persists to. Loading never
//! fails: anything short of a valid blob leaves the defaults in place and
//! is reported as a [`LoadOutcome`] for the caller to log.

use tickface_hal::{FlashError, FlashStorage, StorageKey};

use super::codec::{self, CodecError, SETTINGS_BLOB_SIZE};
use super::record::Settings;
use crate::traits::DisplayUpdater;

/// Read buffer; one byte larger than a blob so oversize values show up
/// as a size mismatch rather than fitting by accident
const READ_BUFFER_SIZE: usize = SETTINGS_BLOB_SIZE + 1;

/// What [`SettingsStore::load`] found in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadOutcome {
    /// A valid blob replaced the defaults
    Restored,
    /// Nothing stored yet (first run)
    Missing,
    /// Stored blob has the wrong size
    SizeMismatch,
    /// Stored blob has another format version
    VersionMismatch,
    /// Storage could not be read
    ReadFailed(FlashError),
}

impl LoadOutcome {
    /// Whether the record came from storage
    pub fn is_restored(&self) -> bool {
        matches!(self, LoadOutcome::Restored)
    }
}

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Flash operation failed
    Flash(FlashError),
}

impl From<FlashError> for StoreError {
    fn from(e: FlashError) -> Self {
        StoreError::Flash(e)
    }
}

/// Settings record plus the storage slot backing it
pub struct SettingsStore<S> {
    storage: S,
    settings: Settings,
}

impl<S: FlashStorage> SettingsStore<S> {
    /// Create a store holding the default settings
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            settings: Settings::DEFAULT,
        }
    }

    /// Current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access for applying updates
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return the storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Reset every field to its default
    pub fn load_defaults(&mut self) {
        self.settings = Settings::DEFAULT;
    }

    /// Load settings from storage
    ///
    /// Starts from the defaults and replaces them wholesale only if the
    /// stored blob decodes.
    pub async fn load(&mut self) -> LoadOutcome {
        self.load_defaults();

        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let len = match self.storage.read(StorageKey::Settings, &mut buffer).await {
            Ok(len) => len,
            Err(FlashError::NotFound) => return LoadOutcome::Missing,
            Err(FlashError::BufferTooSmall) => return LoadOutcome::SizeMismatch,
            Err(e) => return LoadOutcome::ReadFailed(e),
        };

        match codec::decode(&buffer[..len]) {
            Ok(settings) => {
                self.settings = settings;
                LoadOutcome::Restored
            }
            Err(CodecError::SizeMismatch { .. }) => LoadOutcome::SizeMismatch,
            Err(CodecError::VersionMismatch { .. }) => LoadOutcome::VersionMismatch,
        }
    }

    /// Persist the settings and refresh the display
    ///
    /// The display is refreshed even if the write fails; the in-memory
    /// record stays authoritative either way.
    pub async fn save<D: DisplayUpdater + ?Sized>(
        &mut self,
        display: &mut D,
    ) -> Result<(), StoreError> {
        let blob = codec::encode(&self.settings);
        let written = self.storage.write(StorageKey::Settings, &blob).await;

        display.update_display(&self.settings);

        written.map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RefreshSpy;
    use embassy_futures::block_on;
    use proptest::prelude::*;
    use tickface_display::Color;
    use tickface_hal::RamStorage;

    type Storage = RamStorage<16>;

    /// Storage whose every operation fails
    struct BrokenStorage;

    impl FlashStorage for BrokenStorage {
        async fn read(
            &mut self,
            _key: StorageKey,
            _buffer: &mut [u8],
        ) -> Result<usize, FlashError> {
            Err(FlashError::Storage)
        }

        async fn write(&mut self, _key: StorageKey, _data: &[u8]) -> Result<(), FlashError> {
            Err(FlashError::Storage)
        }

        async fn exists(&mut self, _key: StorageKey) -> bool {
            false
        }

        async fn erase_all(&mut self) -> Result<(), FlashError> {
            Err(FlashError::Storage)
        }
    }

    fn restart(store: SettingsStore<Storage>) -> (SettingsStore<Storage>, LoadOutcome) {
        let mut store = SettingsStore::new(store.into_storage());
        let outcome = block_on(store.load());
        (store, outcome)
    }

    #[test]
    fn test_load_defaults_resets_every_field() {
        let mut store = SettingsStore::new(Storage::new());
        *store.settings_mut() = Settings {
            background_color: Color::RED,
            foreground_color: Color::BLUE,
            second_tick: true,
            animations: true,
        };

        store.load_defaults();
        assert_eq!(*store.settings(), Settings::DEFAULT);
    }

    #[test]
    fn test_first_run_uses_defaults() {
        let mut store = SettingsStore::new(Storage::new());
        store.settings_mut().second_tick = true;

        assert_eq!(block_on(store.load()), LoadOutcome::Missing);
        assert_eq!(*store.settings(), Settings::DEFAULT);
    }

    #[test]
    fn test_short_blob_uses_defaults() {
        let mut storage = Storage::new();
        storage.put(StorageKey::Settings, &[1, 0xF0, 0xC3]).unwrap();
        let mut store = SettingsStore::new(storage);

        assert_eq!(block_on(store.load()), LoadOutcome::SizeMismatch);
        assert_eq!(*store.settings(), Settings::DEFAULT);
    }

    #[test]
    fn test_oversize_blob_uses_defaults() {
        let mut storage = Storage::new();
        storage.put(StorageKey::Settings, &[1, 0xF0, 0xC3, 1, 1, 0, 0, 0]).unwrap();
        let mut store = SettingsStore::new(storage);

        assert_eq!(block_on(store.load()), LoadOutcome::SizeMismatch);
        assert_eq!(*store.settings(), Settings::DEFAULT);
    }

    #[test]
    fn test_other_version_uses_defaults() {
        let mut storage = Storage::new();
        storage.put(StorageKey::Settings, &[9, 0xF0, 0xC3, 1, 1]).unwrap();
        let mut store = SettingsStore::new(storage);

        assert_eq!(block_on(store.load()), LoadOutcome::VersionMismatch);
        assert_eq!(*store.settings(), Settings::DEFAULT);
    }

    #[test]
    fn test_read_failure_uses_defaults() {
        let mut store = SettingsStore::new(BrokenStorage);
        assert_eq!(
            block_on(store.load()),
            LoadOutcome::ReadFailed(FlashError::Storage)
        );
        assert_eq!(*store.settings(), Settings::DEFAULT);
    }

    #[test]
    fn test_save_writes_once_and_refreshes() {
        let mut store = SettingsStore::new(Storage::new());
        let mut spy = RefreshSpy::default();

        block_on(store.save(&mut spy)).unwrap();

        assert_eq!(store.storage().write_count(), 1);
        assert_eq!(spy.refreshes, 1);
        assert_eq!(spy.last, Some(Settings::DEFAULT));
    }

    #[test]
    fn test_save_replaces_previous_blob() {
        let mut store = SettingsStore::new(Storage::new());
        let mut spy = RefreshSpy::default();

        store.settings_mut().animations = true;
        block_on(store.save(&mut spy)).unwrap();
        store.settings_mut().animations = false;
        block_on(store.save(&mut spy)).unwrap();

        let (store, outcome) = restart(store);
        assert_eq!(outcome, LoadOutcome::Restored);
        assert!(!store.settings().animations);
    }

    #[test]
    fn test_write_failure_still_refreshes() {
        let mut storage = Storage::new();
        storage.set_fail_writes(true);
        let mut store = SettingsStore::new(storage);
        let mut spy = RefreshSpy::default();

        store.settings_mut().foreground_color = Color::YELLOW;
        let result = block_on(store.save(&mut spy));

        assert_eq!(result, Err(StoreError::Flash(FlashError::Flash)));
        assert_eq!(spy.refreshes, 1);
        assert_eq!(store.settings().foreground_color, Color::YELLOW);
        assert!(store.storage().slot(StorageKey::Settings).is_none());
    }

    #[test]
    fn test_only_a_valid_blob_counts_as_restored() {
        let mut store = SettingsStore::new(Storage::new());
        let outcome = block_on(store.load());
        assert!(!outcome.is_restored());

        block_on(store.save(&mut RefreshSpy::default())).unwrap();
        let (_, outcome) = restart(store);
        assert!(outcome.is_restored());

        assert!(!LoadOutcome::VersionMismatch.is_restored());
        assert!(!LoadOutcome::ReadFailed(FlashError::Storage).is_restored());
    }

    #[test]
    fn test_black_background_survives_restart() {
        let mut store = SettingsStore::new(Storage::new());
        let mut spy = RefreshSpy::default();

        store.settings_mut().background_color = Color::from_hex(0x000000);
        block_on(store.save(&mut spy)).unwrap();

        let (store, _) = restart(store);
        assert_eq!(store.settings().background_color, Color::BLACK);
    }

    proptest! {
        #[test]
        fn prop_save_then_restart_restores_record(
            bg in any::<i32>(),
            fg in any::<i32>(),
            second_tick in any::<bool>(),
            animations in any::<bool>(),
        ) {
            let settings = Settings {
                background_color: Color::from_hex(bg),
                foreground_color: Color::from_hex(fg),
                second_tick,
                animations,
            };
            let mut store = SettingsStore::new(Storage::new());
            *store.settings_mut() = settings;
            block_on(store.save(&mut RefreshSpy::default())).unwrap();

            let (store, outcome) = restart(store);
            prop_assert_eq!(outcome, LoadOutcome::Restored);
            prop_assert_eq!(*store.settings(), settings);
        }
    }
}
