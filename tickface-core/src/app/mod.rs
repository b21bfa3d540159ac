//! Watchface application
//!
//! [`App`] ties the pieces together: it owns the settings store, the
//! window and the inbox, and runs the lifecycle. Every call runs to
//! completion before the next one starts, so one inbound message is
//! fully applied, saved and projected before the next is looked at.

pub mod inbox;
pub mod state;

use tickface_display::{DisplayError, WindowBackend};
use tickface_hal::FlashStorage;
use tickface_protocol::SettingsMessage;

use crate::config::AppConfig;
use crate::display::WatchWindow;
use crate::receiver;
use crate::settings::{LoadOutcome, Settings, SettingsStore, StoreError};

pub use inbox::{Inbox, InboxDrop};
pub use state::{AppState, Event};

/// Errors from handling one inbound payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiveError {
    /// Payload was dropped before reaching the settings
    Dropped(InboxDrop),
    /// Settings were applied but could not be persisted
    Store(StoreError),
}

impl From<InboxDrop> for ReceiveError {
    fn from(e: InboxDrop) -> Self {
        ReceiveError::Dropped(e)
    }
}

impl From<StoreError> for ReceiveError {
    fn from(e: StoreError) -> Self {
        ReceiveError::Store(e)
    }
}

/// What happened during [`App::init`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Startup {
    /// Where the settings came from
    pub settings: LoadOutcome,
    /// Whether the window's labels were created
    pub window: Result<(), DisplayError>,
}

/// The watchface app
pub struct App<S, B> {
    store: SettingsStore<S>,
    window: WatchWindow<B>,
    inbox: Inbox,
    state: AppState,
}

impl<S: FlashStorage, B: WindowBackend> App<S, B> {
    /// Load settings, open the inbox and push the window
    pub async fn init(storage: S, backend: B, config: &AppConfig) -> (Self, Startup) {
        let mut store = SettingsStore::new(storage);
        let settings = store.load().await;

        let mut inbox = Inbox::closed();
        inbox.open(config.channel);

        let mut window = WatchWindow::new(backend);
        let window_result = window.load(store.settings());

        let app = Self {
            store,
            window,
            inbox,
            state: AppState::Uninitialized.transition(Event::Started),
        };
        let startup = Startup {
            settings,
            window: window_result,
        };
        (app, startup)
    }

    /// Handle one inbound payload
    ///
    /// On success returns the attributes that were applied. A save failure
    /// still leaves the new settings in memory and on screen.
    pub async fn receive(&mut self, bytes: &[u8]) -> Result<SettingsMessage, ReceiveError> {
        if !self.state.accepts_messages() {
            return Err(InboxDrop::NotOpen.into());
        }

        let dict = self.inbox.receive(bytes)?;
        let message = SettingsMessage::from_dictionary(&dict);
        receiver::handle_message(&mut self.store, &mut self.window, &message).await?;
        Ok(message)
    }

    pub fn settings(&self) -> &Settings {
        self.store.settings()
    }

    pub fn window(&self) -> &WatchWindow<B> {
        &self.window
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    /// Unload the window and hand back storage and backend
    pub fn shutdown(mut self) -> (S, B) {
        self.window.unload();
        self.inbox.close();
        self.state = self.state.transition(Event::Exit);
        (self.store.into_storage(), self.window.into_backend())
    }
}
