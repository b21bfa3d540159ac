//! Watchface window
//!
//! Owns the window backend and the two label layers. Loading creates the
//! layers and projects the current settings; unloading destroys them.

use tickface_display::{DisplayError, LayerId, Rect, TextAlignment, WindowBackend};

use super::{project, Labels};
use crate::settings::Settings;
use crate::traits::DisplayUpdater;

/// Label row height in pixels
pub const LABEL_HEIGHT: i16 = 30;

/// Frames of the seconds and animations labels inside `bounds`
pub fn label_frames(bounds: Rect) -> (Rect, Rect) {
    let w = bounds.size.w;
    let h = bounds.size.h;
    (
        Rect::new(0, h / 4, w, LABEL_HEIGHT),
        Rect::new(0, h / 2, w, LABEL_HEIGHT),
    )
}

/// Window lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowState {
    Unloaded,
    Loaded(Labels),
}

impl WindowState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, WindowState::Loaded(_))
    }

    pub fn labels(&self) -> Option<&Labels> {
        match self {
            WindowState::Loaded(labels) => Some(labels),
            WindowState::Unloaded => None,
        }
    }
}

/// The watchface's single window
pub struct WatchWindow<B> {
    backend: B,
    state: WindowState,
}

impl<B: WindowBackend> WatchWindow<B> {
    /// Wrap a backend; the window starts unloaded
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: WindowState::Unloaded,
        }
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    pub fn labels(&self) -> Option<&Labels> {
        self.state.labels()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Window load: create both labels and project `settings`
    ///
    /// Loading an already loaded window only re-projects. If a layer
    /// cannot be created, any layer already made is destroyed again and
    /// the window stays unloaded.
    pub fn load(&mut self, settings: &Settings) -> Result<(), DisplayError> {
        if let WindowState::Loaded(labels) = self.state {
            return project(settings, &mut self.backend, Some(&labels));
        }

        let (seconds_frame, animations_frame) = label_frames(self.backend.bounds());
        let second_tick = self.create_label(seconds_frame)?;
        let animations = match self.create_label(animations_frame) {
            Ok(layer) => layer,
            Err(e) => {
                let _ = self.backend.destroy_text_layer(second_tick);
                return Err(e);
            }
        };

        let labels = Labels {
            second_tick,
            animations,
        };
        self.state = WindowState::Loaded(labels);
        project(settings, &mut self.backend, Some(&labels))
    }

    /// Window unload: destroy both labels
    pub fn unload(&mut self) {
        if let WindowState::Loaded(labels) = self.state {
            let _ = self.backend.destroy_text_layer(labels.second_tick);
            let _ = self.backend.destroy_text_layer(labels.animations);
        }
        self.state = WindowState::Unloaded;
    }

    fn create_label(&mut self, frame: Rect) -> Result<LayerId, DisplayError> {
        let layer = self.backend.create_text_layer(frame)?;
        if let Err(e) = self.backend.set_text_alignment(layer, TextAlignment::Center) {
            let _ = self.backend.destroy_text_layer(layer);
            return Err(e);
        }
        Ok(layer)
    }
}

impl<B: WindowBackend> DisplayUpdater for WatchWindow<B> {
    fn update_display(&mut self, settings: &Settings) {
        // Only fails for layers this window did not create
        let _ = project(settings, &mut self.backend, self.state.labels());
    }
}
