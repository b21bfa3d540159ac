//! Window backend trait
//!
//! Defines the toolkit surface the watchface draws through: one window
//! with a background color and a handful of text layers.

use crate::color::Color;
use crate::geometry::{Rect, TextAlignment};

/// Window backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// All text layer slots are in use
    NoFreeLayer,
    /// The layer was never created or was already destroyed
    UnknownLayer,
}

/// Handle to a text layer owned by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerId(pub u8);

/// Window backend trait
///
/// Implementations hold the window and its text layers. Setters on a
/// destroyed or unknown layer return [`DisplayError::UnknownLayer`].
pub trait WindowBackend {
    /// Bounds of the window's root layer
    fn bounds(&self) -> Rect;

    /// Set the window background color
    fn set_window_background(&mut self, color: Color);

    /// Create a text layer with the given frame
    fn create_text_layer(&mut self, frame: Rect) -> Result<LayerId, DisplayError>;

    /// Destroy a text layer and release its slot
    fn destroy_text_layer(&mut self, layer: LayerId) -> Result<(), DisplayError>;

    /// Set how text is aligned inside the layer
    fn set_text_alignment(
        &mut self,
        layer: LayerId,
        alignment: TextAlignment,
    ) -> Result<(), DisplayError>;

    /// Set the layer's background color
    fn set_layer_background(&mut self, layer: LayerId, color: Color) -> Result<(), DisplayError>;

    /// Set the layer's text color
    fn set_text_color(&mut self, layer: LayerId, color: Color) -> Result<(), DisplayError>;

    /// Set the layer's text
    fn set_text(&mut self, layer: LayerId, text: &str) -> Result<(), DisplayError>;
}
