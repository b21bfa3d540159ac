//! In-memory window model
//!
//! [`Screen`] is a [`WindowBackend`] that keeps everything in RAM: the
//! window background plus a fixed number of text layer slots. A render
//! task draws it onto a panel whenever it is dirty.

use heapless::String;

use crate::backend::{DisplayError, LayerId, WindowBackend};
use crate::color::Color;
use crate::geometry::{Rect, TextAlignment};

/// Number of text layer slots
pub const MAX_TEXT_LAYERS: usize = 4;

/// Maximum bytes of text per layer
pub const TEXT_CAPACITY: usize = 32;

/// State of one text layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayer {
    pub frame: Rect,
    pub alignment: TextAlignment,
    pub background: Color,
    pub text_color: Color,
    pub text: String<TEXT_CAPACITY>,
}

impl TextLayer {
    /// A fresh layer: white background, black left-aligned text, empty
    pub const fn new(frame: Rect) -> Self {
        Self {
            frame,
            alignment: TextAlignment::Left,
            background: Color::WHITE,
            text_color: Color::BLACK,
            text: String::new(),
        }
    }
}

const EMPTY_SLOT: Option<TextLayer> = None;

/// Window with text layers, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    bounds: Rect,
    background: Color,
    layers: [Option<TextLayer>; MAX_TEXT_LAYERS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Screen {
    /// Create an empty white window of the given size
    pub const fn new(width: i16, height: i16) -> Self {
        Self {
            bounds: Rect::new(0, 0, width, height),
            background: Color::WHITE,
            layers: [EMPTY_SLOT; MAX_TEXT_LAYERS],
            dirty: true,
        }
    }

    /// Window background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Look up a live text layer
    pub fn layer(&self, layer: LayerId) -> Option<&TextLayer> {
        self.layers.get(layer.0 as usize).and_then(|slot| slot.as_ref())
    }

    /// Iterate over live text layers
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &TextLayer)> {
        self.layers
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|l| (LayerId(i as u8), l)))
    }

    /// Number of live text layers
    pub fn layer_count(&self) -> usize {
        self.layers.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn layer_mut(&mut self, layer: LayerId) -> Result<&mut TextLayer, DisplayError> {
        self.layers
            .get_mut(layer.0 as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(DisplayError::UnknownLayer)
    }
}

impl WindowBackend for Screen {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_window_background(&mut self, color: Color) {
        self.background = color;
        self.dirty = true;
    }

    fn create_text_layer(&mut self, frame: Rect) -> Result<LayerId, DisplayError> {
        let index = self
            .layers
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(DisplayError::NoFreeLayer)?;
        self.layers[index] = Some(TextLayer::new(frame));
        self.dirty = true;
        Ok(LayerId(index as u8))
    }

    fn destroy_text_layer(&mut self, layer: LayerId) -> Result<(), DisplayError> {
        let slot = self
            .layers
            .get_mut(layer.0 as usize)
            .ok_or(DisplayError::UnknownLayer)?;
        if slot.take().is_none() {
            return Err(DisplayError::UnknownLayer);
        }
        self.dirty = true;
        Ok(())
    }

    fn set_text_alignment(
        &mut self,
        layer: LayerId,
        alignment: TextAlignment,
    ) -> Result<(), DisplayError> {
        self.layer_mut(layer)?.alignment = alignment;
        self.dirty = true;
        Ok(())
    }

    fn set_layer_background(&mut self, layer: LayerId, color: Color) -> Result<(), DisplayError> {
        self.layer_mut(layer)?.background = color;
        self.dirty = true;
        Ok(())
    }

    fn set_text_color(&mut self, layer: LayerId, color: Color) -> Result<(), DisplayError> {
        self.layer_mut(layer)?.text_color = color;
        self.dirty = true;
        Ok(())
    }

    fn set_text(&mut self, layer: LayerId, text: &str) -> Result<(), DisplayError> {
        let target = &mut self.layer_mut(layer)?.text;
        target.clear();
        // Truncate at a char boundary if too long
        for ch in text.chars() {
            if target.push(ch).is_err() {
                break;
            }
        }
        self.dirty = true;
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[bg={}", self.background);
        for (id, layer) in self.layers() {
            defmt::write!(f, ", {}: {}", id.0, layer.text.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_screen() {
        let screen = Screen::new(144, 168);
        assert_eq!(screen.bounds(), Rect::new(0, 0, 144, 168));
        assert_eq!(screen.background(), Color::WHITE);
        assert_eq!(screen.layer_count(), 0);
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_create_and_style_layer() {
        let mut screen = Screen::new(144, 168);
        let id = screen.create_text_layer(Rect::new(0, 42, 144, 30)).unwrap();
        screen.set_text_alignment(id, TextAlignment::Center).unwrap();
        screen.set_layer_background(id, Color::BLUE).unwrap();
        screen.set_text_color(id, Color::YELLOW).unwrap();
        screen.set_text(id, "hello").unwrap();

        let layer = screen.layer(id).unwrap();
        assert_eq!(layer.frame, Rect::new(0, 42, 144, 30));
        assert_eq!(layer.alignment, TextAlignment::Center);
        assert_eq!(layer.background, Color::BLUE);
        assert_eq!(layer.text_color, Color::YELLOW);
        assert_eq!(layer.text.as_str(), "hello");
    }

    #[test]
    fn test_new_layer_defaults() {
        let mut screen = Screen::new(144, 168);
        let id = screen.create_text_layer(Rect::new(0, 0, 10, 10)).unwrap();
        let layer = screen.layer(id).unwrap();
        assert_eq!(layer.background, Color::WHITE);
        assert_eq!(layer.text_color, Color::BLACK);
        assert_eq!(layer.alignment, TextAlignment::Left);
        assert!(layer.text.is_empty());
    }

    #[test]
    fn test_layer_slots_run_out() {
        let mut screen = Screen::new(144, 168);
        for _ in 0..MAX_TEXT_LAYERS {
            screen.create_text_layer(Rect::default()).unwrap();
        }
        assert_eq!(
            screen.create_text_layer(Rect::default()),
            Err(DisplayError::NoFreeLayer)
        );
    }

    #[test]
    fn test_destroy_frees_slot() {
        let mut screen = Screen::new(144, 168);
        let a = screen.create_text_layer(Rect::default()).unwrap();
        let _b = screen.create_text_layer(Rect::default()).unwrap();
        screen.destroy_text_layer(a).unwrap();

        assert_eq!(screen.layer_count(), 1);
        assert!(screen.layer(a).is_none());
        assert_eq!(screen.destroy_text_layer(a), Err(DisplayError::UnknownLayer));
        assert_eq!(screen.set_text(a, "x"), Err(DisplayError::UnknownLayer));

        // Freed slot is reused
        assert_eq!(screen.create_text_layer(Rect::default()).unwrap(), a);
    }

    #[test]
    fn test_long_text_truncated() {
        let mut screen = Screen::new(144, 168);
        let id = screen.create_text_layer(Rect::default()).unwrap();
        let long = "abcdefghijklmnopqrstuvwxyz0123456789";
        screen.set_text(id, long).unwrap();
        assert_eq!(screen.layer(id).unwrap().text.as_str(), &long[..TEXT_CAPACITY]);
    }

    #[test]
    fn test_dirty_tracking() {
        let mut screen = Screen::new(144, 168);
        screen.mark_clean();
        assert!(!screen.is_dirty());

        screen.set_window_background(Color::BLACK);
        assert!(screen.is_dirty());
        assert_eq!(screen.background(), Color::BLACK);
    }
}
