//! Geometry types for window and layer placement

/// A point in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

/// A width and height in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub w: i16,
    pub h: i16,
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { w, h },
        }
    }

    /// Horizontal center
    pub const fn center_x(&self) -> i16 {
        self.origin.x + self.size.w / 2
    }
}

/// Horizontal text alignment within a layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}
