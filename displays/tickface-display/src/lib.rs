//! Display abstraction and window model for Tickface
//!
//! This crate provides:
//! - [`Color`], the watch's native 8-bit ARGB color
//! - Geometry types ([`Rect`], [`Point`], [`Size`]) and [`TextAlignment`]
//! - [`WindowBackend`], the toolkit surface the watchface draws through
//! - [`Screen`], an in-memory window with text layers
//!
//! # Architecture
//!
//! The watchface core never talks to a panel directly. It creates text
//! layers and sets colors and strings through [`WindowBackend`]. On the
//! firmware the backend is a [`Screen`], which a render task later draws
//! onto the physical display; on the host the same [`Screen`] is what
//! tests inspect.

#![no_std]

pub mod backend;
pub mod color;
pub mod geometry;
pub mod screen;

// Re-export key types
pub use backend::{DisplayError, LayerId, WindowBackend};
pub use color::Color;
pub use geometry::{Point, Rect, Size, TextAlignment};
pub use screen::{Screen, TextLayer, MAX_TEXT_LAYERS, TEXT_CAPACITY};
