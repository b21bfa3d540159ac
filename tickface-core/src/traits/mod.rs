//! Seams between the core and its collaborators

pub mod display;

pub use display::DisplayUpdater;
