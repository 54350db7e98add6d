//! Solid colour floors and ceilings.
//!
//! Every flat is reduced to the palette index that occurs most often in its
//! 64x64 bitmap. Spans are then filled with that index passed through the
//! colourmap for the sector light, which is much cheaper than texture mapping.
//!
//! Lifecycle:
//! - on level load [`FlatCatalog::resolve`] finds the flat range and
//!   [`FlatColours::build`] fills the translation table,
//! - every tic [`FlatColours::update_animated_flat`] flickers the slime,
//! - while drawing [`FlatColours::colour_for`] gives the lit colour.

mod animation;
mod builder;
mod catalog;
mod colourmap;
mod error;
mod flat_colours;
mod scratch;

pub use animation::*;
pub use builder::dominant_colour;
pub use catalog::*;
pub use colourmap::*;
pub use error::FlatError;
pub use flat_colours::FlatColours;
pub use scratch::ScratchBuffers;

pub use log;

/// Flats are always 64x64, one byte per pixel
pub const FLAT_WIDTH: usize = 64;
pub const FLAT_SIZE: usize = FLAT_WIDTH * FLAT_WIDTH;
pub const PALETTE_SIZE: usize = 256;
