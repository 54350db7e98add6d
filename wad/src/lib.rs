//! This crate contains the structures and tools for reading WAD files: the
//! lump directory, lump lookup by name, fixed size lump reads, and the
//! palette and colourmap lumps.
//!
//! The structure of a WAD is this:
//!
//! ```text,ignore
//!                        <───── 32 bits ──────>
//!                        ┌────────────────────┐
//!             ┌──── 0x00 |  ASCII WAD Type    | 0x03
//!             |          | ────────────────── |
//!     Header ─┤     0x04 | # of directories   | 0x07
//!             |          | ────────────────── |
//!             └──── 0x08 | offset to listing ───0x0B ──┐
//!             ┌───────── | ────────────────── |        |
//!             |     0x0C | ┌────────────────┐ |        |
//!             |          | |   Lump Bytes   |<─────┐   |
//!     Lumps ──┤          | |       .        | |    |   |
//!             |          | └────────────────┘ |    |   |
//!             |          |         .          |    |   |
//!             └───────── |         .          |    |   |
//!             ┌───────── | ┌────────────────┐<─────────┘
//!             |          | |   Lump Offset  |──────┘
//!             |          | |----------------| |
//!  Directory ─┤          | |   Lump Size    | |
//!     List    |          | |----------------| |
//!             |          | |   Lump Name    | |
//!             |          | └────────────────┘ |
//!             |          |         .          |
//!             └───────── └────────────────────┘
//! ```
//!
//! Marker lumps of size zero bracket groups of lumps, `F_START`/`F_END` for
//! flats being the one used here.

mod error;
mod iterators;
pub mod lumps;
#[cfg(any(test, feature = "test-utils"))]
pub mod synth;
pub mod wad;

pub use crate::error::WadError;
pub use crate::iterators::LumpIter;
pub use crate::wad::*;
