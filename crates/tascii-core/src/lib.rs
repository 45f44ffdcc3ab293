#![forbid(unsafe_code)]

//! Leaf data types for tascii: the packed text attribute, cell and grid
//! snapshots, and the CP437 display table.
//!
//! Nothing in this crate performs I/O or holds process-wide state; every type is
//! a plain value handed between the editor layer and the code generator.

pub mod attr;
pub mod cell;
pub mod cp437;
pub mod grid;

pub use attr::{BACKGROUND_PALETTE, FOREGROUND_PALETTE, Rgb, TextAttr};
pub use cell::{Cell, DEFAULT_GLYPH, STRING_TERMINATOR};
pub use cp437::{CP437_TO_CHAR, glyph_char};
pub use grid::{Grid, GridError};
