#![forbid(unsafe_code)]

//! TASM source generation for tascii cell grids.
//!
//! The pipeline is a pure function of a [`tascii_core::Grid`] snapshot: each row
//! is partitioned into maximal [`segment::Segment`]s, the segments are walked in
//! row-major order by the [`emitter`], and the result is one assembly source
//! string built around the fixed [`template`]s. The [`sprite`] module is an
//! independent second output over the same snapshot.

pub mod emitter;
pub mod segment;
pub mod sprite;
pub mod template;

pub use emitter::generate;
pub use segment::{Segment, segment_row};
pub use sprite::generate_sprite_table;
