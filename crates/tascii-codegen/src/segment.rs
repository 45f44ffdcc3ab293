#![forbid(unsafe_code)]

//! Per-row segment grouping.
//!
//! Each row is partitioned left to right into maximal runs that share a render
//! strategy:
//!
//! - a **text** segment becomes one `$`-terminated string printed in one go;
//! - a **block** segment becomes one character-fill call (same glyph and
//!   attribute repeated).
//!
//! Text grouping is always attempted first, even when it yields a single-cell
//! segment: a present, printable character prefers the string path over being
//! folded into a same-attribute block of differing glyphs. A cell only
//! qualifies for text when its glyph is *literally* painted (not defaulted)
//! and is not the `$` terminator byte, which the DOS print service would treat
//! as end-of-string.
//!
//! Blank cells are skipped outright, so segments cover exactly the non-blank
//! columns of a row, in strictly increasing order, with no overlap.

use smallvec::SmallVec;
use tascii_core::{Cell, STRING_TERMINATOR, TextAttr};

/// A maximal same-strategy run within one row. Transient: produced by
/// [`segment_row`], consumed immediately by the emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Run of literally-present glyphs sharing one attribute, none of them `$`.
    Text {
        /// Grid row.
        row: usize,
        /// Column of the first cell.
        col: usize,
        /// Shared effective attribute.
        attr: TextAttr,
        /// The glyph bytes, one per covered cell.
        glyphs: Vec<u8>,
    },
    /// Run of one repeated (glyph, attribute) pair.
    Block {
        /// Grid row.
        row: usize,
        /// Column of the first cell.
        col: usize,
        /// Effective glyph (defaults to space for attribute-only cells).
        glyph: u8,
        /// Effective attribute.
        attr: TextAttr,
        /// Number of covered cells, >= 1.
        len: usize,
    },
}

impl Segment {
    /// Grid row this segment lives in.
    #[must_use]
    pub fn row(&self) -> usize {
        match self {
            Self::Text { row, .. } | Self::Block { row, .. } => *row,
        }
    }

    /// Column of the first covered cell.
    #[must_use]
    pub fn col(&self) -> usize {
        match self {
            Self::Text { col, .. } | Self::Block { col, .. } => *col,
        }
    }

    /// Number of covered cells.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text { glyphs, .. } => glyphs.len(),
            Self::Block { len, .. } => *len,
        }
    }

    /// Segments are never empty; kept for clippy symmetry with [`Self::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared effective attribute of the covered cells.
    #[must_use]
    pub fn attr(&self) -> TextAttr {
        match self {
            Self::Text { attr, .. } | Self::Block { attr, .. } => *attr,
        }
    }
}

/// True when `cell` can sit in a text segment at all: glyph literally painted
/// and not the `$` terminator.
#[inline]
fn text_eligible(cell: Cell) -> Option<u8> {
    match cell.glyph {
        Some(glyph) if glyph != STRING_TERMINATOR => Some(glyph),
        _ => None,
    }
}

/// Partition one row into maximal segments.
///
/// Every non-blank cell lands in exactly one segment; blank cells are covered
/// by none. An all-blank row yields an empty list.
#[must_use]
pub fn segment_row(row: usize, cells: &[Cell]) -> SmallVec<[Segment; 8]> {
    let mut segments = SmallVec::new();
    let mut col = 0;
    while col < cells.len() {
        let Some((glyph, attr)) = cells[col].effective() else {
            col += 1;
            continue;
        };
        let start = col;
        if text_eligible(cells[col]).is_some() {
            // Text first, even for a single cell.
            let mut glyphs = vec![glyph];
            col += 1;
            while col < cells.len() {
                let Some(next) = text_eligible(cells[col]) else {
                    break;
                };
                if cells[col].effective_attr() != Some(attr) {
                    break;
                }
                glyphs.push(next);
                col += 1;
            }
            segments.push(Segment::Text {
                row,
                col: start,
                attr,
                glyphs,
            });
        } else {
            // Fallback: repeated (glyph, attr) block keyed on this cell.
            col += 1;
            while col < cells.len() && cells[col].effective() == Some((glyph, attr)) {
                col += 1;
            }
            segments.push(Segment::Block {
                row,
                col: start,
                glyph,
                attr,
                len: col - start,
            });
        }
    }
    segments
}
