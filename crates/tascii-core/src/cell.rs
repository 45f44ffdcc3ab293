#![forbid(unsafe_code)]

//! Cell types and the effective-value defaulting rule.
//!
//! A cell holds an optional CP437 glyph byte and an optional [`TextAttr`]. A
//! cell with both fields absent is *blank* and is semantically identical to a
//! grid position that was never painted; every consumer must treat the two the
//! same, which is why skip decisions go through [`Cell::is_blank`] rather than
//! comparing against a sentinel.
//!
//! Defaulting is uniform across the whole pipeline:
//!
//! - glyph present, attr absent → attr defaults to `0x07` (white on black);
//! - attr present, glyph absent → glyph defaults to `0x20` (space);
//! - both absent → the cell has no effective value at all.

use crate::attr::TextAttr;

/// `'$'`, the string terminator of the DOS print service (`int 21h`, `ah=09h`).
///
/// Text segments must never contain this byte; a painted `$` always renders
/// through the character-fill path instead.
pub const STRING_TERMINATOR: u8 = 36;

/// Glyph a cell falls back to when only its attribute is painted.
pub const DEFAULT_GLYPH: u8 = 0x20;

/// One grid cell: optional glyph byte plus optional attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// CP437 character code, if a character was painted here.
    pub glyph: Option<u8>,
    /// Color/blink attribute, if one was painted here.
    pub attr: Option<TextAttr>,
}

impl Cell {
    /// The blank cell: nothing painted.
    pub const BLANK: Self = Self {
        glyph: None,
        attr: None,
    };

    /// Cell with both fields set.
    #[inline]
    #[must_use]
    pub const fn new(glyph: u8, attr: TextAttr) -> Self {
        Self {
            glyph: Some(glyph),
            attr: Some(attr),
        }
    }

    /// Cell with only a glyph painted; attribute defaults on use.
    #[inline]
    #[must_use]
    pub const fn from_glyph(glyph: u8) -> Self {
        Self {
            glyph: Some(glyph),
            attr: None,
        }
    }

    /// Cell with only an attribute painted; glyph defaults to space on use.
    #[inline]
    #[must_use]
    pub const fn from_attr(attr: TextAttr) -> Self {
        Self {
            glyph: None,
            attr: Some(attr),
        }
    }

    /// True iff nothing is painted here. Blank cells never start or extend a
    /// segment.
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.glyph.is_none() && self.attr.is_none()
    }

    /// Effective attribute after defaulting, or `None` for a blank cell.
    #[inline]
    #[must_use]
    pub fn effective_attr(self) -> Option<TextAttr> {
        if self.is_blank() {
            None
        } else {
            Some(self.attr.unwrap_or(TextAttr::DEFAULT))
        }
    }

    /// Effective (glyph, attribute) pair after defaulting, or `None` for a
    /// blank cell.
    #[inline]
    #[must_use]
    pub fn effective(self) -> Option<(u8, TextAttr)> {
        if self.is_blank() {
            None
        } else {
            Some((
                self.glyph.unwrap_or(DEFAULT_GLYPH),
                self.attr.unwrap_or(TextAttr::DEFAULT),
            ))
        }
    }
}
