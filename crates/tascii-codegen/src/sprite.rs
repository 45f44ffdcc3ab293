#![forbid(unsafe_code)]

//! Sprite-table emission.
//!
//! The alternate output: instead of render instructions, the grid becomes a
//! letter-coded `DB` lookup table keyed by background color, one letter per
//! cell. Rows are chained with `|` and the table ends with `$`, matching the
//! reader convention of the sprite runtime.

use tascii_core::Grid;

use crate::emitter::escape_quotes;

/// One letter per background palette index: blacK, Blue, Green, Cyan, Red,
/// Magenta, Yellow, White.
pub const BACKGROUND_LETTERS: [char; 8] = ['K', 'B', 'G', 'C', 'R', 'M', 'Y', 'W'];

/// Letter emitted for blank cells and for cells with no painted attribute.
pub const PLACEHOLDER: char = '.';

/// Render the grid as a letter-coded sprite table.
///
/// The first line carries `label`; continuation rows are unlabeled. Every row
/// literal ends in `|` except the last, which ends in `$`. A zero-row grid
/// yields the empty string.
#[must_use]
pub fn generate_sprite_table(grid: &Grid, label: &str) -> String {
    let mut lines = Vec::with_capacity(grid.height());
    let last_row = grid.height().wrapping_sub(1);
    for (row, cells) in grid.rows().enumerate() {
        let mut letters = String::with_capacity(grid.width() + 1);
        for cell in cells {
            match cell.attr {
                Some(attr) => letters.push(BACKGROUND_LETTERS[attr.background() as usize]),
                None => letters.push(PLACEHOLDER),
            }
        }
        letters.push(if row == last_row { '$' } else { '|' });
        let literal = escape_quotes(&letters);
        if row == 0 {
            lines.push(format!("{label}\tDB '{literal}'"));
        } else {
            lines.push(format!("\t\tDB '{literal}'"));
        }
    }
    lines.join("\n")
}
