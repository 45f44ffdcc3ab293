#![forbid(unsafe_code)]

//! TASM code emission.
//!
//! [`generate`] walks the grid's segments in row-major order and builds two
//! streams inside a per-call [`Codegen`]: `db` string-table entries (one per
//! text segment, with monotonically numbered labels) and render instructions
//! (cursor moves, color sets, string prints, character fills). The streams are
//! then assembled around the fixed templates, with the string table spliced
//! into the preamble's `.data` section.
//!
//! All state lives in the builder: two calls on the same snapshot produce
//! byte-identical output, and concurrent calls never share label counters.

use std::fmt::Write;

use memchr::memmem;
use tascii_core::{Grid, TextAttr};

use crate::segment::{Segment, segment_row};
use crate::template::{DATA_MARKER, POSTAMBLE, PREAMBLE};

/// Double every `"` for inclusion in a quoted assembly string literal. The
/// only escape the target format needs.
#[must_use]
pub(crate) fn escape_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Format a byte as a TASM hex operand: `41h`, `07h`, `0B0h`. A leading zero
/// keeps operands starting with `A`-`F` from parsing as identifiers.
#[must_use]
fn hex_operand(byte: u8) -> String {
    if byte >= 0xA0 {
        format!("0{byte:02X}h")
    } else {
        format!("{byte:02X}h")
    }
}

/// Render text-segment glyphs as `db` operands: printable ASCII runs inside
/// double quotes (with `"` doubled), everything else as hex operands, so the
/// source stays plain ASCII while assembling to the exact cell bytes.
#[must_use]
fn db_operands(glyphs: &[u8]) -> String {
    let mut operands = String::new();
    let mut quoted = String::new();
    let flush = |operands: &mut String, quoted: &mut String| {
        if !quoted.is_empty() {
            if !operands.is_empty() {
                operands.push(',');
            }
            operands.push('"');
            operands.push_str(&escape_quotes(quoted));
            operands.push('"');
            quoted.clear();
        }
    };
    for &glyph in glyphs {
        if (0x20..=0x7E).contains(&glyph) {
            quoted.push(glyph as char);
        } else {
            flush(&mut operands, &mut quoted);
            if !operands.is_empty() {
                operands.push(',');
            }
            operands.push_str(&hex_operand(glyph));
        }
    }
    flush(&mut operands, &mut quoted);
    operands
}

/// Per-call emission state: label counter, string table, instruction stream.
///
/// Never outlives one [`generate`] call.
struct Codegen {
    next_label: usize,
    strings: String,
    code: String,
}

impl Codegen {
    fn new() -> Self {
        Self {
            next_label: 0,
            strings: String::new(),
            code: String::new(),
        }
    }

    fn emit(&mut self, segment: &Segment) {
        match segment {
            Segment::Text {
                row,
                col,
                attr,
                glyphs,
            } => self.emit_text(*row, *col, *attr, glyphs),
            Segment::Block {
                row,
                col,
                glyph,
                attr,
                len,
            } => self.emit_block(*row, *col, *glyph, *attr, *len),
        }
    }

    fn emit_text(&mut self, row: usize, col: usize, attr: TextAttr, glyphs: &[u8]) {
        let label = format!("txt_{}_R{row}_C{col}", self.next_label);
        self.next_label += 1;
        // Infallible: Write for String never errors.
        let _ = writeln!(self.strings, "{label} db {},'$'", db_operands(glyphs));
        let _ = writeln!(self.code, "    SetCursor {row}, {col}");
        if attr != TextAttr::DEFAULT {
            let _ = writeln!(self.code, "    SetColor {}", hex_operand(attr.raw()));
        }
        let _ = writeln!(self.code, "    PrintText {label}");
    }

    fn emit_block(&mut self, row: usize, col: usize, glyph: u8, attr: TextAttr, len: usize) {
        let _ = writeln!(self.code, "    SetCursor {row}, {col}");
        let _ = writeln!(
            self.code,
            "    FillChar {}, {}, {len}",
            hex_operand(glyph),
            hex_operand(attr.raw())
        );
    }

    /// Splice the string table in after the last `.data` marker of the
    /// preamble, then append the instruction stream and postamble. A preamble
    /// without the marker (malformed template) degrades to appending the
    /// string table right after it.
    fn assemble(self) -> String {
        let mut out = String::with_capacity(
            PREAMBLE.len() + self.strings.len() + self.code.len() + POSTAMBLE.len(),
        );
        match memmem::rfind(PREAMBLE.as_bytes(), DATA_MARKER.as_bytes()) {
            Some(pos) => {
                let splice = pos + DATA_MARKER.len();
                out.push_str(&PREAMBLE[..splice]);
                out.push_str(&self.strings);
                out.push_str(&PREAMBLE[splice..]);
            }
            None => {
                out.push_str(PREAMBLE);
                out.push_str(&self.strings);
            }
        }
        out.push_str(&self.code);
        out.push_str(POSTAMBLE);
        out
    }
}

/// Generate complete TASM source reproducing `grid` under the DOS text-mode
/// video service. Pure; the grid is read-only for the duration of the call.
#[must_use]
pub fn generate(grid: &Grid) -> String {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("generate", width = grid.width(), height = grid.height());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut codegen = Codegen::new();
    for (row, cells) in grid.rows().enumerate() {
        for segment in segment_row(row, cells) {
            codegen.emit(&segment);
        }
    }
    codegen.assemble()
}
