#![forbid(unsafe_code)]

//! CP437 (IBM PC code page 437) to Unicode display table.
//!
//! Display-only: the editor UI uses this to draw a cell's glyph byte, and the
//! code generators never consult it (generated assembly carries the raw byte
//! values). The 0x00-0x1F range maps to the classic pictographs text art leans
//! on rather than to control characters; 0x00 and 0xFF display as blanks.

/// CP437 pictographs for the 0x01-0x1F control range (0x00 displays blank).
const CONTROL_PICTOGRAPHS: [char; 32] = [
    ' ', '\u{263A}', '\u{263B}', '\u{2665}', '\u{2666}', '\u{2663}', '\u{2660}', '\u{2022}',
    '\u{25D8}', '\u{25CB}', '\u{25D9}', '\u{2642}', '\u{2640}', '\u{266A}', '\u{266B}', '\u{263C}',
    '\u{25BA}', '\u{25C4}', '\u{2195}', '\u{203C}', '\u{00B6}', '\u{00A7}', '\u{25AC}', '\u{21A8}',
    '\u{2191}', '\u{2193}', '\u{2192}', '\u{2190}', '\u{221F}', '\u{2194}', '\u{25B2}', '\u{25BC}',
];

/// The extended half of the code page (0x80-0xFF): accented Latin, box drawing,
/// shade blocks, Greek, and math symbols.
const EXTENDED: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', //
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', //
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', //
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', //
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', //
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', //
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', //
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', ' ',
];

/// Full 256-entry CP437 glyph table, indexed by the raw cell byte.
pub const CP437_TO_CHAR: [char; 256] = build_table();

const fn build_table() -> [char; 256] {
    let mut table = [' '; 256];
    let mut i = 0;
    while i < 32 {
        table[i] = CONTROL_PICTOGRAPHS[i];
        i += 1;
    }
    let mut i = 0x20;
    while i < 0x7F {
        table[i] = i as u8 as char;
        i += 1;
    }
    table[0x7F] = '\u{2302}'; // ⌂
    let mut i = 0;
    while i < 128 {
        table[0x80 + i] = EXTENDED[i];
        i += 1;
    }
    table
}

/// Displayable character for a cell byte.
#[inline]
#[must_use]
pub const fn glyph_char(byte: u8) -> char {
    CP437_TO_CHAR[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_to_itself() {
        for byte in 0x20..0x7Fu8 {
            assert_eq!(glyph_char(byte), byte as char);
        }
    }

    #[test]
    fn known_art_glyphs() {
        assert_eq!(glyph_char(0x01), '☺');
        assert_eq!(glyph_char(0x03), '♥');
        assert_eq!(glyph_char(0xB0), '░');
        assert_eq!(glyph_char(0xB2), '▓');
        assert_eq!(glyph_char(0xCD), '═');
        assert_eq!(glyph_char(0xDB), '█');
        assert_eq!(glyph_char(0xE3), 'π');
        assert_eq!(glyph_char(0xFE), '■');
    }

    #[test]
    fn blanks_display_as_space() {
        assert_eq!(glyph_char(0x00), ' ');
        assert_eq!(glyph_char(0xFF), ' ');
    }

    #[test]
    fn no_entry_is_a_control_character() {
        for byte in 0..=255u8 {
            assert!(!glyph_char(byte).is_control(), "byte {byte:#04x}");
        }
    }
}
