#![forbid(unsafe_code)]

//! Packed text attribute and the fixed CGA palettes.
//!
//! The attribute is the single byte the DOS video service consumes per cell:
//!
//! ```text
//! [7: blink][6-4: background index 0-7][3-0: foreground index 0-15]
//! ```
//!
//! Encoding and decoding are mutual inverses over the whole domain, and decoding
//! is total: every `u8` is a legal attribute because the mask widths guarantee
//! in-range palette indices.

/// Packed blink + background + foreground attribute byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TextAttr(u8);

impl TextAttr {
    /// Blink flag bit.
    const BLINK: u8 = 0x80;

    /// Background field mask (bits 6-4).
    const BG_MASK: u8 = 0x70;

    /// Foreground field mask (bits 3-0).
    const FG_MASK: u8 = 0x0F;

    /// White on black, non-blinking. The attribute a bare character cell gets.
    pub const DEFAULT: Self = Self(0x07);

    /// Pack an attribute from its fields.
    ///
    /// Inputs are assumed pre-validated by the caller (the editor clamps palette
    /// picks to table bounds); out-of-range indices are a caller bug.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `background > 7` or `foreground > 15`.
    #[inline]
    #[must_use]
    pub const fn new(background: u8, foreground: u8, blink: bool) -> Self {
        debug_assert!(background <= 7, "background index out of range");
        debug_assert!(foreground <= 15, "foreground index out of range");
        let blink_bit = if blink { Self::BLINK } else { 0 };
        Self(blink_bit | ((background << 4) & Self::BG_MASK) | (foreground & Self::FG_MASK))
    }

    /// Reinterpret a raw byte as an attribute. Total; never fails.
    #[inline]
    #[must_use]
    pub const fn from_raw(byte: u8) -> Self {
        Self(byte)
    }

    /// The packed byte value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Blink flag (bit 7).
    #[inline]
    #[must_use]
    pub const fn blink(self) -> bool {
        self.0 & Self::BLINK != 0
    }

    /// Background palette index, always 0-7.
    #[inline]
    #[must_use]
    pub const fn background(self) -> u8 {
        (self.0 & Self::BG_MASK) >> 4
    }

    /// Foreground palette index, always 0-15.
    #[inline]
    #[must_use]
    pub const fn foreground(self) -> u8 {
        self.0 & Self::FG_MASK
    }
}

impl core::fmt::Debug for TextAttr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextAttr")
            .field("background", &self.background())
            .field("foreground", &self.foreground())
            .field("blink", &self.blink())
            .finish()
    }
}

/// RGB color swatch (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The 16 CGA foreground colors, indexed by the attribute's foreground field.
///
/// Consumers must display exactly these colors at exactly these indices for
/// round-tripping through the attribute byte to be meaningful.
pub const FOREGROUND_PALETTE: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0x00, 0x00, 0xAA), // blue
    Rgb::new(0x00, 0xAA, 0x00), // green
    Rgb::new(0x00, 0xAA, 0xAA), // cyan
    Rgb::new(0xAA, 0x00, 0x00), // red
    Rgb::new(0xAA, 0x00, 0xAA), // magenta
    Rgb::new(0xAA, 0x55, 0x00), // brown
    Rgb::new(0xAA, 0xAA, 0xAA), // light gray
    Rgb::new(0x55, 0x55, 0x55), // dark gray
    Rgb::new(0x55, 0x55, 0xFF), // light blue
    Rgb::new(0x55, 0xFF, 0x55), // light green
    Rgb::new(0x55, 0xFF, 0xFF), // light cyan
    Rgb::new(0xFF, 0x55, 0x55), // light red
    Rgb::new(0xFF, 0x55, 0xFF), // light magenta
    Rgb::new(0xFF, 0xFF, 0x55), // yellow
    Rgb::new(0xFF, 0xFF, 0xFF), // white
];

/// The 8 CGA background colors, indexed by the attribute's background field.
pub const BACKGROUND_PALETTE: [Rgb; 8] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0x00, 0x00, 0xAA), // blue
    Rgb::new(0x00, 0xAA, 0x00), // green
    Rgb::new(0x00, 0xAA, 0xAA), // cyan
    Rgb::new(0xAA, 0x00, 0x00), // red
    Rgb::new(0xAA, 0x00, 0xAA), // magenta
    Rgb::new(0xAA, 0x55, 0x00), // brown
    Rgb::new(0xAA, 0xAA, 0xAA), // light gray
];
