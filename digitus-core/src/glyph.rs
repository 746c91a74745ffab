//! Digit glyphs for the 5x5 matrix
//!
//! Each glyph is a 25-bit mask in strip order: bit `i` lights the LED at
//! position `i` along the data line. Rows below are listed the same way,
//! first row first, so the table reads exactly as the wiring sees it.

use crate::digit::Digit;

/// Matrix columns
pub const MATRIX_WIDTH: usize = 5;

/// Matrix rows
pub const MATRIX_HEIGHT: usize = 5;

/// LEDs on the strip, one word per cell per frame
pub const MATRIX_CELLS: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Binary pixel pattern over the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphMask(u32);

impl GlyphMask {
    /// Build a mask from rows in strip order
    const fn from_rows(rows: [[u8; MATRIX_WIDTH]; MATRIX_HEIGHT]) -> Self {
        let mut bits = 0u32;
        let mut row = 0;
        while row < MATRIX_HEIGHT {
            let mut col = 0;
            while col < MATRIX_WIDTH {
                if rows[row][col] != 0 {
                    bits |= 1 << (row * MATRIX_WIDTH + col);
                }
                col += 1;
            }
            row += 1;
        }
        Self(bits)
    }

    /// Raw mask, bit `i` is cell `i`
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether the cell at strip position `cell` is lit
    ///
    /// Positions past the end of the matrix are never lit.
    pub const fn is_lit(self, cell: usize) -> bool {
        cell < MATRIX_CELLS && self.0 & (1 << cell) != 0
    }

    /// Number of lit cells
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate cells in strip order
    pub fn cells(self) -> impl Iterator<Item = bool> {
        (0..MATRIX_CELLS).map(move |cell| self.is_lit(cell))
    }
}

#[rustfmt::skip]
const GLYPHS: [GlyphMask; Digit::COUNT as usize] = [
    // 0
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 1
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 1, 0, 0],
    ]),
    // 2
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 3
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 4
    GlyphMask::from_rows([
        [0, 1, 0, 0, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0],
    ]),
    // 5
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 6
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 7
    GlyphMask::from_rows([
        [0, 0, 0, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 8
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
    ]),
    // 9
    GlyphMask::from_rows([
        [0, 1, 1, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
    ]),
];

/// Glyph for a digit
pub const fn mask_for(digit: Digit) -> GlyphMask {
    GLYPHS[digit.value() as usize]
}
