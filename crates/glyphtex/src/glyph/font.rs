//! Built-in 8x8 glyph bitmaps for the preset ramp characters.
//!
//! Each glyph is 8 bytes, one per row, MSB = left-most pixel. Characters
//! without a defined bitmap render as a half-tone fill so the cell still
//! conveys its density.

use image::{Rgba, RgbaImage};

use crate::sample::grid::CellSize;

pub const GLYPH_SIZE: usize = 8;

const DOT: [u8; GLYPH_SIZE] = [
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00000000,
    0b00011000,
    0b00011000,
    0b00000000,
];

const COLON: [u8; GLYPH_SIZE] = [
    0b00000000,
    0b00011000,
    0b00011000,
    0b00000000,
    0b00000000,
    0b00011000,
    0b00011000,
    0b00000000,
];

const DASH: [u8; GLYPH_SIZE] = [
    0b00000000,
    0b00000000,
    0b00000000,
    0b01111110,
    0b01111110,
    0b00000000,
    0b00000000,
    0b00000000,
];

const EQUALS: [u8; GLYPH_SIZE] = [
    0b00000000,
    0b01111110,
    0b01111110,
    0b00000000,
    0b01111110,
    0b01111110,
    0b00000000,
    0b00000000,
];

const PLUS: [u8; GLYPH_SIZE] = [
    0b00000000,
    0b00011000,
    0b00011000,
    0b01111110,
    0b01111110,
    0b00011000,
    0b00011000,
    0b00000000,
];

const ASTERISK: [u8; GLYPH_SIZE] = [
    0b00000000,
    0b01100110,
    0b00111100,
    0b11111111,
    0b00111100,
    0b01100110,
    0b00000000,
    0b00000000,
];

const HASH: [u8; GLYPH_SIZE] = [
    0b00100100,
    0b00100100,
    0b11111111,
    0b00100100,
    0b00100100,
    0b11111111,
    0b00100100,
    0b00100100,
];

const PERCENT: [u8; GLYPH_SIZE] = [
    0b01100010,
    0b01100110,
    0b00001100,
    0b00011000,
    0b00110000,
    0b01100110,
    0b01000110,
    0b00000000,
];

const AT: [u8; GLYPH_SIZE] = [
    0b00111100,
    0b01000010,
    0b10011101,
    0b10100101,
    0b10011110,
    0b10000000,
    0b01000010,
    0b00111100,
];

const SHADE_LIGHT: [u8; GLYPH_SIZE] = [
    0b10001000,
    0b00000000,
    0b00100010,
    0b00000000,
    0b10001000,
    0b00000000,
    0b00100010,
    0b00000000,
];

const SHADE_MEDIUM: [u8; GLYPH_SIZE] = [
    0b10101010,
    0b01010101,
    0b10101010,
    0b01010101,
    0b10101010,
    0b01010101,
    0b10101010,
    0b01010101,
];

const SHADE_DARK: [u8; GLYPH_SIZE] = [
    0b11101110,
    0b10111011,
    0b11101110,
    0b10111011,
    0b11101110,
    0b10111011,
    0b11101110,
    0b10111011,
];

const BLOCK_FULL: [u8; GLYPH_SIZE] = [0b11111111; GLYPH_SIZE];

const BLANK: [u8; GLYPH_SIZE] = [0b00000000; GLYPH_SIZE];

/// Fallback fill for characters without a defined bitmap.
const FALLBACK: [u8; GLYPH_SIZE] = SHADE_MEDIUM;

pub fn bitmap(ch: char) -> Option<&'static [u8; GLYPH_SIZE]> {
    match ch {
        ' ' => Some(&BLANK),
        '.' => Some(&DOT),
        ':' => Some(&COLON),
        '-' => Some(&DASH),
        '=' => Some(&EQUALS),
        '+' => Some(&PLUS),
        '*' => Some(&ASTERISK),
        '#' => Some(&HASH),
        '%' => Some(&PERCENT),
        '@' => Some(&AT),
        '░' => Some(&SHADE_LIGHT),
        '▒' => Some(&SHADE_MEDIUM),
        '▓' => Some(&SHADE_DARK),
        '█' => Some(&BLOCK_FULL),
        _ => None,
    }
}

/// Draws one glyph into the raster at the given pixel offset, scaling the
/// 8x8 bitmap to the cell by nearest sampling. Only set bits take the glyph
/// color; unset bits leave the existing background untouched.
pub fn blit_glyph(
    raster: &mut RgbaImage,
    ch: char,
    x0: u32,
    y0: u32,
    cell: CellSize,
    color: [u8; 3],
) {
    let rows = bitmap(ch).unwrap_or(&FALLBACK);
    let pixel = Rgba([color[0], color[1], color[2], 0xFF]);

    for py in 0..cell.height {
        let sy = (py as usize * GLYPH_SIZE) / cell.height as usize;
        let row = rows[sy];
        if row == 0 {
            continue;
        }
        for px in 0..cell.width {
            let sx = (px as usize * GLYPH_SIZE) / cell.width as usize;
            if row & (0x80 >> sx) != 0 {
                raster.put_pixel(x0 + px, y0 + py, pixel);
            }
        }
    }
}
