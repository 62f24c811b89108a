//! Five-by-five pixel lettering for headlines, packed two pixel rows per
//! terminal line with half block glyphs.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const GLYPH_HEIGHT: usize = 5;
const GLYPH_WIDTH: usize = 5;
const SPACING: usize = 1;

/// One bitmask per pixel row; bit 4 is the leftmost column.
type Glyph = [u8; GLYPH_HEIGHT];

const UNKNOWN: Glyph = [0b01110, 0b10001, 0b00110, 0b00000, 0b00100];

static GLYPHS: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    HashMap::from([
        ('A', [0b01110, 0b10001, 0b11111, 0b10001, 0b10001]),
        ('B', [0b11110, 0b10001, 0b11110, 0b10001, 0b11110]),
        ('C', [0b01111, 0b10000, 0b10000, 0b10000, 0b01111]),
        ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b11110]),
        ('E', [0b11111, 0b10000, 0b11110, 0b10000, 0b11111]),
        ('F', [0b11111, 0b10000, 0b11110, 0b10000, 0b10000]),
        ('G', [0b01111, 0b10000, 0b10011, 0b10001, 0b01111]),
        ('H', [0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
        ('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b11111]),
        ('J', [0b00111, 0b00010, 0b00010, 0b10010, 0b01100]),
        ('K', [0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
        ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        ('M', [0b10001, 0b11011, 0b10101, 0b10001, 0b10001]),
        ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001]),
        ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
        ('P', [0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
        ('Q', [0b01110, 0b10001, 0b10101, 0b10010, 0b01101]),
        ('R', [0b11110, 0b10001, 0b11110, 0b10100, 0b10010]),
        ('S', [0b01111, 0b10000, 0b01110, 0b00001, 0b11110]),
        ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100]),
        ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        ('V', [0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        ('W', [0b10001, 0b10001, 0b10101, 0b11011, 0b10001]),
        ('X', [0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
        ('Y', [0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
        ('Z', [0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),
        ('0', [0b01110, 0b10011, 0b10101, 0b11001, 0b01110]),
        ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b01110]),
        ('2', [0b11110, 0b00001, 0b01110, 0b10000, 0b11111]),
        ('3', [0b11110, 0b00001, 0b00110, 0b00001, 0b11110]),
        ('4', [0b10010, 0b10010, 0b11111, 0b00010, 0b00010]),
        ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b11110]),
        ('6', [0b01110, 0b10000, 0b11110, 0b10001, 0b01110]),
        ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b00100]),
        ('8', [0b01110, 0b10001, 0b01110, 0b10001, 0b01110]),
        ('9', [0b01110, 0b10001, 0b01111, 0b00001, 0b01110]),
        (' ', [0; GLYPH_HEIGHT]),
        ('!', [0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
        ('-', [0b00000, 0b00000, 0b01110, 0b00000, 0b00000]),
    ])
});

/// Terminal columns needed to render `text`.
pub fn width(text: &str) -> usize {
    let count = text.chars().count();
    count * GLYPH_WIDTH + count.saturating_sub(1) * SPACING
}

/// Render `text` as terminal lines (three lines for five pixel rows).
pub fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<&Glyph> = text
        .chars()
        .map(|ch| GLYPHS.get(&ch.to_ascii_uppercase()).unwrap_or(&UNKNOWN))
        .collect();

    (0..GLYPH_HEIGHT)
        .step_by(2)
        .map(|top| {
            let mut line = String::with_capacity(width(text) * 3);
            for (index, glyph) in glyphs.iter().enumerate() {
                if index > 0 {
                    line.push_str(&" ".repeat(SPACING));
                }
                for col in 0..GLYPH_WIDTH {
                    let upper = lit(glyph, top, col);
                    let lower = top + 1 < GLYPH_HEIGHT && lit(glyph, top + 1, col);
                    line.push(match (upper, lower) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    });
                }
            }
            line
        })
        .collect()
}

fn lit(glyph: &Glyph, row: usize, col: usize) -> bool {
    glyph[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}
