//! Board renderer: turns a layout into a PNG image.
//!
//! Pure function of the layout and the configured cell size. Letters are
//! drawn from a built-in 5x7 glyph table scaled to the cell, so the output
//! bytes are identical for identical layouts.

use crate::config::BoardConfig;
use crate::error::AppError;
use crate::models::Layout;
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use std::io::Cursor;

const BOARD_BG: Rgb<u8> = Rgb([0x0e, 0x55, 0x44]);
const GRID_LINE: Rgb<u8> = Rgb([0x0a, 0x3d, 0x31]);
const TILE_BG: Rgb<u8> = Rgb([0xf0, 0xe2, 0xc0]);
const TILE_EDGE: Rgb<u8> = Rgb([0xc9, 0xb2, 0x82]);
const LETTER_INK: Rgb<u8> = Rgb([0x3a, 0x2e, 0x1e]);

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// 5x7 glyphs for A-Z, one row per byte, bit 4 = leftmost column.
const GLYPHS: [[u8; 7]; 26] = [
    [0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // A
    [0x1e, 0x11, 0x11, 0x1e, 0x11, 0x11, 0x1e], // B
    [0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e], // C
    [0x1c, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1c], // D
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x1f], // E
    [0x1f, 0x10, 0x10, 0x1e, 0x10, 0x10, 0x10], // F
    [0x0e, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0f], // G
    [0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11], // H
    [0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0c], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f], // L
    [0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // O
    [0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10], // P
    [0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d], // Q
    [0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11], // R
    [0x0f, 0x10, 0x10, 0x0e, 0x01, 0x01, 0x1e], // S
    [0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0a, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0a], // W
    [0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11], // X
    [0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f], // Z
];

fn glyph(letter: char) -> Option<&'static [u8; 7]> {
    if letter.is_ascii_uppercase() {
        Some(&GLYPHS[(letter as u8 - b'A') as usize])
    } else {
        None
    }
}

pub struct BoardRenderer {
    cell_size: u32,
}

impl BoardRenderer {
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            cell_size: board.cell_size,
        }
    }

    /// Render `layout` as a PNG: board background with grid lines, one tile
    /// per occupied cell, the letter centered on the tile.
    pub fn render_png(&self, layout: &Layout) -> Result<Vec<u8>, AppError> {
        let grid = &layout.grid;
        let cell = self.cell_size;
        let width = grid.cols() as u32 * cell + 1;
        let height = grid.rows() as u32 * cell + 1;

        let mut img: RgbImage = ImageBuffer::from_pixel(width, height, BOARD_BG);

        for row in 0..=grid.rows() as u32 {
            fill_rect(&mut img, 0, row * cell, width, 1, GRID_LINE);
        }
        for col in 0..=grid.cols() as u32 {
            fill_rect(&mut img, col * cell, 0, 1, height, GRID_LINE);
        }

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if let Some(c) = grid.get(row, col) {
                    self.draw_tile(&mut img, row as u32, col as u32, c.letter);
                }
            }
        }

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut buffer, image::ImageOutputFormat::Png)?;
        Ok(buffer.into_inner())
    }

    fn draw_tile(&self, img: &mut RgbImage, row: u32, col: u32, letter: char) {
        let cell = self.cell_size;
        let x0 = col * cell + 1;
        let y0 = row * cell + 1;
        let inner = cell.saturating_sub(1);

        fill_rect(img, x0, y0, inner, inner, TILE_EDGE);
        if inner > 2 {
            fill_rect(img, x0 + 1, y0 + 1, inner - 2, inner - 2, TILE_BG);
        }

        let Some(rows) = glyph(letter) else {
            return;
        };

        let scale = (cell / 8).max(1);
        let glyph_w = GLYPH_WIDTH * scale;
        let glyph_h = GLYPH_HEIGHT * scale;
        let gx = x0 + inner.saturating_sub(glyph_w) / 2;
        let gy = y0 + inner.saturating_sub(glyph_h) / 2;

        for (gr, bits) in rows.iter().enumerate() {
            for gc in 0..GLYPH_WIDTH {
                if bits & (0x10 >> gc) != 0 {
                    fill_rect(
                        img,
                        gx + gc * scale,
                        gy + gr as u32 * scale,
                        scale,
                        scale,
                        LETTER_INK,
                    );
                }
            }
        }
    }
}

/// Fill a rectangle, clipped to the image bounds.
fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}
