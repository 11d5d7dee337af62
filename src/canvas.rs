//! The output image: a grid of colors with a TGA serializer.

use std::io::{self, Write};

use crate::color::Color;
use crate::grid::Grid;

/// A 2D image is just a grid of colors.
pub type Canvas = Grid<Color>;

impl Grid<Color> {
    /// Copies `src` into this canvas with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the destination are dropped. Used to compose
    /// independently rendered views into one larger image.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        for sy in 0..src.height() {
            for sx in 0..src.width() {
                self.set(x + sx, y + sy, *src.at(sx, sy));
            }
        }
    }

    /// Serializes the canvas as an uncompressed true-color TGA.
    ///
    /// Layout: no id field, no color map, image type 2, 32 bits per pixel,
    /// descriptor 0, pixels top-to-bottom as (B, G, R, A) bytes. Channels are
    /// clamped to [0, 1] here and nowhere earlier; alpha is always 255.
    pub fn write_tga<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&[0])?; // id length
        out.write_all(&[0])?; // colormap type
        out.write_all(&[2])?; // uncompressed true-color
        out.write_all(&[0, 0, 0, 0, 24])?; // colormap info, unused

        out.write_all(&0u16.to_le_bytes())?; // x origin
        out.write_all(&0u16.to_le_bytes())?; // y origin
        out.write_all(&(self.width() as u16).to_le_bytes())?;
        out.write_all(&(self.height() as u16).to_le_bytes())?;
        out.write_all(&[32])?; // bits per pixel
        out.write_all(&[0])?; // descriptor

        for y in 0..self.height() {
            for x in 0..self.width() {
                let c = self.at(x, y).clamp();
                let pixel = [
                    (c.b * 255.0) as u8,
                    (c.g * 255.0) as u8,
                    (c.r * 255.0) as u8,
                    255,
                ];
                out.write_all(&pixel)?;
            }
        }

        Ok(())
    }
}
