// SPDX-License-Identifier: MPL-2.0
//! Paletted 8×8 sprites.
//!
//! A [`Sprite8x8`] stores 64 palette indices in row-major order and looks
//! each one up in a [`Palette`] when sampled.

use crate::color::{ColorModel, Rgba};
use crate::geometry::{Point, Rectangle};
use crate::image::Image;

/// Side length of a sprite in pixels.
pub const SPRITE_SIZE: u32 = 8;

/// Number of entries in a [`Palette`].
pub const PALETTE_LEN: usize = 256;

/// A table of colors addressed by an 8-bit index.
///
/// Entries that were never set are transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; PALETTE_LEN],
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: [Rgba::TRANSPARENT; PALETTE_LEN],
        }
    }

    pub fn set_color_rgba(&mut self, index: u8, r: u8, g: u8, b: u8, a: u8) {
        self.colors[usize::from(index)] = Rgba::new(r, g, b, a);
    }

    #[must_use]
    pub fn color(&self, index: u8) -> Rgba {
        self.colors[usize::from(index)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// An 8×8 paletted image whose top-left corner is at `origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite8x8 {
    pub pix: [u8; 64],
    pub palette: Palette,
    pub origin: Point,
    /// Free-form grouping label; not used for sampling.
    pub category: String,
    pub id: u8,
}

impl Sprite8x8 {
    /// Creates a sprite at the origin with an empty category and id 0.
    #[must_use]
    pub fn new(pix: [u8; 64], palette: Palette) -> Self {
        Self {
            pix,
            palette,
            origin: Point::ZERO,
            category: String::new(),
            id: 0,
        }
    }

    /// Returns the palette index at `(x, y)`, or `None` outside the sprite.
    #[must_use]
    pub fn index_at(&self, x: i32, y: i32) -> Option<u8> {
        if !self.bounds().contains(Point::new(x, y)) {
            return None;
        }
        let col = (x - self.origin.x) as usize;
        let row = (y - self.origin.y) as usize;
        Some(self.pix[row * SPRITE_SIZE as usize + col])
    }
}

impl Image for Sprite8x8 {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        self.index_at(x, y)
            .map_or(Rgba::TRANSPARENT, |index| self.palette.color(index))
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::from_size(self.origin, SPRITE_SIZE, SPRITE_SIZE)
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Paletted
    }
}
