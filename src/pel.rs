// SPDX-License-Identifier: MPL-2.0
//! A single-pixel image.

use crate::color::{ColorModel, Rgba};
use crate::geometry::{Point, Rectangle};
use crate::image::Image;

/// One pixel ("pel") at `(x, y)` with a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pel {
    pub x: i32,
    pub y: i32,
    pub color: Rgba,
}

impl Pel {
    #[must_use]
    pub const fn new(x: i32, y: i32, color: Rgba) -> Self {
        Self { x, y, color }
    }
}

impl Image for Pel {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        if x == self.x && y == self.y {
            self.color
        } else {
            Rgba::TRANSPARENT
        }
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::from_size(Point::new(self.x, self.y), 1, 1)
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba8
    }
}
