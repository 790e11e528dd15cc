// SPDX-License-Identifier: MPL-2.0
//! Relocating an image into a shifted coordinate frame.
//!
//! [`wrap`] pairs a source image with an offset `(dx, dy)`. The resulting
//! view reports the source's bounds moved by the offset and answers
//! `color_at(x, y)` with the source's color at `(x - dx, y - dy)`. No pixel
//! data is copied and the source is never modified.
//!
//! Views compose: wrapping a view with `(dx2, dy2)` behaves like wrapping
//! the innermost source once with `(dx + dx2, dy + dy2)`, and wrapping with
//! `(-dx, -dy)` undoes a previous wrap.
//!
//! # Examples
//!
//! ```
//! use image_relocate::{relocate, Image, Pel, Rectangle, Rgba};
//!
//! let pel = Pel::new(10, 20, Rgba::new(57, 181, 74, 255));
//! let moved = relocate::wrap(1, 1, &pel);
//!
//! assert_eq!(moved.bounds(), Rectangle::new(11, 21, 12, 22));
//! assert_eq!(moved.color_at(11, 21), Rgba::new(57, 181, 74, 255));
//! ```

use crate::color::{ColorModel, Rgba};
use crate::geometry::{Point, Rectangle};
use crate::image::Image;

/// Relocates `source` by `(dx, dy)`.
///
/// Pass a reference to keep borrowing the source, or an `Rc`/`Arc` to share
/// it. An offset of `(0, 0)` yields a view that behaves exactly like the
/// source.
#[must_use]
pub fn wrap<I: Image>(dx: i32, dy: i32, source: I) -> Relocated<I> {
    Relocated::new(Point::new(dx, dy), source)
}

/// An image viewed through a translated coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocated<I> {
    source: I,
    offset: Point,
}

impl<I> Relocated<I> {
    #[must_use]
    pub fn new(offset: Point, source: I) -> Self {
        Self { source, offset }
    }

    /// The offset added to source coordinates.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn source(&self) -> &I {
        &self.source
    }

    #[must_use]
    pub fn into_inner(self) -> I {
        self.source
    }
}

impl<I> Relocated<Relocated<I>> {
    /// Collapses two nested views into one with the summed offset.
    #[must_use]
    pub fn flatten(self) -> Relocated<I> {
        let inner = self.source;
        Relocated::new(inner.offset + self.offset, inner.source)
    }
}

impl<I: Image> Image for Relocated<I> {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        self.source.color_at(x - self.offset.x, y - self.offset.y)
    }

    fn bounds(&self) -> Rectangle {
        self.source.bounds().translate(self.offset)
    }

    fn color_model(&self) -> ColorModel {
        self.source.color_model()
    }
}
