// SPDX-License-Identifier: MPL-2.0
//! The image capability set.
//!
//! Anything that can report a color at a point, a bounding rectangle and a
//! color model is an [`Image`]. Views such as
//! [`Relocated`](crate::relocate::Relocated) implement the same trait, so
//! they can be used wherever an image is expected, including as the source
//! of another view.
//!
//! # Out-of-bounds points
//!
//! `color_at` may be called with any coordinates. What it returns outside
//! `bounds()` is up to the implementation; every image in this crate returns
//! [`Rgba::TRANSPARENT`]. Wrappers must forward such queries unchanged.

use crate::color::{ColorModel, Rgba};
use crate::geometry::{Point, Rectangle};
use std::rc::Rc;
use std::sync::Arc;

/// A readable 2D raster addressed by integer coordinates.
pub trait Image {
    /// Returns the color at `(x, y)`.
    fn color_at(&self, x: i32, y: i32) -> Rgba;

    /// Returns the half-open rectangle of valid points.
    fn bounds(&self) -> Rectangle;

    /// Returns the color model of the samples.
    fn color_model(&self) -> ColorModel;

    /// Returns the color at `p`.
    fn color_at_point(&self, p: Point) -> Rgba {
        self.color_at(p.x, p.y)
    }
}

impl<T: Image + ?Sized> Image for &T {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        (**self).color_at(x, y)
    }

    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }
}

impl<T: Image + ?Sized> Image for Box<T> {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        (**self).color_at(x, y)
    }

    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }
}

impl<T: Image + ?Sized> Image for Rc<T> {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        (**self).color_at(x, y)
    }

    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }
}

impl<T: Image + ?Sized> Image for Arc<T> {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        (**self).color_at(x, y)
    }

    fn bounds(&self) -> Rectangle {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Checker;

    impl Image for Checker {
        fn color_at(&self, x: i32, y: i32) -> Rgba {
            if (x + y) % 2 == 0 {
                Rgba::new(255, 255, 255, 255)
            } else {
                Rgba::new(0, 0, 0, 255)
            }
        }

        fn bounds(&self) -> Rectangle {
            Rectangle::new(0, 0, 2, 2)
        }

        fn color_model(&self) -> ColorModel {
            ColorModel::Rgb8
        }
    }

    #[test]
    fn smart_pointers_forward_every_operation() {
        let images: Vec<Box<dyn Image>> = vec![
            Box::new(Checker),
            Box::new(Rc::new(Checker)),
            Box::new(Arc::new(Checker)),
            Box::new(Box::new(Checker)),
        ];
        for image in &images {
            assert_eq!(image.bounds(), Checker.bounds());
            assert_eq!(image.color_model(), ColorModel::Rgb8);
            assert_eq!(image.color_at(1, 0), Checker.color_at(1, 0));
            assert_eq!(image.color_at_point(Point::new(1, 1)), Checker.color_at(1, 1));
        }
    }

    #[test]
    fn trait_objects_are_images() {
        let checker = Checker;
        let dynamic: &dyn Image = &checker;
        assert_eq!((&dynamic).bounds(), Rectangle::new(0, 0, 2, 2));
    }
}
