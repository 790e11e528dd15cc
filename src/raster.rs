// SPDX-License-Identifier: MPL-2.0
//! Bridging between [`Image`] and pixel buffers from the `image` crate.
//!
//! [`RasterImage`] turns a decoded buffer into an [`Image`] placed anywhere
//! in coordinate space. The rendering functions go the other way: they
//! sample any [`Image`] (relocated views included) into an `RgbaImage`
//! whose top-left pixel corresponds to a chosen point.

use crate::color::{ColorModel, Rgba};
use crate::error::Result;
use crate::geometry::{Point, Rectangle};
use crate::image::Image;
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Prefix of every string produced by [`image_string`].
pub const IMAGE_STRING_PREFIX: &str = "IMAGE:";

/// A decoded RGBA buffer exposed as an [`Image`].
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    buffer: RgbaImage,
    origin: Point,
    model: ColorModel,
}

impl RasterImage {
    /// Wraps `buffer` with its top-left pixel at (0, 0).
    #[must_use]
    pub fn new(buffer: RgbaImage) -> Self {
        Self {
            buffer,
            origin: Point::ZERO,
            model: ColorModel::Rgba8,
        }
    }

    /// Converts `image` to RGBA, remembering its original color model.
    #[must_use]
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let model = ColorModel::from(image.color());
        Self {
            buffer: image.into_rgba8(),
            origin: Point::ZERO,
            model,
        }
    }

    /// Places the top-left pixel at `origin` instead of (0, 0).
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }
}

impl From<DynamicImage> for RasterImage {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}

impl From<RgbaImage> for RasterImage {
    fn from(buffer: RgbaImage) -> Self {
        Self::new(buffer)
    }
}

impl Image for RasterImage {
    fn color_at(&self, x: i32, y: i32) -> Rgba {
        let local = Point::new(x, y) - self.origin;
        if local.x < 0 || local.y < 0 {
            return Rgba::TRANSPARENT;
        }
        self.buffer
            .get_pixel_checked(local.x as u32, local.y as u32)
            .map_or(Rgba::TRANSPARENT, |pixel| Rgba::from(*pixel))
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::from_size(self.origin, self.buffer.width(), self.buffer.height())
    }

    fn color_model(&self) -> ColorModel {
        self.model
    }
}

/// Samples `canvas` from `image` into a new buffer.
///
/// Buffer pixel (0, 0) corresponds to `canvas.min`. Points of the canvas
/// outside the image's bounds are filled with `background`.
pub fn render_onto<I: Image + ?Sized>(image: &I, canvas: Rectangle, background: Rgba) -> RgbaImage {
    let bounds = image.bounds();
    let mut buffer = RgbaImage::new(canvas.width(), canvas.height());
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        let p = canvas.min + Point::new(x as i32, y as i32);
        let color = if bounds.contains(p) {
            image.color_at_point(p)
        } else {
            background
        };
        *pixel = color.into();
    }
    tracing::debug!(%bounds, %canvas, "rendered image onto canvas");
    buffer
}

/// Samples exactly the image's bounds into a new buffer.
pub fn to_rgba_image<I: Image + ?Sized>(image: &I) -> RgbaImage {
    render_onto(image, image.bounds(), Rgba::TRANSPARENT)
}

/// A canvas anchored at (0, 0) that reaches the bottom-right corner of `bounds`.
///
/// Anything placed at negative coordinates falls outside it.
#[must_use]
pub fn origin_canvas(bounds: Rectangle) -> Rectangle {
    Rectangle::new(0, 0, bounds.max.x.max(0), bounds.max.y.max(0))
}

/// Encodes the image's bounds as PNG.
///
/// PNG has no notion of origin, so an image and any relocation of it
/// encode to the same bytes.
pub fn encode_png<I: Image + ?Sized>(image: &I) -> Result<Vec<u8>> {
    let buffer = to_rgba_image(image);
    let mut bytes = Vec::new();
    buffer.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Writes an already rendered buffer to `path` as PNG.
pub fn save_buffer(buffer: &RgbaImage, path: &Path) -> Result<()> {
    buffer.save_with_format(path, ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), "saved png");
    Ok(())
}

/// Renders the image's bounds and writes them to `path` as PNG.
pub fn save_png<I: Image + ?Sized>(image: &I, path: &Path) -> Result<()> {
    save_buffer(&to_rgba_image(image), path)
}

/// Returns a compact, comparable description of the image's pixels.
///
/// The string is [`IMAGE_STRING_PREFIX`] followed by the BLAKE3 digest of
/// the PNG encoding, so it ignores where the image sits in coordinate space.
pub fn image_string<I: Image + ?Sized>(image: &I) -> Result<String> {
    let png = encode_png(image)?;
    Ok(format!(
        "{IMAGE_STRING_PREFIX}{}",
        blake3::hash(&png).to_hex()
    ))
}

/// Opens and decodes an image file.
pub fn load(path: &Path) -> Result<RasterImage> {
    let image = image_rs::open(path)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "loaded image"
    );
    Ok(RasterImage::from_dynamic(image))
}

/// Decodes an in-memory encoded image.
pub fn load_from_memory(bytes: &[u8]) -> Result<RasterImage> {
    Ok(RasterImage::from_dynamic(image_rs::load_from_memory(bytes)?))
}
