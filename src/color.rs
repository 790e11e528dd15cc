// SPDX-License-Identifier: MPL-2.0
//! Colors and color-model descriptors.

use image_rs::ColorType;

/// A non-premultiplied 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black. Returned by the images in this crate for
    /// points outside their bounds.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

impl From<image_rs::Rgba<u8>> for Rgba {
    fn from(pixel: image_rs::Rgba<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<Rgba> for image_rs::Rgba<u8> {
    fn from(color: Rgba) -> Self {
        image_rs::Rgba(color.to_array())
    }
}

/// Describes how an image encodes its color samples.
///
/// Relocating an image never changes its color model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorModel {
    #[default]
    Rgba8,
    Rgb8,
    Luma8,
    LumaA8,
    /// Indexed colors looked up in a palette.
    Paletted,
}

impl ColorModel {
    /// Converts `color` to the nearest color this model can represent.
    #[must_use]
    pub fn convert(self, color: Rgba) -> Rgba {
        match self {
            ColorModel::Rgba8 | ColorModel::Paletted => color,
            ColorModel::Rgb8 => Rgba { a: 255, ..color },
            ColorModel::Luma8 => {
                let l = luma(color);
                Rgba::new(l, l, l, 255)
            }
            ColorModel::LumaA8 => {
                let l = luma(color);
                Rgba::new(l, l, l, color.a)
            }
        }
    }
}

impl From<ColorType> for ColorModel {
    fn from(color_type: ColorType) -> Self {
        match color_type {
            ColorType::L8 | ColorType::L16 => ColorModel::Luma8,
            ColorType::La8 | ColorType::La16 => ColorModel::LumaA8,
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorModel::Rgb8,
            _ => ColorModel::Rgba8,
        }
    }
}

// Rec. 601 weights in 16.16 fixed point.
fn luma(color: Rgba) -> u8 {
    let y = 19595 * u32::from(color.r) + 38470 * u32::from(color.g) + 7471 * u32::from(color.b);
    ((y + (1 << 15)) >> 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_model_is_identity() {
        let c = Rgba::new(57, 181, 74, 10);
        assert_eq!(ColorModel::Rgba8.convert(c), c);
        assert_eq!(ColorModel::Paletted.convert(c), c);
    }

    #[test]
    fn rgb_model_drops_alpha() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(ColorModel::Rgb8.convert(c), Rgba::new(1, 2, 3, 255));
    }

    #[test]
    fn luma_of_white_and_black() {
        assert_eq!(
            ColorModel::Luma8.convert(Rgba::new(255, 255, 255, 0)),
            Rgba::new(255, 255, 255, 255)
        );
        assert_eq!(
            ColorModel::LumaA8.convert(Rgba::new(0, 0, 0, 7)),
            Rgba::new(0, 0, 0, 7)
        );
    }

    #[test]
    fn color_type_mapping() {
        assert_eq!(ColorModel::from(ColorType::L8), ColorModel::Luma8);
        assert_eq!(ColorModel::from(ColorType::Rgb8), ColorModel::Rgb8);
        assert_eq!(ColorModel::from(ColorType::Rgba16), ColorModel::Rgba8);
    }

    #[test]
    fn converts_to_and_from_image_pixels() {
        let c = Rgba::new(250, 251, 252, 255);
        let px: image_rs::Rgba<u8> = c.into();
        assert_eq!(Rgba::from(px), c);
    }
}
