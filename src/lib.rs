// SPDX-License-Identifier: MPL-2.0
//! `image_relocate` moves images around coordinate space without copying them.
//!
//! [`relocate::wrap`] takes any [`Image`] and an offset `(dx, dy)` and returns
//! a view whose bounds are shifted by the offset and whose pixels are read
//! from the source at `(x - dx, y - dy)`. Views are images themselves, so
//! they nest, and wrapping with `(-dx, -dy)` restores the original frame.
//!
//! The crate also ships small concrete images ([`Pel`], [`Sprite8x8`],
//! [`RasterImage`]), helpers to render any image into an `image` crate
//! buffer, and the `image-relocate` command-line tool.

#![doc(html_root_url = "https://docs.rs/image_relocate/0.1.0")]

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image;
pub mod pel;
pub mod raster;
pub mod relocate;
pub mod sprite;

pub use color::{ColorModel, Rgba};
pub use geometry::{Point, Rectangle};
pub use image::Image;
pub use pel::Pel;
pub use raster::RasterImage;
pub use relocate::{wrap, Relocated};
pub use sprite::{Palette, Sprite8x8};
