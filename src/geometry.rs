// SPDX-License-Identifier: MPL-2.0
//! Integer points and half-open rectangles.
//!
//! A [`Rectangle`] covers every point `p` with `min.x <= p.x < max.x` and
//! `min.y <= p.y < max.y`. Translating a rectangle moves both corners by the
//! same amount, so its width and height never change.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A point in image coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin, (0, 0).
    pub const ZERO: Point = Point { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A half-open rectangle: `min` is inclusive, `max` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
}

impl Rectangle {
    /// Builds `[(x0,y0),(x1,y1))` exactly as given; no normalization.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Builds a rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_size(origin: Point, width: u32, height: u32) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + width as i32, origin.y + height as i32),
        }
    }

    /// Width in pixels; zero for empty or inverted rectangles.
    #[must_use]
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x).max(0) as u32
    }

    /// Height in pixels; zero for empty or inverted rectangles.
    #[must_use]
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y).max(0) as u32
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Moves both corners by `offset`.
    #[must_use]
    pub fn translate(self, offset: Point) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Grows the rectangle by `n` pixels on every side (shrinks for negative `n`).
    #[must_use]
    pub fn expand(self, n: i32) -> Self {
        Self::new(
            self.min.x - n,
            self.min.y - n,
            self.max.x + n,
            self.max.y + n,
        )
    }

    /// Moves both corners by `offset`, or `None` if a corner leaves the `i32` range.
    #[must_use]
    pub fn checked_translate(self, offset: Point) -> Option<Self> {
        Some(Self::new(
            self.min.x.checked_add(offset.x)?,
            self.min.y.checked_add(offset.y)?,
            self.max.x.checked_add(offset.x)?,
            self.max.y.checked_add(offset.y)?,
        ))
    }

    /// Iterates every point of the rectangle in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Rectangle { min, max } = *self;
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point::new(x, y)))
    }
}

impl Add<Point> for Rectangle {
    type Output = Rectangle;

    fn add(self, rhs: Point) -> Rectangle {
        self.translate(rhs)
    }
}

impl Sub<Point> for Rectangle {
    type Output = Rectangle;

    fn sub(self, rhs: Point) -> Rectangle {
        self.translate(-rhs)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.min, self.max)
    }
}
