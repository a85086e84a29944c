use core::fmt;
use core::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("`{field}` must be positive and at most a quarter of f32::MAX, got {value}")]
    InvalidDimension { field: &'static str, value: f32 },
    #[error("unknown shape designator `{0}`")]
    UnknownDesignator(String),
}

// Widths are derived up to `4 * value` (see `width_x2`), so that must stay finite too.
fn dimension(field: &'static str, value: f32) -> Result<f32, ShapeError> {
    if value > 0.0 && (4.0 * value).is_finite() {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { field, value })
    }
}

/// The discriminant of a [`Shape`], without any of its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeDesignator {
    Rectangle,
    Circle,
}

impl ShapeDesignator {
    /// Every designator, in declaration order.
    pub const ALL: [ShapeDesignator; 2] = [ShapeDesignator::Rectangle, ShapeDesignator::Circle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeDesignator::Rectangle => "Rectangle",
            ShapeDesignator::Circle => "Circle",
        }
    }
}

impl fmt::Display for ShapeDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeDesignator {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ShapeDesignator::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShapeError::UnknownDesignator(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangle")]
pub struct Rectangle {
    half_width: f32,
    half_height: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRectangle {
    half_width: f32,
    half_height: f32,
}

impl TryFrom<RawRectangle> for Rectangle {
    type Error = ShapeError;

    fn try_from(raw: RawRectangle) -> Result<Self, Self::Error> {
        Rectangle::new(raw.half_width, raw.half_height)
    }
}

impl Rectangle {
    pub fn new(half_width: f32, half_height: f32) -> Result<Self, ShapeError> {
        Ok(Self {
            half_width: dimension("half_width", half_width)?,
            half_height: dimension("half_height", half_height)?,
        })
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    #[inline]
    pub fn width(&self) -> f32 {
        2.0 * self.half_width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        2.0 * self.half_height
    }

    /// Full extents, `(width, height)`.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height) * 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    radius: f32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCircle {
    radius: f32,
}

impl TryFrom<RawCircle> for Circle {
    type Error = ShapeError;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Circle::new(raw.radius)
    }
}

impl Circle {
    pub fn new(radius: f32) -> Result<Self, ShapeError> {
        Ok(Self {
            radius: dimension("radius", radius)?,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }
}

/// A closed set of shapes.
///
/// Each variant owns exactly the fields it needs, so a circle can never carry a
/// half width and a rectangle can never carry a radius. Adding a variant here
/// breaks every `match` over `Shape` until it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "designator")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn rectangle(half_width: f32, half_height: f32) -> Result<Self, ShapeError> {
        Rectangle::new(half_width, half_height).map(Shape::Rectangle)
    }

    pub fn circle(radius: f32) -> Result<Self, ShapeError> {
        Circle::new(radius).map(Shape::Circle)
    }

    pub fn designator(&self) -> ShapeDesignator {
        match self {
            Shape::Rectangle(_) => ShapeDesignator::Rectangle,
            Shape::Circle(_) => ShapeDesignator::Circle,
        }
    }

    /// Horizontal extent of the shape. For a circle this is its diameter.
    pub fn width(&self) -> f32 {
        match self {
            Shape::Rectangle(r) => r.width(),
            Shape::Circle(c) => c.diameter(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

/// Twice the width, using only the capability every shape shares.
pub fn width_x2(shape: &Shape) -> f32 {
    shape.width() * 2.0
}
