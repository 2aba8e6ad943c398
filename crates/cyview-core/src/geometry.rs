//! Geometric primitives for canvas projection.
//!
//! This module provides the geometric types used to turn layout coordinates
//! into drawable primitives.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by minimum and maximum coordinates
//! - [`Transform`] - The pure layout-to-surface coordinate mapping
//! - [`octagon_points`] - The regular octagon inscribed in a box
//!
//! # Coordinate System
//!
//! Surface coordinates follow SVG and most windowing toolkits:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```

use serde::Deserialize;

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use cyview_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean length of the point seen as a vector
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f32 {
        other.sub_point(self).hypot()
    }

    /// Distance from this point to the segment `a`..`b`.
    pub fn distance_to_segment(self, a: Point, b: Point) -> f32 {
        let ab = b.sub_point(a);
        let len_sq = ab.x.mul_add(ab.x, ab.y * ab.y);
        if len_sq < f32::EPSILON {
            return self.distance(a);
        }
        let ap = self.sub_point(a);
        let t = (ap.x.mul_add(ab.x, ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
        let closest = Point::new(ab.x.mul_add(t, a.x), ab.y.mul_add(t, a.y));
        self.distance(closest)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Converts a point and size into a bounds rectangle centered on the point
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates the bounds spanned by two opposite corners, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyview_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new_from_corners(Point::new(10.0, 40.0), Point::new(30.0, 0.0));
    /// assert_eq!(bounds.min_x(), 10.0);
    /// assert_eq!(bounds.min_y(), 0.0);
    /// assert_eq!(bounds.width(), 20.0);
    /// assert_eq!(bounds.height(), 40.0);
    /// ```
    pub fn new_from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Smallest bounds containing every point, or `None` for no points.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let start = Self::new_from_corners(*first, *first);
        Some(rest.iter().fold(start, |acc, p| {
            acc.merge(&Self::new_from_corners(*p, *p))
        }))
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the bottom-right corner as a Point
    pub fn max_point(self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Merges two bounds into the smallest bounds containing both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Shrinks the bounds by `gap` on every side.
    ///
    /// A negative gap grows the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cyview_core::geometry::{Bounds, Point};
    /// let outer = Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(40.0, 20.0));
    /// let inner = outer.inset(4.0);
    /// assert_eq!(inner.min_point(), Point::new(4.0, 4.0));
    /// assert_eq!(inner.max_point(), Point::new(36.0, 16.0));
    /// ```
    pub fn inset(&self, gap: f32) -> Self {
        Self {
            min_x: self.min_x + gap,
            min_y: self.min_y + gap,
            max_x: self.max_x - gap,
            max_y: self.max_y - gap,
        }
    }

    /// Returns true if the point lies inside the bounds or on its border.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// Maps layout-engine coordinates to surface coordinates.
///
/// The mapping is `p * scale + offset`, applied independently to each axis.
/// [`Transform::default`] is the identity.
///
/// # Examples
///
/// ```
/// # use cyview_core::geometry::{Point, Transform};
/// let identity = Transform::default();
/// assert_eq!(identity.apply(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
///
/// let zoomed = Transform::new(2.0, Point::new(10.0, 0.0));
/// assert_eq!(zoomed.apply(Point::new(3.0, 4.0)), Point::new(16.0, 8.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transform {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Transform {
    pub fn new(scale: f32, offset: Point) -> Self {
        Self {
            scale,
            offset_x: offset.x,
            offset_y: offset.y,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Maps one layout point to surface coordinates.
    pub fn apply(&self, point: Point) -> Point {
        point.scale(self.scale).add_point(self.offset())
    }

    /// Maps a layout size to surface dimensions.
    pub fn apply_size(&self, size: Size) -> Size {
        size.scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Fraction of each side cut away by the corners of a regular octagon:
/// `1 - 1/(1 + √2)`.
pub const OCTAGON_CUT: f32 = 1.0 - 1.0 / (1.0 + std::f32::consts::SQRT_2);

/// Vertices of the regular octagon inscribed in `bounds`.
///
/// The eight vertices run clockwise (in surface coordinates) starting with
/// the left end of the top edge. Each corner cuts `width * OCTAGON_CUT / 2`
/// horizontally and `height * OCTAGON_CUT / 2` vertically.
///
/// # Examples
///
/// ```
/// # use cyview_core::geometry::{Bounds, Point, octagon_points};
/// let bounds = Bounds::new_from_corners(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
/// let points = octagon_points(bounds);
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0].y(), 0.0);
/// assert_eq!(points[2].x(), 100.0);
/// ```
pub fn octagon_points(bounds: Bounds) -> [Point; 8] {
    let Bounds {
        min_x: x0,
        min_y: y0,
        max_x: x1,
        max_y: y1,
    } = bounds;
    let xcut = (x1 - x0) * OCTAGON_CUT / 2.0;
    let ycut = (y1 - y0) * OCTAGON_CUT / 2.0;

    [
        Point::new(x0 + xcut, y0),
        Point::new(x1 - xcut, y0),
        Point::new(x1, y0 + ycut),
        Point::new(x1, y1 - ycut),
        Point::new(x1 - xcut, y1),
        Point::new(x0 + xcut, y1),
        Point::new(x0, y1 - ycut),
        Point::new(x0, y0 + ycut),
    ]
}
