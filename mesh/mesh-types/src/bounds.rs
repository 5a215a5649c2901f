//! Axis-aligned bounding box.

use std::fmt;

use nalgebra::{Point3, Vector3};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis (board files, QR columns).
    X,
    /// The Y axis (board ranks, QR rows).
    Y,
    /// The Z axis (height).
    Z,
}

impl Axis {
    /// Component index into a point or vector.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// An axis-aligned bounding box defined by its minimum and maximum corners.
///
/// Also used to describe fixed regions of the board frame, such as the
/// board's own extents or the area the QR plaque must fill.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Axis, Point3};
///
/// let board = Aabb::new(Point3::new(-8.0, -1.0, -1.0), Point3::new(8.0, 15.0, 1.0));
/// assert_eq!(board.extent(Axis::X), 16.0);
/// assert_eq!(board.center(), Point3::new(0.0, 7.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a box from two corners, swapping components where `min > max`.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create a box from `[min_x, max_x]`, `[min_y, max_y]`, `[min_z, max_z]` ranges.
    #[must_use]
    pub fn from_ranges(x: [f64; 2], y: [f64; 2], z: [f64; 2]) -> Self {
        Self::new(Point3::new(x[0], y[0], z[0]), Point3::new(x[1], y[1], z[1]))
    }

    /// An empty box (min = +inf, max = -inf), the identity for expansion.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Grow the box to contain `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// `true` if min > max on any axis.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Width, depth, and height of the box.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Length of the box along one axis.
    #[inline]
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.size()[axis.index()]
    }

    /// Center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
