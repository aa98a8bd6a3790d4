//! Line string is an ordered sequence of points defining a path.
//!
//! A line string with fewer than two points has no segments. Such line strings are allowed so that a line can be
//! built point by point, but constructors that read external data never return them.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::segment::{segments, Segment};

/// Ordered sequence of points. See module level documentation for details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString(Vec<Point>);

impl LineString {
    /// Creates an empty line string.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a point to the end of the line.
    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    /// Points of the line.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the line returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Iterates over the segments between consecutive points.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        segments(&self.0)
    }

    /// Total length of the line.
    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// A line string is a single geometry.
    pub fn num_geometries(&self) -> usize {
        1
    }
}

impl std::ops::Deref for LineString {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Point>> for LineString {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[(f64, f64); N]> for LineString {
    fn from(value: [(f64, f64); N]) -> Self {
        value.into_iter().map(Point::from).collect()
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
