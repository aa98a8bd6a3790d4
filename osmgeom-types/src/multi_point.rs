use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    /// Consumes the set returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Number of points in the set.
    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    /// Mean of the points, or `None` for an empty set.
    pub fn centroid(&self) -> Option<Point> {
        if self.0.is_empty() {
            return None;
        }

        let n = self.0.len() as f64;
        let (x, y) = self
            .0
            .iter()
            .fold((0.0, 0.0), |(x, y), p| (x + p.x(), y + p.y()));
        Some(Point::new(x / n, y / n))
    }
}

impl std::ops::Deref for MultiPoint {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
