use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a polygon.
    pub fn push(&mut self, polygon: Polygon) {
        self.0.push(polygon);
    }

    /// Consumes the set returning its polygons.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.0
    }

    /// Number of polygons in the set.
    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    /// Sum of the areas of all polygons.
    pub fn area(&self) -> f64 {
        self.0.iter().map(Polygon::area).sum()
    }
}

impl std::ops::Deref for MultiPolygon {
    type Target = [Polygon];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
