//! Polygon consists of one outer ring and zero or more inner rings (holes).
//!
//! A [`Ring`] may or may not repeat its first point at the end. OSM closed ways do repeat it, so both forms are
//! accepted and the closing segment is only added when the ring is not explicitly closed.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::segment::Segment;

/// Closed sequence of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring(Vec<Point>);

impl Ring {
    /// Creates a new ring.
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Points of the ring as they were given.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the ring returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Same as iterating over the points, but repeats the first point at the end if the ring does not do it itself.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point> {
        let closing = match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if first != last => Some(first),
            _ => None,
        };
        self.0.iter().chain(closing)
    }

    /// Iterates over segments of the ring including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.iter_points_closing()
            .zip(self.iter_points_closing().skip(1))
            .map(|(a, b)| Segment(a, b))
    }

    /// Signed area of the ring. Positive for counterclockwise rings.
    pub fn area_signed(&self) -> f64 {
        self.segments()
            .map(|Segment(a, b)| a.x() * b.y() - b.x() * a.y())
            .sum::<f64>()
            / 2.0
    }

    /// Area enclosed by the ring.
    pub fn area(&self) -> f64 {
        self.area_signed().abs()
    }

    /// Area weighted centroid of the ring and its (unsigned) area.
    ///
    /// A ring with zero area has the mean of its vertices as centroid.
    pub fn centroid_with_area(&self) -> Option<(Point, f64)> {
        let area = self.area_signed();
        if area == 0.0 {
            return self.vertex_mean().map(|p| (p, 0.0));
        }

        let (mut cx, mut cy) = (0.0, 0.0);
        for Segment(a, b) in self.segments() {
            let cross = a.x() * b.y() - b.x() * a.y();
            cx += (a.x() + b.x()) * cross;
            cy += (a.y() + b.y()) * cross;
        }

        let k = 6.0 * area;
        Some((Point::new(cx / k, cy / k), area.abs()))
    }

    fn vertex_mean(&self) -> Option<Point> {
        let points = match self.0.split_last() {
            Some((last, rest)) if !rest.is_empty() && rest.first() == Some(last) => rest,
            _ => &self.0[..],
        };
        if points.is_empty() {
            return None;
        }

        let n = points.len() as f64;
        let (x, y) = points
            .iter()
            .fold((0.0, 0.0), |(x, y), p| (x + p.x(), y + p.y()));
        Some(Point::new(x / n, y / n))
    }
}

impl std::ops::Deref for Ring {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Point>> for Ring {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[(f64, f64); N]> for Ring {
    fn from(value: [(f64, f64); N]) -> Self {
        Self(value.into_iter().map(Point::from).collect())
    }
}

/// Polygon geometry. See module level documentation for details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    outer: Ring,
    inner: Vec<Ring>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(outer: Ring, inner: Vec<Ring>) -> Self {
        Self { outer, inner }
    }

    /// Outer ring of the polygon.
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    /// Inner rings (holes) of the polygon.
    pub fn inner(&self) -> &[Ring] {
        &self.inner
    }

    /// Consumes the polygon returning its outer and inner rings.
    pub fn into_rings(self) -> (Ring, Vec<Ring>) {
        (self.outer, self.inner)
    }

    /// Iterates over all rings starting with the outer one.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.outer).chain(self.inner.iter())
    }

    /// Area of the outer ring minus areas of the holes.
    pub fn area(&self) -> f64 {
        self.outer.area() - self.inner.iter().map(Ring::area).sum::<f64>()
    }

    /// Area weighted centroid of the polygon, with holes subtracted.
    pub fn centroid(&self) -> Option<Point> {
        let (outer_centroid, outer_area) = self.outer.centroid_with_area()?;

        let mut area = outer_area;
        let mut cx = outer_centroid.x() * outer_area;
        let mut cy = outer_centroid.y() * outer_area;
        for (centroid, hole_area) in self.inner.iter().filter_map(Ring::centroid_with_area) {
            area -= hole_area;
            cx -= centroid.x() * hole_area;
            cy -= centroid.y() * hole_area;
        }

        if area > 0.0 {
            Some(Point::new(cx / area, cy / area))
        } else {
            Some(outer_centroid)
        }
    }

    /// A polygon is a single geometry.
    pub fn num_geometries(&self) -> usize {
        1
    }
}

impl From<Ring> for Polygon {
    fn from(value: Ring) -> Self {
        Self {
            outer: value,
            inner: vec![],
        }
    }
}
