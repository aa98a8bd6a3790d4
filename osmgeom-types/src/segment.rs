use crate::point::Point;

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a>(pub &'a Point, pub &'a Point);

impl Segment<'_> {
    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.0.distance(self.1)
    }

    /// Point in the middle of the segment.
    pub fn midpoint(&self) -> Point {
        self.interpolate(0.5)
    }

    /// Point on the segment line at parameter `t`: `0.0` is the start point and `1.0` the end point.
    pub fn interpolate(&self, t: f64) -> Point {
        *self.0 + (*self.1 - *self.0) * t
    }
}

/// Iterates over the segments between consecutive points of the slice.
pub(crate) fn segments(points: &[Point]) -> impl Iterator<Item = Segment<'_>> {
    points.windows(2).map(|pair| Segment(&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_midpoint() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(2.0, 2.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.length(), 2f64.sqrt());
        assert_eq!(segment.midpoint(), Point::new(1.5, 1.5));
    }

    #[test]
    fn interpolate() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.interpolate(0.0), a);
        assert_eq!(segment.interpolate(1.0), b);
        assert_eq!(segment.interpolate(0.4), Point::new(0.4, 0.0));
    }

    #[test]
    fn segments_of_points() {
        let points = [Point::new(0.0, 0.0)];
        assert_eq!(segments(&points).count(), 0);

        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ];
        let all: Vec<_> = segments(&points).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1], Segment(&points[1], &points[2]));
    }
}
