//! Functions computing derived properties of a [`Geom`].
//!
//! Every function matches all variants explicitly, so adding a variant to [`Geom`] fails to compile until each of
//! them is updated.

use crate::error::GeomError;
use crate::geometry::Geom;
use crate::geometry_type::GeometryType;
use crate::linestring::LineString;
use crate::point::Point;

/// Number of geometries: 0 for null, 1 for single geometries and the number of members for collections.
pub fn num_geometries(geom: &Geom) -> usize {
    match geom {
        Geom::Null => 0,
        Geom::Point(_) => 1,
        Geom::LineString(v) => v.num_geometries(),
        Geom::Polygon(v) => v.num_geometries(),
        Geom::MultiPoint(v) => v.num_geometries(),
        Geom::MultiLineString(v) => v.num_geometries(),
        Geom::MultiPolygon(v) => v.num_geometries(),
    }
}

/// Type of the geometry. Null geometry has the generic [`GeometryType::Geometry`] type.
pub fn geometry_type(geom: &Geom) -> GeometryType {
    match geom {
        Geom::Null => GeometryType::Geometry,
        Geom::Point(_) => GeometryType::Point,
        Geom::LineString(_) => GeometryType::LineString,
        Geom::Polygon(_) => GeometryType::Polygon,
        Geom::MultiPoint(_) => GeometryType::MultiPoint,
        Geom::MultiLineString(_) => GeometryType::MultiLineString,
        Geom::MultiPolygon(_) => GeometryType::MultiPolygon,
    }
}

/// Planar area of the geometry. Exactly `0.0` for everything but polygons.
pub fn area(geom: &Geom) -> f64 {
    match geom {
        Geom::Null
        | Geom::Point(_)
        | Geom::LineString(_)
        | Geom::MultiPoint(_)
        | Geom::MultiLineString(_) => 0.0,
        Geom::Polygon(v) => v.area(),
        Geom::MultiPolygon(v) => v.area(),
    }
}

/// Length of linear geometries. Exactly `0.0` for everything else.
pub fn length(geom: &Geom) -> f64 {
    match geom {
        Geom::Null
        | Geom::Point(_)
        | Geom::Polygon(_)
        | Geom::MultiPoint(_)
        | Geom::MultiPolygon(_) => 0.0,
        Geom::LineString(v) => v.length(),
        Geom::MultiLineString(v) => v.length(),
    }
}

/// Centroid of the geometry as a point geometry.
///
/// * lines: mean of the segment midpoints weighted by segment length
/// * polygons: area weighted centroid
/// * collections: member centroids weighted by member length (lines), area (polygons) or equally (points)
///
/// Returns [`GeomError::EmptyGeometry`] for the null geometry and for geometries without points.
pub fn centroid(geom: &Geom) -> Result<Geom, GeomError> {
    let centroid = match geom {
        Geom::Null => None,
        Geom::Point(v) => Some(*v),
        Geom::LineString(v) => line_centroid(v),
        Geom::Polygon(v) => v.centroid(),
        Geom::MultiPoint(v) => v.centroid(),
        Geom::MultiLineString(v) => weighted_mean(
            v.iter()
                .filter_map(|line| line_centroid(line).map(|c| (c, line.length()))),
        ),
        Geom::MultiPolygon(v) => weighted_mean(
            v.iter()
                .filter_map(|polygon| polygon.centroid().map(|c| (c, polygon.area()))),
        ),
    };

    centroid.map(Geom::Point).ok_or(GeomError::EmptyGeometry)
}

fn line_centroid(line: &LineString) -> Option<Point> {
    if line.len() == 1 {
        return line.first().copied();
    }

    weighted_mean(line.segments().map(|s| (s.midpoint(), s.length())))
}

/// Mean of the points weighted by the given weights. If all weights are zero, all points are weighted equally.
fn weighted_mean(items: impl Iterator<Item = (Point, f64)>) -> Option<Point> {
    let items: Vec<(Point, f64)> = items.collect();
    if items.is_empty() {
        return None;
    }

    let total: f64 = items.iter().map(|(_, weight)| weight).sum();
    let (x, y) = if total > 0.0 {
        items.iter().fold((0.0, 0.0), |(x, y), (p, weight)| {
            let k = weight / total;
            (x + p.x() * k, y + p.y() * k)
        })
    } else {
        let k = 1.0 / items.len() as f64;
        items
            .iter()
            .fold((0.0, 0.0), |(x, y), (p, _)| (x + p.x() * k, y + p.y() * k))
    };

    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multi_linestring::MultiLineString;
    use crate::multi_point::MultiPoint;
    use crate::multi_polygon::MultiPolygon;
    use crate::polygon::{Polygon, Ring};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        Polygon::from(Ring::from([
            (x, y),
            (x + size, y),
            (x + size, y + size),
            (x, y + size),
            (x, y),
        ]))
    }

    fn centroid_point(geom: &Geom) -> Point {
        *centroid(geom).unwrap().get::<Point>().unwrap()
    }

    #[test]
    fn null_geometry() {
        let geom = Geom::Null;
        assert_eq!(num_geometries(&geom), 0);
        assert_eq!(geometry_type(&geom), "GEOMETRY");
        assert_eq!(area(&geom), 0.0);
        assert_eq!(length(&geom), 0.0);
        assert_matches!(centroid(&geom), Err(GeomError::EmptyGeometry));
    }

    #[test]
    fn point_geometry() {
        let geom = Geom::from(Point::new(3.0, 4.0));
        assert_eq!(num_geometries(&geom), 1);
        assert_eq!(geometry_type(&geom), "POINT");
        assert_eq!(area(&geom), 0.0);
        assert_eq!(centroid(&geom), Ok(geom.clone()));
    }

    #[test]
    fn line_geometry() {
        let geom = Geom::from(LineString::from([(1.0, 1.0), (2.0, 2.0)]));

        assert_eq!(num_geometries(&geom), 1);
        assert_eq!(area(&geom), 0.0);
        assert_eq!(geometry_type(&geom), "LINESTRING");
        assert_eq!(centroid(&geom), Ok(Geom::Point(Point::new(1.5, 1.5))));
    }

    #[test]
    fn line_centroid_is_length_weighted() {
        let geom = Geom::from(LineString::from([(0.0, 0.0), (3.0, 0.0), (3.0, 1.0)]));
        // midpoints (1.5, 0) and (3, 0.5) with weights 3 and 1
        assert_abs_diff_eq!(
            centroid_point(&geom),
            Point::new(1.875, 0.125),
            epsilon = 1e-12
        );
        assert_eq!(length(&geom), 4.0);
    }

    #[test]
    fn degenerate_line_centroid() {
        let geom = Geom::from(LineString::from([(2.0, 2.0), (2.0, 2.0)]));
        assert_eq!(centroid_point(&geom), Point::new(2.0, 2.0));

        let geom = Geom::from(LineString::from([(5.0, 1.0)]));
        assert_eq!(centroid_point(&geom), Point::new(5.0, 1.0));

        assert_matches!(
            centroid(&Geom::from(LineString::new())),
            Err(GeomError::EmptyGeometry)
        );
    }

    #[test]
    fn polygon_geometry() {
        let geom = Geom::from(square(0.0, 0.0, 2.0));
        assert_eq!(num_geometries(&geom), 1);
        assert_eq!(geometry_type(&geom), "POLYGON");
        assert_eq!(area(&geom), 4.0);
        assert_eq!(length(&geom), 0.0);
        assert_abs_diff_eq!(centroid_point(&geom), Point::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn multipoint_geometry() {
        let geom = Geom::from(MultiPoint::from(vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 3.0),
        ]));
        assert_eq!(num_geometries(&geom), 3);
        assert_eq!(geometry_type(&geom), "MULTIPOINT");
        assert_eq!(area(&geom), 0.0);
        assert_eq!(centroid_point(&geom), Point::new(1.0, 1.0));
    }

    #[test]
    fn multilinestring_geometry() {
        let geom = Geom::from(MultiLineString::from(vec![
            LineString::from([(0.0, 0.0), (2.0, 0.0)]),
            LineString::from([(0.0, 1.0), (2.0, 1.0)]),
        ]));
        assert_eq!(num_geometries(&geom), 2);
        assert_eq!(geometry_type(&geom), "MULTILINESTRING");
        assert_eq!(area(&geom), 0.0);
        assert_eq!(length(&geom), 4.0);
        assert_abs_diff_eq!(centroid_point(&geom), Point::new(1.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn multilinestring_centroid_weighted_by_length() {
        let geom = Geom::from(MultiLineString::from(vec![
            LineString::from([(0.0, 0.0), (3.0, 0.0)]),
            LineString::from([(10.0, 0.0), (11.0, 0.0)]),
        ]));
        assert_abs_diff_eq!(centroid_point(&geom), Point::new(3.75, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn multipolygon_geometry() {
        let geom = Geom::from(MultiPolygon::from(vec![
            square(0.0, 0.0, 1.0),
            square(2.0, 0.0, 2.0),
        ]));
        assert_eq!(num_geometries(&geom), 2);
        assert_eq!(geometry_type(&geom), "MULTIPOLYGON");
        assert_eq!(area(&geom), 5.0);
        // centroids (0.5, 0.5) and (3, 1) with weights 1 and 4
        assert_abs_diff_eq!(centroid_point(&geom), Point::new(2.5, 0.9), epsilon = 1e-12);
    }

    #[test]
    fn empty_collections() {
        let geom = Geom::from(MultiLineString::new());
        assert_eq!(num_geometries(&geom), 0);
        assert_matches!(centroid(&geom), Err(GeomError::EmptyGeometry));
    }
}
