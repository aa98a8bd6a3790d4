//! Conversions into [`geo_types`] geometries.

use geo_types::{coord, Coord};

use crate::error::GeomError;
use crate::geometry::Geom;
use crate::linestring::LineString;
use crate::multi_linestring::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::{Polygon, Ring};

impl From<Point> for Coord<f64> {
    fn from(value: Point) -> Self {
        coord!(x: value.x(), y: value.y())
    }
}

impl From<Coord<f64>> for Point {
    fn from(value: Coord<f64>) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<Point> for geo_types::Point<f64> {
    fn from(value: Point) -> Self {
        geo_types::Point(value.into())
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        value.0.into()
    }
}

impl From<LineString> for geo_types::LineString<f64> {
    fn from(value: LineString) -> Self {
        value.into_points().into_iter().map(Coord::from).collect()
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl From<Ring> for geo_types::LineString<f64> {
    fn from(value: Ring) -> Self {
        let mut line: geo_types::LineString<f64> =
            value.into_points().into_iter().map(Coord::from).collect();
        line.close();
        line
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(value: Polygon) -> Self {
        let (outer, inner) = value.into_rings();
        geo_types::Polygon::new(outer.into(), inner.into_iter().map(Into::into).collect())
    }
}

impl From<MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: MultiPoint) -> Self {
        geo_types::MultiPoint(value.into_points().into_iter().map(Into::into).collect())
    }
}

impl From<MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: MultiLineString) -> Self {
        geo_types::MultiLineString(value.into_lines().into_iter().map(Into::into).collect())
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: MultiPolygon) -> Self {
        geo_types::MultiPolygon(value.into_polygons().into_iter().map(Into::into).collect())
    }
}

impl TryFrom<Geom> for geo_types::Geometry<f64> {
    type Error = GeomError;

    fn try_from(value: Geom) -> Result<Self, Self::Error> {
        Ok(match value {
            Geom::Null => return Err(GeomError::EmptyGeometry),
            Geom::Point(v) => geo_types::Geometry::Point(v.into()),
            Geom::LineString(v) => geo_types::Geometry::LineString(v.into()),
            Geom::Polygon(v) => geo_types::Geometry::Polygon(v.into()),
            Geom::MultiPoint(v) => geo_types::Geometry::MultiPoint(v.into()),
            Geom::MultiLineString(v) => geo_types::Geometry::MultiLineString(v.into()),
            Geom::MultiPolygon(v) => geo_types::Geometry::MultiPolygon(v.into()),
        })
    }
}
