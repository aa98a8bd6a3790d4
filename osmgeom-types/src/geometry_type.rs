//! See documentation for [`GeometryType`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind of a [`Geom`](crate::Geom) value.
///
/// The null geometry reports itself as [`GeometryType::Geometry`], the generic type name used when no specific
/// geometry is known.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Generic geometry, used for the null geometry.
    Geometry,
    /// Single point.
    Point,
    /// Line string.
    LineString,
    /// Polygon.
    Polygon,
    /// Set of points.
    MultiPoint,
    /// Set of line strings.
    MultiLineString,
    /// Set of polygons.
    MultiPolygon,
}

impl GeometryType {
    /// Canonical upper case name of the type, e.g. `LINESTRING`.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Geometry => "GEOMETRY",
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
        }
    }

    /// Returns true for the collection types.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint | GeometryType::MultiLineString | GeometryType::MultiPolygon
        )
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq<&str> for GeometryType {
    fn eq(&self, other: &&str) -> bool {
        self.name() == *other
    }
}
