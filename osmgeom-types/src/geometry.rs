use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::functions;
use crate::geometry_type::GeometryType;
use crate::linestring::LineString;
use crate::multi_linestring::MultiLineString;
use crate::multi_point::MultiPoint;
use crate::multi_polygon::MultiPolygon;
use crate::point::Point;
use crate::polygon::Polygon;

/// Geometry value of any supported type.
///
/// [`Geom::Null`] means that no geometry could be derived from the input data. It is the default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Geom {
    /// No geometry.
    #[default]
    Null,
    /// Single point.
    Point(Point),
    /// Line string.
    LineString(LineString),
    /// Polygon.
    Polygon(Polygon),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Set of line strings.
    MultiLineString(MultiLineString),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
}

impl Geom {
    /// Returns true for the null geometry.
    pub fn is_null(&self) -> bool {
        matches!(self, Geom::Null)
    }

    /// Returns true if the geometry is a point.
    pub fn is_point(&self) -> bool {
        matches!(self, Geom::Point(_))
    }

    /// Returns true if the geometry is a line string.
    pub fn is_linestring(&self) -> bool {
        matches!(self, Geom::LineString(_))
    }

    /// Returns true if the geometry is a polygon.
    pub fn is_polygon(&self) -> bool {
        matches!(self, Geom::Polygon(_))
    }

    /// Returns true if the geometry is a set of points.
    pub fn is_multipoint(&self) -> bool {
        matches!(self, Geom::MultiPoint(_))
    }

    /// Returns true if the geometry is a set of line strings.
    pub fn is_multilinestring(&self) -> bool {
        matches!(self, Geom::MultiLineString(_))
    }

    /// Returns true if the geometry is a set of polygons.
    pub fn is_multipolygon(&self) -> bool {
        matches!(self, Geom::MultiPolygon(_))
    }

    /// Returns true if the geometry is one of the collection types.
    pub fn is_multi(&self) -> bool {
        self.geometry_type().is_multi()
    }

    /// Type of the active variant.
    pub fn geometry_type(&self) -> GeometryType {
        functions::geometry_type(self)
    }

    /// See [`functions::num_geometries`].
    pub fn num_geometries(&self) -> usize {
        functions::num_geometries(self)
    }

    /// See [`functions::area`].
    pub fn area(&self) -> f64 {
        functions::area(self)
    }

    /// See [`functions::length`].
    pub fn length(&self) -> f64 {
        functions::length(self)
    }

    /// See [`functions::centroid`].
    pub fn centroid(&self) -> Result<Geom, GeomError> {
        functions::centroid(self)
    }

    /// See [`segmentize`](crate::segmentize::segmentize).
    pub fn segmentize(&self, max_length: f64) -> Result<Geom, GeomError> {
        crate::segmentize::segmentize(self, max_length)
    }

    /// Returns a reference to the value of the active variant if it is of type `T`.
    ///
    /// ```
    /// use osmgeom_types::{Geom, LineString};
    ///
    /// let geom = Geom::from(LineString::from([(1.0, 1.0), (2.0, 2.0)]));
    /// assert_eq!(geom.get::<LineString>().map(|l| l.len()), Ok(2));
    /// assert!(geom.get::<osmgeom_types::Point>().is_err());
    /// ```
    pub fn get<T: GeomVariant>(&self) -> Result<&T, GeomError> {
        T::from_geom(self).ok_or_else(|| GeomError::TypeMismatch {
            expected: T::TYPE,
            actual: self.geometry_type(),
        })
    }

    /// Consumes the geometry returning the value of the active variant if it is of type `T`.
    pub fn into_inner<T: GeomVariant>(self) -> Result<T, GeomError> {
        let actual = self.geometry_type();
        T::from_geom_owned(self).ok_or(GeomError::TypeMismatch {
            expected: T::TYPE,
            actual,
        })
    }
}

/// Types that are stored in one of the [`Geom`] variants.
pub trait GeomVariant: Sized {
    /// Geometry type of the variant.
    const TYPE: GeometryType;

    /// Returns the value if `geom` holds this variant.
    fn from_geom(geom: &Geom) -> Option<&Self>;

    /// Returns the value if `geom` holds this variant.
    fn from_geom_owned(geom: Geom) -> Option<Self>;
}

macro_rules! geom_variant {
    ($variant:ident) => {
        impl GeomVariant for $variant {
            const TYPE: GeometryType = GeometryType::$variant;

            fn from_geom(geom: &Geom) -> Option<&Self> {
                match geom {
                    Geom::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_geom_owned(geom: Geom) -> Option<Self> {
                match geom {
                    Geom::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }

        impl From<$variant> for Geom {
            fn from(value: $variant) -> Self {
                Self::$variant(value)
            }
        }
    };
}

geom_variant!(Point);
geom_variant!(LineString);
geom_variant!(Polygon);
geom_variant!(MultiPoint);
geom_variant!(MultiLineString);
geom_variant!(MultiPolygon);

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn variant_queries() {
        let geom = Geom::default();
        assert!(geom.is_null());
        assert!(!geom.is_point());

        let geom = Geom::from(Point::new(1.0, 2.0));
        assert!(geom.is_point());
        assert!(!geom.is_multi());

        let geom = Geom::from(MultiLineString::new());
        assert!(geom.is_multilinestring());
        assert!(geom.is_multi());
        assert!(!geom.is_linestring());
    }

    #[test]
    fn checked_access() {
        let line = LineString::from([(1.0, 1.0), (2.0, 2.0)]);
        let geom = Geom::from(line.clone());

        assert_eq!(geom.get::<LineString>(), Ok(&line));
        assert_matches!(
            geom.get::<MultiLineString>(),
            Err(GeomError::TypeMismatch {
                expected: GeometryType::MultiLineString,
                actual: GeometryType::LineString,
            })
        );
        assert_matches!(
            Geom::Null.into_inner::<Point>(),
            Err(GeomError::TypeMismatch {
                actual: GeometryType::Geometry,
                ..
            })
        );
        assert_eq!(geom.into_inner::<LineString>(), Ok(line));
    }

    #[test]
    fn serialization() {
        let geom = Geom::from(LineString::from([(1.0, 1.0), (2.0, 2.0)]));
        let json = serde_json::to_string(&geom).unwrap();
        assert_eq!(serde_json::from_str::<Geom>(&json).unwrap(), geom);

        let json = serde_json::to_string(&Geom::Null).unwrap();
        assert_eq!(json, "\"Null\"");
    }

    #[test]
    fn equality_between_variants() {
        let point = Point::new(1.0, 1.0);
        assert_ne!(
            Geom::from(point),
            Geom::from(MultiPoint::from(vec![point]))
        );
        assert_ne!(Geom::Null, Geom::from(LineString::new()));
        assert_eq!(Geom::from(point), Geom::Point(Point::new(1.0, 1.0)));
    }
}
