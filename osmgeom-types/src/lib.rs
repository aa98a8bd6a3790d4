//! Geometry values built from OSM data, their measurements and segmentation.
//!
//! The central type is [`Geom`], a closed set of geometry variants including the [`Geom::Null`] value that stands
//! for "no geometry could be derived". Measurement functions in [`functions`] and the [`segmentize`] transform
//! operate on it.
//!
//! ```
//! use osmgeom_types::{Geom, LineString};
//!
//! let geom = Geom::from(LineString::from([(0.0, 0.0), (1.0, 0.0)]));
//! let split = geom.segmentize(0.4).unwrap();
//! assert_eq!(split.num_geometries(), 3);
//! ```

pub mod error;
pub mod functions;
pub mod geometry_type;
pub mod segmentize;

mod geometry;
mod linestring;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use error::GeomError;
pub use functions::{area, centroid, geometry_type, length, num_geometries};
pub use geometry::{Geom, GeomVariant};
pub use geometry_type::GeometryType;
pub use linestring::LineString;
pub use multi_linestring::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::{Point, Vector};
pub use polygon::{Polygon, Ring};
pub use segment::Segment;
pub use segmentize::segmentize;
