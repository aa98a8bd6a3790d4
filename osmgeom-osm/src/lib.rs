//! Building of [`osmgeom_types`] geometries from OSM nodes and ways.
//!
//! ```
//! use osmgeom_osm::{create_linestring, Way};
//!
//! let way: Way = "w20 Nn1x1y1,n2x2y2".parse().unwrap();
//! let geom = create_linestring(&way);
//! assert_eq!(geom.geometry_type(), "LINESTRING");
//!
//! let way: Way = "w21 Nn1x1y1,n2".parse().unwrap();
//! assert!(create_linestring(&way).is_null());
//! ```

pub mod create;
pub mod entity;
pub mod error;
pub mod opl;

pub use create::{create_linestring, create_multilinestring, create_point, create_polygon};
pub use entity::{Location, Node, NodeRef, OsmNode, OsmWay, Way};
pub use error::OplError;
