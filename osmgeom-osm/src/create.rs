//! Constructors building geometries from OSM entities.
//!
//! Constructors never fail. If the entity does not have enough valid locations to build the requested geometry,
//! [`Geom::Null`] is returned.

use osmgeom_types::{Geom, LineString, MultiLineString, Polygon, Ring};

use crate::entity::{OsmNode, OsmWay};

/// Creates a point geometry from a node, or null geometry if the node has no valid location.
pub fn create_point(node: &impl OsmNode) -> Geom {
    match node.location().point() {
        Some(point) => Geom::Point(point),
        None => {
            log::debug!("Node {} has no valid location", node.id());
            Geom::Null
        }
    }
}

/// Creates a line string geometry from a way.
///
/// Node references without a valid location are skipped, as are consecutive references to the same location. If
/// fewer than two points remain, null geometry is returned.
pub fn create_linestring(way: &impl OsmWay) -> Geom {
    let line = way_points(way);
    if line.len() < 2 {
        log::debug!(
            "Way {} has less than two distinct valid locations, no line created",
            way.id()
        );
        return Geom::Null;
    }

    Geom::LineString(line)
}

/// Creates a polygon geometry from a closed way.
///
/// The way must be closed and have at least four points (three distinct corners and the closing point) after
/// skipping invalid locations. Otherwise null geometry is returned.
pub fn create_polygon(way: &impl OsmWay) -> Geom {
    if !way.is_closed() {
        log::debug!("Way {} is not closed, no polygon created", way.id());
        return Geom::Null;
    }

    let points = way_points(way).into_points();
    if points.len() < 4 || points.first() != points.last() {
        log::debug!(
            "Way {} does not form a valid ring, no polygon created",
            way.id()
        );
        return Geom::Null;
    }

    Geom::Polygon(Polygon::from(Ring::new(points)))
}

/// Creates a multi line string from a set of ways.
///
/// Each way is converted with [`create_linestring`], ways that do not give a line are skipped. If no lines are
/// created, null geometry is returned.
pub fn create_multilinestring<'a, W>(ways: impl IntoIterator<Item = &'a W>) -> Geom
where
    W: OsmWay + 'a,
{
    let lines: MultiLineString = ways
        .into_iter()
        .filter_map(|way| create_linestring(way).into_inner::<LineString>().ok())
        .collect();

    if lines.is_empty() {
        return Geom::Null;
    }

    Geom::MultiLineString(lines)
}

fn way_points(way: &impl OsmWay) -> LineString {
    let mut line = LineString::new();
    let mut skipped = 0usize;
    for node_ref in way.node_refs() {
        let Some(point) = node_ref.location().point() else {
            skipped += 1;
            continue;
        };

        if line.last() != Some(&point) {
            line.push(point);
        }
    }

    if skipped > 0 {
        log::trace!(
            "Skipped {skipped} node references without location in way {}",
            way.id()
        );
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Location, Node, Way};
    use osmgeom_types::Point;

    fn way(opl: &str) -> Way {
        opl.parse().unwrap()
    }

    #[test]
    fn point_from_node() {
        let node = Node::new(1, Location::new(3.0, 4.0));
        assert_eq!(create_point(&node), Geom::Point(Point::new(3.0, 4.0)));

        let node = Node::new(2, Location::undefined());
        assert!(create_point(&node).is_null());
    }

    #[test]
    fn linestring_skips_missing_locations() {
        let geom = create_linestring(&way("w1 Nn1x1y1,n2,n3x3y3,n4"));
        assert_eq!(geom, Geom::from(LineString::from([(1.0, 1.0), (3.0, 3.0)])));
    }

    #[test]
    fn linestring_skips_repeated_locations() {
        let geom = create_linestring(&way("w1 Nn1x1y1,n1x1y1,n2x2y2,n3x2y2,n4x1y1"));
        assert_eq!(
            geom,
            Geom::from(LineString::from([(1.0, 1.0), (2.0, 2.0), (1.0, 1.0)]))
        );
    }

    #[test]
    fn degenerate_linestrings() {
        assert!(create_linestring(&way("w1")).is_null());
        assert!(create_linestring(&way("w1 Nn1,n2")).is_null());
        assert!(create_linestring(&way("w1 Nn1x1y1")).is_null());
        assert!(create_linestring(&way("w1 Nn1x1y1,n2")).is_null());
        assert!(create_linestring(&way("w1 Nn1x1y1,n1x1y1")).is_null());
    }

    #[test]
    fn polygon_from_closed_way() {
        let geom = create_polygon(&way("w1 Nn1x0y0,n2x1y0,n3x1y1,n4x0y1,n1x0y0"));
        assert!(geom.is_polygon());
        assert_eq!(geom.area(), 1.0);
    }

    #[test]
    fn invalid_polygons() {
        // not closed
        assert!(create_polygon(&way("w1 Nn1x0y0,n2x1y0,n3x1y1,n4x0y0")).is_null());
        // too few points
        assert!(create_polygon(&way("w1 Nn1x0y0,n2x1y0,n1x0y0")).is_null());
        // closing node without location
        assert!(create_polygon(&way("w1 Nn1x0y0,n2x1y0,n3x1y1,n4x0y1,n1")).is_null());
    }

    #[test]
    fn multilinestring_skips_invalid_ways() {
        let ways = [
            way("w1 Nn1x0y0,n2x1y0"),
            way("w2 Nn3x5y5"),
            way("w3 Nn4x2y2,n5x3y3"),
        ];
        let geom = create_multilinestring(&ways);
        assert_eq!(
            geom,
            Geom::from(MultiLineString::from(vec![
                LineString::from([(0.0, 0.0), (1.0, 0.0)]),
                LineString::from([(2.0, 2.0), (3.0, 3.0)]),
            ]))
        );

        assert!(create_multilinestring(&[way("w2 Nn3x5y5")]).is_null());
        assert!(create_multilinestring(std::iter::empty::<&Way>()).is_null());
    }
}
