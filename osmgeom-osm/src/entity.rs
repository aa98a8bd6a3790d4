//! Input entities: nodes and ways with node references.
//!
//! The constructors in [`crate::create`] are generic over the [`OsmNode`] and [`OsmWay`] traits, so any data source
//! can provide the entities. [`Node`] and [`Way`] are simple owned implementations.

use osmgeom_types::Point;
use serde::{Deserialize, Serialize};

/// Location of a node. A location is undefined when the node's coordinates are not known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location(Option<Point>);

impl Location {
    /// Creates a location from coordinates. Non-finite coordinates give an undefined location.
    pub fn new(x: f64, y: f64) -> Self {
        if x.is_finite() && y.is_finite() {
            Self(Some(Point::new(x, y)))
        } else {
            Self(None)
        }
    }

    /// Undefined location.
    pub const fn undefined() -> Self {
        Self(None)
    }

    /// Returns true if the location has coordinates.
    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Coordinates of the location.
    pub fn point(&self) -> Option<Point> {
        self.0
    }
}

/// Reference from a way to one of its nodes, together with the node location if it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
    id: i64,
    location: Location,
}

impl NodeRef {
    /// Creates a new node reference.
    pub fn new(id: i64, location: Location) -> Self {
        Self { id, location }
    }

    /// Id of the referenced node.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Location of the referenced node.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// Node provided by a data source.
pub trait OsmNode {
    /// Id of the node.
    fn id(&self) -> i64;

    /// Location of the node.
    fn location(&self) -> Location;
}

/// Way provided by a data source.
pub trait OsmWay {
    /// Id of the way.
    fn id(&self) -> i64;

    /// References to the nodes of the way, in order.
    fn node_refs(&self) -> impl Iterator<Item = &NodeRef>;

    /// A way is closed when its first and last node references point to the same node.
    fn is_closed(&self) -> bool {
        let mut refs = self.node_refs();
        match (refs.next(), refs.last()) {
            (Some(first), Some(last)) => first.id() == last.id(),
            _ => false,
        }
    }
}

/// A node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: i64,
    location: Location,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: i64, location: Location) -> Self {
        Self { id, location }
    }
}

impl OsmNode for Node {
    fn id(&self) -> i64 {
        self.id
    }

    fn location(&self) -> Location {
        self.location
    }
}

/// A way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    id: i64,
    nodes: Vec<NodeRef>,
}

impl Way {
    /// Creates a new way.
    pub fn new(id: i64, nodes: Vec<NodeRef>) -> Self {
        Self { id, nodes }
    }

    /// Node references of the way.
    pub fn nodes(&self) -> &[NodeRef] {
        &self.nodes
    }
}

impl OsmWay for Way {
    fn id(&self) -> i64 {
        self.id
    }

    fn node_refs(&self) -> impl Iterator<Item = &NodeRef> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location() {
        assert!(Location::new(1.0, 2.0).is_valid());
        assert_eq!(Location::new(1.0, 2.0).point(), Some(Point::new(1.0, 2.0)));
        assert!(!Location::undefined().is_valid());
        assert!(!Location::new(f64::NAN, 2.0).is_valid());
        assert!(!Location::new(1.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn closed_way() {
        let loc = Location::new(0.0, 0.0);
        let way = Way::new(
            1,
            vec![
                NodeRef::new(1, loc),
                NodeRef::new(2, loc),
                NodeRef::new(1, loc),
            ],
        );
        assert!(way.is_closed());

        let way = Way::new(1, vec![NodeRef::new(1, loc), NodeRef::new(2, loc)]);
        assert!(!way.is_closed());

        let way = Way::new(1, vec![NodeRef::new(1, loc)]);
        assert!(!way.is_closed());
        assert!(!Way::new(1, vec![]).is_closed());
    }
}
