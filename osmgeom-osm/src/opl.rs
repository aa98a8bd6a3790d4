//! Parsing of nodes and ways from the OPL text format.
//!
//! Only the parts needed to build geometries are read:
//!
//! * node: `n<id> x<lon> y<lat>`, e.g. `n10 x1.5 y2`
//! * way: `w<id> N<refs>` with comma separated references `n<id>` or `n<id>x<lon>y<lat>`, e.g. `w20 Nn1x1y1,n2`
//!
//! Other fields (version, tags etc.) are skipped. An empty coordinate means that the location is undefined.

use std::str::FromStr;

use crate::entity::{Location, Node, NodeRef, Way};
use crate::error::OplError;

impl FromStr for Node {
    type Err = OplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let id = parse_object_id(tokens.next(), 'n')?;

        let mut x = None;
        let mut y = None;
        for token in tokens {
            if let Some(value) = token.strip_prefix('x') {
                x = parse_coordinate(value)?;
            } else if let Some(value) = token.strip_prefix('y') {
                y = parse_coordinate(value)?;
            }
        }

        Ok(Node::new(id, location(x, y)))
    }
}

impl FromStr for Way {
    type Err = OplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let id = parse_object_id(tokens.next(), 'w')?;

        let mut nodes = vec![];
        for token in tokens {
            if let Some(refs) = token.strip_prefix('N') {
                nodes = refs
                    .split(',')
                    .filter(|r| !r.is_empty())
                    .map(NodeRef::from_str)
                    .collect::<Result<_, _>>()?;
            }
        }

        Ok(Way::new(id, nodes))
    }
}

impl FromStr for NodeRef {
    type Err = OplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('n')
            .ok_or_else(|| OplError::NodeRef(s.to_string()))?;

        let (id, location) = match body.split_once('x') {
            Some((id, coords)) => {
                let (x, y) = coords
                    .split_once('y')
                    .ok_or_else(|| OplError::NodeRef(s.to_string()))?;
                (id, location(parse_coordinate(x)?, parse_coordinate(y)?))
            }
            None => (body, Location::undefined()),
        };

        Ok(NodeRef::new(parse_id(id)?, location))
    }
}

fn location(x: Option<f64>, y: Option<f64>) -> Location {
    match (x, y) {
        (Some(x), Some(y)) => Location::new(x, y),
        _ => Location::undefined(),
    }
}

fn parse_object_id(token: Option<&str>, expected: char) -> Result<i64, OplError> {
    let token = token.ok_or(OplError::Empty)?;
    let id = token
        .strip_prefix(expected)
        .ok_or_else(|| OplError::ObjectType {
            expected,
            token: token.to_string(),
        })?;
    parse_id(id)
}

fn parse_id(value: &str) -> Result<i64, OplError> {
    value
        .parse()
        .map_err(|_| OplError::Id(value.to_string()))
}

fn parse_coordinate(value: &str) -> Result<Option<f64>, OplError> {
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| OplError::Coordinate(value.to_string()))
}
