use serde::{Deserialize, Serialize};

use crate::linestring::LineString;

/// A set of line strings. The order of the lines is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a line.
    pub fn push(&mut self, line: LineString) {
        self.0.push(line);
    }

    /// Number of lines in the set.
    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    /// Sum of the lengths of all lines.
    pub fn length(&self) -> f64 {
        self.0.iter().map(LineString::length).sum()
    }

    /// Consumes the set returning its lines.
    pub fn into_lines(self) -> Vec<LineString> {
        self.0
    }
}

impl std::ops::Deref for MultiLineString {
    type Target = [LineString];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}

impl From<LineString> for MultiLineString {
    fn from(value: LineString) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<T: IntoIterator<Item = LineString>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MultiLineString {
    type Item = &'a LineString;
    type IntoIter = std::slice::Iter<'a, LineString>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
