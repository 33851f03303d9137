//! Result types for ingestion and shortest-path operations

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The cost to reach a vertex from the start of a shortest-path run.
///
/// `Unreachable` orders greater than every finite cost, standing in for
/// the usual int-max convention without conflating "no path" with a
/// legitimate large weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cost {
    Finite(i64),
    Unreachable,
}

impl Cost {
    /// The finite cost, or `None` when unreachable.
    pub fn finite(&self) -> Option<i64> {
        match self {
            Cost::Finite(value) => Some(*value),
            Cost::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Cost::Unreachable)
    }
}

/// Serializes as the finite value, or null when unreachable.
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(value) => write!(f, "{}", value),
            Cost::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Distances and predecessors computed by a single-source shortest-path run.
///
/// Every vertex of the graph has a distance entry. Vertices the run never
/// reached hold [`Cost::Unreachable`], and so does the start itself: the
/// start is not reported as reachable from itself. The predecessor map has
/// entries for reachable vertices only, each pointing one hop back toward
/// the start.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    pub start: String,
    pub distance: BTreeMap<String, Cost>,
    pub predecessor: BTreeMap<String, String>,
}

impl ShortestPaths {
    /// Reconstruct the full path from the start to `label`.
    ///
    /// Follows predecessor links backwards, then reverses, yielding
    /// `[start, .., label]`. Returns `None` for the start itself, for
    /// unknown labels, and for vertices the run never reached.
    pub fn path_to(&self, label: &str) -> Option<Vec<String>> {
        if !self.predecessor.contains_key(label) {
            return None;
        }
        let mut path = vec![label.to_string()];
        let mut current = label;
        while let Some(prev) = self.predecessor.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// JSON representation, for structured driver output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "start": self.start,
            "distance": self.distance,
            "predecessor": self.predecessor,
        })
    }
}

/// Outcome summary of one edge-list ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// The leading edge-count token, when it parsed as an integer. Read
    /// for information only; never validated against the triples present.
    pub declared: Option<i64>,
    /// Triples accepted as new edges.
    pub added: usize,
    /// Triples refused as self-loops or duplicate edges.
    pub rejected: usize,
}
