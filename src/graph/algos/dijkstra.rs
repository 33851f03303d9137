//! Single-source shortest paths
//!
//! Binary-heap Dijkstra with lazy decrease-key: an improved distance
//! pushes a fresh heap entry and the stale duplicate is skipped when it
//! surfaces, via the finalized-set check. Correct for the non-negative
//! weights this crate assumes.

use crate::error::{Result, SkeinError};
use crate::graph::types::{Cost, ShortestPaths};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

/// Heap entry ordered by accumulated cost, then label, so equal-cost pops
/// are deterministic. Consumers must not rely on the tie order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    cost: i64,
    label: String,
}

/// Compute the lowest cost from `start` to every reachable vertex.
///
/// The start itself is finalized up front and never receives a distance
/// or predecessor entry: it is not reported as reachable from itself.
#[tracing::instrument(skip(graph), fields(start = %start))]
pub fn shortest_paths(graph: &Graph, start: &str) -> Result<ShortestPaths> {
    let start_vertex = graph
        .vertex(start)
        .ok_or_else(|| SkeinError::vertex_not_found(start))?;

    let mut distance: BTreeMap<String, Cost> = graph
        .labels()
        .map(|label| (label.to_string(), Cost::Unreachable))
        .collect();
    let mut predecessor: BTreeMap<String, String> = BTreeMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut finalized: HashSet<String> = HashSet::new();
    finalized.insert(start.to_string());

    // Seed with the start's direct neighbors.
    for (neighbor, weight) in start_vertex.neighbors() {
        distance.insert(neighbor.to_string(), Cost::Finite(weight));
        predecessor.insert(neighbor.to_string(), start.to_string());
        heap.push(Reverse(HeapEntry {
            cost: weight,
            label: neighbor.to_string(),
        }));
    }

    while let Some(Reverse(HeapEntry { cost, label })) = heap.pop() {
        if !finalized.insert(label.clone()) {
            // stale duplicate left behind by a later improvement
            continue;
        }
        let Some(vertex) = graph.vertex(&label) else {
            continue;
        };
        for (neighbor, weight) in vertex.neighbors() {
            // The start never gets a self-entry.
            if neighbor == start {
                continue;
            }
            let candidate = cost + weight;
            let improves = match distance.get(neighbor) {
                Some(Cost::Finite(existing)) => candidate < *existing,
                _ => true,
            };
            if improves {
                distance.insert(neighbor.to_string(), Cost::Finite(candidate));
                predecessor.insert(neighbor.to_string(), label.clone());
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    label: neighbor.to_string(),
                }));
            }
        }
    }

    Ok(ShortestPaths {
        start: start.to_string(),
        distance,
        predecessor,
    })
}
