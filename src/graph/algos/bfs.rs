//! Breadth-first traversal
//!
//! Level-order BFS over a FIFO worklist: a vertex is visited strictly
//! before any vertex whose shortest-hop path from the start is longer,
//! and siblings within a level are visited in ascending label order.

use crate::error::{Result, SkeinError};
use crate::graph::Graph;
use std::collections::VecDeque;

/// Traverse breadth-first from `start`, invoking `visit` with each
/// reachable vertex's label in level order.
#[tracing::instrument(skip(graph, visit), fields(start = %start))]
pub fn breadth_first<F>(graph: &mut Graph, start: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&str),
{
    if !graph.contains_vertex(start) {
        return Err(SkeinError::vertex_not_found(start));
    }
    graph.unvisit_all();

    let mut queue: VecDeque<String> = VecDeque::new();
    visit(start);
    if let Some(vertex) = graph.vertex_mut(start) {
        vertex.visit();
    }
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        let neighbors: Vec<String> = match graph.vertex(&current) {
            Some(vertex) => vertex.neighbor_labels().map(str::to_string).collect(),
            None => continue,
        };
        for neighbor in neighbors {
            if graph.vertex(&neighbor).is_some_and(|v| !v.is_visited()) {
                visit(&neighbor);
                if let Some(vertex) = graph.vertex_mut(&neighbor) {
                    vertex.visit();
                }
                queue.push_back(neighbor);
            }
        }
    }
    Ok(())
}

/// Breadth-first traversal that returns the visitation sequence instead
/// of taking a visitor.
pub fn breadth_first_order(graph: &mut Graph, start: &str) -> Result<Vec<String>> {
    let mut order = Vec::new();
    breadth_first(graph, start, |label| order.push(label.to_string()))?;
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadth_first_level_order() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("A", "C", 1);
        g.add_edge("B", "D", 1);
        g.add_edge("C", "E", 1);
        let order = breadth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_breadth_first_sibling_order() {
        let mut g = Graph::new();
        g.add_edge("A", "D", 1);
        g.add_edge("A", "B", 1);
        g.add_edge("A", "C", 1);
        let order = breadth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_breadth_first_cycle_terminates() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 1);
        g.add_edge("C", "A", 1);
        let order = breadth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_breadth_first_skips_unreachable() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("X", "Y", 1);
        let order = breadth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_breadth_first_unknown_start() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        let err = breadth_first(&mut g, "Z", |_| {}).unwrap_err();
        assert!(matches!(err, SkeinError::VertexNotFound { .. }));
    }

    #[test]
    fn test_breadth_first_isolated_start() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        // a rejected self-loop still creates the vertex
        g.add_edge("U", "U", 1);
        let order = breadth_first_order(&mut g, "U").unwrap();
        assert_eq!(order, vec!["U"]);
    }
}
