//! Depth-first traversal
//!
//! Classic pre-order DFS: a vertex is visited exactly once, before any of
//! its unvisited descendants, and descendants are explored in ascending
//! neighbor-label order.

use crate::error::{Result, SkeinError};
use crate::graph::Graph;

/// Traverse depth-first from `start`, invoking `visit` with each
/// reachable vertex's label in pre-order.
#[tracing::instrument(skip(graph, visit), fields(start = %start))]
pub fn depth_first<F>(graph: &mut Graph, start: &str, mut visit: F) -> Result<()>
where
    F: FnMut(&str),
{
    if !graph.contains_vertex(start) {
        return Err(SkeinError::vertex_not_found(start));
    }
    graph.unvisit_all();
    visit_recursive(graph, start, &mut visit);
    Ok(())
}

/// Depth-first traversal that returns the visitation sequence instead of
/// taking a visitor.
pub fn depth_first_order(graph: &mut Graph, start: &str) -> Result<Vec<String>> {
    let mut order = Vec::new();
    depth_first(graph, start, |label| order.push(label.to_string()))?;
    Ok(order)
}

fn visit_recursive(graph: &mut Graph, label: &str, visit: &mut dyn FnMut(&str)) {
    visit(label);
    // Snapshot the neighbor labels so the recursion below does not alias
    // the adjacency borrow.
    let neighbors: Vec<String> = match graph.vertex_mut(label) {
        Some(vertex) => {
            vertex.visit();
            vertex.neighbor_labels().map(str::to_string).collect()
        }
        None => return,
    };
    for neighbor in neighbors {
        if graph.vertex(&neighbor).is_some_and(|v| !v.is_visited()) {
            visit_recursive(graph, &neighbor, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Graph {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "C", 3);
        g
    }

    #[test]
    fn test_depth_first_chain() {
        let mut g = chain();
        let order = depth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_depth_first_sibling_order() {
        let mut g = Graph::new();
        g.add_edge("A", "C", 1);
        g.add_edge("A", "B", 1);
        g.add_edge("B", "D", 1);
        let order = depth_first_order(&mut g, "A").unwrap();
        // B explored (with its subtree) before C
        assert_eq!(order, vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_depth_first_cycle_terminates() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "A", 1);
        let order = depth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_depth_first_skips_unreachable() {
        let mut g = chain();
        g.add_edge("X", "Y", 1);
        let order = depth_first_order(&mut g, "A").unwrap();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_depth_first_unknown_start() {
        let mut g = chain();
        let err = depth_first(&mut g, "Z", |_| {}).unwrap_err();
        assert!(matches!(
            err,
            SkeinError::VertexNotFound { ref label } if label == "Z"
        ));
    }

    #[test]
    fn test_depth_first_visitor_called_once_per_vertex() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1);
        g.add_edge("A", "C", 1);
        g.add_edge("B", "C", 1);
        g.add_edge("C", "A", 1);
        let mut seen = Vec::new();
        depth_first(&mut g, "A", |label| seen.push(label.to_string())).unwrap();
        assert_eq!(seen, vec!["A", "B", "C"]);
    }
}
