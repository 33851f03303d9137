//! Edge-list ingestion
//!
//! Format: a whitespace-tokenized text source whose first token is an
//! integer edge count, followed by `<start> <end> <weight>` triples until
//! end of input. The count is informational only — ingestion never stops
//! or fails because of it. Malformed trailing data stops ingestion
//! quietly; only transport failures surface as errors.

use crate::error::Result;
use crate::graph::types::LoadReport;
use crate::graph::Graph;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Ingest an edge list from any reader.
pub fn load_edge_list<R: Read>(graph: &mut Graph, mut source: R) -> Result<LoadReport> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    Ok(load_tokens(graph, &text))
}

/// Ingest an edge list from in-memory text.
pub fn load_edge_list_str(graph: &mut Graph, text: &str) -> Result<LoadReport> {
    Ok(load_tokens(graph, text))
}

/// Ingest an edge list from a file.
#[tracing::instrument(skip(graph, path), fields(path = %path.as_ref().display()))]
pub fn load_edge_list_path<P: AsRef<Path>>(graph: &mut Graph, path: P) -> Result<LoadReport> {
    let text = fs::read_to_string(path)?;
    Ok(load_tokens(graph, &text))
}

fn load_tokens(graph: &mut Graph, text: &str) -> LoadReport {
    let mut report = LoadReport::default();
    let mut tokens = text.split_whitespace();

    // Leading token: the declared edge count. A count that fails to parse
    // stops ingestion before any triples, the same way a poisoned input
    // stream would.
    match tokens.next() {
        Some(token) => match token.parse::<i64>() {
            Ok(count) => report.declared = Some(count),
            Err(_) => return report,
        },
        None => return report,
    }

    while let (Some(start), Some(end), Some(weight)) =
        (tokens.next(), tokens.next(), tokens.next())
    {
        let Ok(weight) = weight.parse::<i64>() else {
            break;
        };
        if graph.add_edge(start, end, weight) {
            report.added += 1;
        } else {
            report.rejected += 1;
        }
    }

    debug!(
        declared = report.declared,
        added = report.added,
        rejected = report.rejected,
        "edge list loaded"
    );
    report
}
