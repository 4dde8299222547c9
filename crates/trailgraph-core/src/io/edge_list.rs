//! # Weighted edge list
//!
//! Whitespace separated tokens taken three at a time as
//! `source dest weight`. A line may hold any number of tokens and a triple
//! may span lines. There is no header.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use crate::config::LoaderConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Multigraph, VertexId};

/// A token remembered with the line it came from.
struct Token {
    line: usize,
    text: String,
}

fn parse_token<T>(token: &Token) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    token
        .text
        .parse()
        .map_err(|e| GraphError::parse(token.line, token.text.clone(), e))
}

fn parse_weight(token: &Token) -> Result<f64> {
    let weight: f64 = parse_token(token)?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::parse(
            token.line,
            token.text.clone(),
            "weight must be a finite non-negative number",
        ));
    }
    Ok(weight)
}

/// Read raw `(source, dest, weight)` triples.
///
/// Trailing tokens that do not make up a full triple are dropped with a
/// warning, or rejected when `config.strict` is set.
pub fn read_triples<R: BufRead>(
    reader: R,
    config: &LoaderConfig,
) -> Result<Vec<(VertexId, VertexId, f64)>> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(|text| Token {
            line: index + 1,
            text: text.to_string(),
        }));
    }

    let chunks = tokens.chunks_exact(3);
    if let Some(first) = chunks.remainder().first() {
        if config.strict {
            return Err(GraphError::parse(
                first.line,
                first.text.clone(),
                "incomplete edge triple",
            ));
        }
        tracing::warn!(
            line = first.line,
            dropped = chunks.remainder().len(),
            "ignoring incomplete edge triple"
        );
    }

    chunks
        .map(|triple| {
            Ok((
                parse_token(&triple[0])?,
                parse_token(&triple[1])?,
                parse_weight(&triple[2])?,
            ))
        })
        .collect()
}

/// Read a weighted multigraph. Parallel edges get identities 0, 1, … per pair.
pub fn read_edge_list<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Multigraph> {
    let triples = read_triples(reader, config)?;
    let graph = Multigraph::from_triples(triples);
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

/// Read a weighted multigraph from a file
pub fn read_edge_list_file<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Multigraph> {
    let start = Instant::now();
    let graph = read_edge_list(BufReader::new(File::open(path)?), config)?;
    crate::trace_time!(start, "read_edge_list_file", edges = graph.edge_count());
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::find_min_trail;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn lenient() -> LoaderConfig {
        LoaderConfig::default()
    }

    #[test]
    fn test_one_triple_per_line() {
        let input = "1 2 5.0\n1 2 2\n\n2 3 1.5\n";
        let triples = read_triples(Cursor::new(input), &lenient()).unwrap();
        assert_eq!(triples, vec![(1, 2, 5.0), (1, 2, 2.0), (2, 3, 1.5)]);
    }

    #[test]
    fn test_triples_span_lines() {
        let input = "1 2 5.0 1\n2 2.0\n   2 3 1\n";
        let triples = read_triples(Cursor::new(input), &lenient()).unwrap();
        assert_eq!(triples, vec![(1, 2, 5.0), (1, 2, 2.0), (2, 3, 1.0)]);
    }

    #[test]
    fn test_incomplete_triple_dropped() {
        let triples = read_triples(Cursor::new("1 2 3.0\n4 5\n"), &lenient()).unwrap();
        assert_eq!(triples, vec![(1, 2, 3.0)]);
    }

    #[test]
    fn test_incomplete_triple_strict() {
        let strict = LoaderConfig { strict: true };
        let err = read_triples(Cursor::new("1 2 3.0\n4 5\n"), &strict).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_bad_vertex_token() {
        let err = read_triples(Cursor::new("1 x 3.0\n"), &lenient()).unwrap_err();
        match err {
            GraphError::Parse { line, token, .. } => {
                assert_eq!(line, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = read_triples(Cursor::new("1 2 -1\n"), &lenient()).unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn test_empty_input() {
        let graph = read_edge_list(Cursor::new("\n\n"), &lenient()).unwrap();
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_read_edge_list_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("directed_graph.dat");
        std::fs::write(&path, "1 2 5\n1 2 2\n2 3 1\n").unwrap();

        let graph = read_edge_list_file(&path, &lenient()).unwrap();
        assert_eq!(graph.edge_count(), 3);

        let trail = find_min_trail(&graph, 1, 3).unwrap();
        assert_eq!(trail.to_string(), "1 -[1: 2.0]-> 2 -[0: 1.0]-> 3  (total = 3.0)");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_edge_list_file(dir.path().join("absent.dat"), &lenient()).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
