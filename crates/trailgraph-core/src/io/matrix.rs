//! # Dense matrix
//!
//! One row per line, whitespace separated non-negative integers. Row `i`,
//! column `j` is the number of edges from vertex `i + 1` to vertex `j + 1`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::AdjacencyList;

/// Read a square multiplicity matrix. Blank lines are skipped.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<Vec<Vec<u32>>> {
    let mut rows: Vec<Vec<u32>> = Vec::new();
    let mut line_numbers: Vec<usize> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|e| GraphError::parse(index + 1, token, e))
            })
            .collect::<Result<Vec<u32>>>()?;
        rows.push(row);
        line_numbers.push(index + 1);
    }

    let size = rows.len();
    if let Some((line, row)) = line_numbers
        .iter()
        .zip(&rows)
        .find(|(_, row)| row.len() != size)
    {
        return Err(GraphError::parse(
            *line,
            format!("{} columns", row.len()),
            format!("matrix must be square ({size} rows)"),
        ));
    }

    Ok(rows)
}

/// Read a matrix from a file
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u32>>> {
    read_matrix(BufReader::new(File::open(path)?))
}

/// Read a matrix file straight into an adjacency list
pub fn read_adjacency_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyList> {
    let start = Instant::now();
    let matrix = read_matrix_file(path)?;
    crate::trace_time!(start, "read_matrix_file", rows = matrix.len());
    let adjacency = AdjacencyList::from_matrix(&matrix);
    tracing::debug!(
        rows = matrix.len(),
        vertices = adjacency.len(),
        edges = adjacency.edge_count(),
        "loaded matrix"
    );
    Ok(adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_read_matrix() {
        let matrix = read_matrix(Cursor::new("0 2 1\n\n0 0 1\n0 0 0\n")).unwrap();
        assert_eq!(matrix, vec![vec![0, 2, 1], vec![0, 0, 1], vec![0, 0, 0]]);
    }

    #[test]
    fn test_ragged_matrix() {
        let err = read_matrix(Cursor::new("0 1\n0\n")).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_negative_cell() {
        let err = read_matrix(Cursor::new("0 -1\n0 0\n")).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_read_adjacency_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, "0 1 1\n0 0 1\n0 0 0\n").unwrap();

        let adjacency = read_adjacency_file(&path).unwrap();
        assert_eq!(adjacency.successors(1), Some(&[2, 3][..]));
        assert_eq!(adjacency.successors(3), None);
    }
}
