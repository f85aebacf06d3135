//! Textual input parsing and result rendering.
//!
//! The expected input format is a header line `n v` (vertex count and
//! 0-based start vertex, where any out-of-range `v` means "pick a random
//! start"), followed by the `n` rows of the weight matrix as space-separated
//! integers. Rendering produces a human-readable report of the computed
//! tree or forest.

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Parses a weight matrix and start vertex from a textual block.
///
/// # Returns
/// * `Ok((matrix, start))` - The parsed matrix and the start vertex, where
///   `None` means the caller should pick a random start
/// * `Err(GraphError)` - On a malformed header, missing or ragged rows, or
///   non-numeric tokens
pub fn parse_input(raw_text: &str) -> Result<(Vec<Vec<i32>>, Option<usize>)> {
    let mut lines = raw_text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| GraphError::malformed_input("empty input"))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [n, start] = fields.as_slice() else {
        return Err(GraphError::malformed_input(format!(
            "expected header 'n v', got '{}'",
            header.trim()
        )));
    };
    let n: usize = n.parse()?;
    let start: i64 = start.parse()?;

    let mut matrix = Vec::with_capacity(n);
    for _ in 0..n {
        let line = lines.next().ok_or_else(|| {
            GraphError::malformed_input(format!("expected {n} matrix rows"))
        })?;
        let row = line
            .split_whitespace()
            .map(|token| token.parse::<i32>().map_err(GraphError::from))
            .collect::<Result<Vec<i32>>>()?;
        if row.len() != n {
            return Err(GraphError::malformed_input(format!(
                "expected {n} columns per row, got {}",
                row.len()
            )));
        }
        matrix.push(row);
    }

    let start = usize::try_from(start).ok().filter(|&s| s < n);
    Ok((matrix, start))
}

/// Renders the result of an algorithm run as a human-readable report: a
/// tree-or-forest headline with the total weight, then the result matrix
/// row by row, space-separated. Invalid graphs render a refusal line.
pub fn render_report(graph: &Graph) -> String {
    let Some((matrix, total_weight)) = graph.result_matrix() else {
        return "Current graph doesn't satisfy Prim algorithm's requirements, \
                therefore it cannot find MST"
            .to_string();
    };

    let mut report = if graph.is_connected() {
        format!("Summary weight of minimum spanning tree - {total_weight}\nMinimum Spanning Tree:\n")
    } else {
        format!("Summary weight of forest - {total_weight}\nForest of MST:\n")
    };
    for row in &matrix {
        let rendered: Vec<String> = row.iter().map(i32::to_string).collect();
        report.push_str(&rendered.join(" "));
        report.push('\n');
    }
    report
}
