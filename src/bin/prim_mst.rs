use std::env;
use std::fs;
use std::process::ExitCode;

use log::error;

use prim_mst::error::Result;
use prim_mst::graph::{Graph, Prim};
use prim_mst::report;

/// Reads a weight matrix from the input file, runs Prim's algorithm, and
/// writes the rendered tree/forest report to the output file. On a parse or
/// validation failure nothing is written.
fn run(input_path: &str, output_path: &str) -> Result<bool> {
    let raw_text = fs::read_to_string(input_path)?;
    let (matrix, start) = report::parse_input(&raw_text)?;

    let mut graph = Graph::new(matrix);
    if !graph.is_valid() {
        return Ok(false);
    }

    let mut prim = Prim::new(&mut graph);
    match start {
        Some(start) => prim.run_from(start),
        None => prim.run(),
    };

    fs::write(output_path, report::render_report(&graph))?;
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input_path = args.get(1).map(String::as_str).unwrap_or("input.txt");
    let output_path = args.get(2).map(String::as_str).unwrap_or("output.txt");

    match run(input_path, output_path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("No spanning tree computed: the weight matrix is not a valid undirected graph");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
