use std::env;
use std::process;

use vc_buckets::cover::{self, Cover, Heuristic};
use vc_buckets::error::BucketError;
use vc_buckets::io::{self, GraphInput};

const USAGE: &str = "usage: vcover <graph-file> [max|min|two|all]";

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = match args.get(1) {
        Some(path) => path,
        None => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };
    let selection = args.get(2).map(String::as_str).unwrap_or("all");
    let heuristics: &[Heuristic] = match selection {
        "max" => &[Heuristic::MaxDegree],
        "min" => &[Heuristic::MinDegree],
        "two" => &[Heuristic::TwoApprox],
        "all" => &[
            Heuristic::MaxDegree,
            Heuristic::MinDegree,
            Heuristic::TwoApprox,
        ],
        other => {
            eprintln!("unknown heuristic `{other}`");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let input = match io::load(path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("vcover: {path}: {err}");
            process::exit(1);
        }
    };
    println!(
        "{path}: {} vertices, {} edges",
        input.vertices,
        input.edges.len()
    );

    for &heuristic in heuristics {
        match run(&input, heuristic) {
            Ok(cover) => {
                let verified = if cover.verify(input.vertices, input.pairs()) {
                    "valid"
                } else {
                    "INVALID"
                };
                println!("{cover} [{verified}]");
            }
            Err(err) => {
                eprintln!("vcover: {heuristic} failed: {err}");
                process::exit(1);
            }
        }
    }
}

fn run(input: &GraphInput, heuristic: Heuristic) -> Result<Cover, BucketError> {
    let mut graph = input.build()?;
    match heuristic {
        Heuristic::MaxDegree => cover::max_degree::solve(&mut graph),
        Heuristic::MinDegree => cover::min_degree::solve(&mut graph),
        Heuristic::TwoApprox => cover::two_approx::solve(&mut graph),
    }
}
