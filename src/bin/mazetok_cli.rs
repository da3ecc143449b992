//! Turn one delimited maze blob into a JSON training record.
//!
//! Examples:
//!   mazetok-cli sample.txt
//!   cat sample.txt | mazetok-cli -
//!   mazetok-cli --seed 7 --max-wrong 3 sample.txt
//!
//! The record carries the prompt, the chain-of-thought steps, the step
//! instructions, the golden answer, and the sampled wrong paths.

use mazetok::cot;
use mazetok::distractor;
use mazetok::input::MazeInput;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::io::Read as _;
use std::process;
use tracing::info;

#[derive(Debug, Serialize)]
struct TrainingRecord {
    prompt: String,
    cot_steps: Vec<String>,
    instructions: Vec<String>,
    golden_answer: String,
    wrong_paths: Vec<String>,
}

fn usage() -> ! {
    eprintln!("mazetok-cli: tokenize a maze blob into a training record");
    eprintln!("Usage: mazetok-cli [--seed <u64>] [--max-wrong <steps>] <file | ->\n");
    eprintln!("  --seed <u64>        Wrong-path sampler seed (default 0)");
    eprintln!("  --max-wrong <n>     Longest wrong path, in moves (default 3)");
    eprintln!("  <file | ->          Input blob; '-' reads stdin");
    process::exit(1);
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {msg}");
    process::exit(1);
}

fn parse_args() -> (u64, usize, String) {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let mut seed = 0u64;
    let mut max_wrong = 3usize;

    while args.len() >= 2 && args[0].starts_with("--") {
        match args[0].as_str() {
            "--seed" => {
                seed = args[1]
                    .parse()
                    .unwrap_or_else(|_| fail("--seed takes an unsigned integer"));
            }
            "--max-wrong" => {
                max_wrong = args[1]
                    .parse()
                    .unwrap_or_else(|_| fail("--max-wrong takes a positive integer"));
            }
            _ => usage(),
        }
        args.drain(0..2);
    }

    if args.len() != 1 {
        usage();
    }
    (seed, max_wrong, args.remove(0))
}

fn read_blob(source: &str) -> String {
    if source == "-" {
        let mut blob = String::new();
        if std::io::stdin().read_to_string(&mut blob).is_err() {
            fail("could not read stdin");
        }
        blob
    } else {
        fs::read_to_string(source).unwrap_or_else(|e| fail(&format!("read {source}: {e}")))
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let (seed, max_wrong, source) = parse_args();
    let blob = read_blob(&source);

    let input = MazeInput::extract(&blob).unwrap_or_else(|e| fail(&e.to_string()));
    let seq = cot::generate_from_strs(&input.adjacency, &input.origin, &input.target, &input.path)
        .unwrap_or_else(|e| fail(&e.to_string()));

    let mut rng = SmallRng::seed_from_u64(seed);
    let wrong_paths = distractor::sample_wrong_paths_from_strs(
        &input.adjacency,
        &input.origin,
        &input.path,
        max_wrong,
        &mut rng,
    )
    .unwrap_or_else(|e| fail(&e.to_string()));

    info!(
        steps = seq.cot_steps.len(),
        wrong_paths = wrong_paths.len(),
        "maze tokenized"
    );

    let record = TrainingRecord {
        prompt: seq.prompt,
        cot_steps: seq.cot_steps,
        instructions: seq.instructions,
        golden_answer: seq.golden_answer,
        wrong_paths,
    };
    match serde_json::to_string(&record) {
        Ok(line) => println!("{line}"),
        Err(e) => fail(&format!("serialize record: {e}")),
    }
}
