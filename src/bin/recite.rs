use std::time::Instant;

use recitation::constants::{DEFAULT_PROGRESS_INTERVAL, DEFAULT_SEED, DEFAULT_TARGET};
use recitation::engine::{save_report, RunReport};
use recitation::GameEngine;

struct Args {
    seed: Vec<u32>,
    target: u32,
    progress: u32,
    quiet: bool,
    output: Option<String>,
}

fn parse_seed(s: &str) -> Option<Vec<u32>> {
    s.split(',')
        .map(|part| part.trim().parse::<u32>().ok())
        .collect()
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut seed: Vec<u32> = DEFAULT_SEED.to_vec();
    let mut target = DEFAULT_TARGET;
    let mut progress = DEFAULT_PROGRESS_INTERVAL;
    let mut quiet = false;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = parse_seed(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--target" => {
                i += 1;
                if i < args.len() {
                    target = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --target value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--progress" => {
                i += 1;
                if i < args.len() {
                    progress = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --progress value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--quiet" => {
                quiet = true;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!(
                    "Usage: recite [--seed N,N,...] [--target N] [--progress N] [--quiet] [--output FILE]"
                );
                println!();
                println!("Options:");
                println!(
                    "  --seed N,N,...   Comma-separated seed sequence (default: {})",
                    DEFAULT_SEED
                        .iter()
                        .map(|n| n.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                );
                println!("  --target N       Target turn count (default: {})", DEFAULT_TARGET);
                println!(
                    "  --progress N     Progress interval in turns (default: {})",
                    DEFAULT_PROGRESS_INTERVAL
                );
                println!("  --quiet          Suppress progress output");
                println!("  --output FILE    Write a JSON run report to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: recite [--seed N,N,...] [--target N] [--progress N] [--quiet] [--output FILE]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        seed,
        target,
        progress,
        quiet,
        output,
    }
}

fn main() {
    let args = parse_args();

    let start_time = Instant::now();
    let mut engine = GameEngine::new(&args.seed, args.target).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = if args.quiet {
        engine.run()
    } else {
        engine.run_with_progress(args.progress)
    };

    let elapsed = start_time.elapsed().as_secs_f64();
    println!(
        "Turn {}: spoke {} ({:.2}s, {:.1}M turns/s, {} sparse entries)",
        args.target,
        result,
        elapsed,
        args.target as f64 / elapsed / 1e6,
        engine.history().sparse_len()
    );
    println!("{}", result);

    if let Some(path) = &args.output {
        let report = RunReport::from_run(&args.seed, &engine, start_time);
        if let Err(e) = save_report(&report, path) {
            eprintln!("Failed to write report to {}: {}", path, e);
            std::process::exit(1);
        }
        println!("Report written to {}", path);
    }
}
