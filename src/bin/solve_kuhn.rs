//! Kuhn poker training driver.
//!
//! Usage:
//!   cargo run --release --bin solve_kuhn -- [OPTIONS]
//!
//! Options:
//!   --iterations <N>     Training iterations (default: 10000)
//!   --output <FILE>      Write the strategy report as JSON (optional)

use std::env;
use std::process;

use indicatif::{ProgressBar, ProgressStyle};

use kuhn_cfr::{CfrSolver, SolveReport, TrainConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = TrainConfig::default();
    let mut output_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-i" => {
                i += 1;
                if i < args.len() {
                    match args[i].parse() {
                        Ok(n) => config = config.with_iterations(n),
                        Err(_) => {
                            eprintln!("Invalid iteration count: {}", args[i]);
                            process::exit(1);
                        }
                    }
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    }

    println!("=================================================");
    println!("  Kuhn Poker Vanilla CFR Solver");
    println!("=================================================");
    println!();
    println!("Iterations: {}", config.iterations);
    if let Some(path) = &output_file {
        println!("Output: {}", path);
    }
    println!();

    let mut solver = CfrSolver::new();
    let bar = ProgressBar::new(config.iterations);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    let mut total_value = 0.0;

    for iteration in 1..=config.iterations {
        total_value += solver.run_iteration();
        bar.inc(1);

        if iteration % config.report_interval == 0 {
            bar.set_message(format!("EV {:+.4}", total_value / iteration as f64));
        }
    }

    bar.finish_and_clear();

    let game_value = total_value / config.iterations as f64;
    let report = SolveReport::from_solver(&solver, game_value);
    report.print();

    if let Some(path) = &output_file {
        match report.save_json(path) {
            Ok(()) => {
                println!();
                println!("Report saved to {}", path);
            }
            Err(e) => {
                eprintln!("Error saving report: {}", e);
                process::exit(1);
            }
        }
    }
}

fn print_help() {
    println!("Kuhn Poker Vanilla CFR Solver");
    println!();
    println!("Usage: solve_kuhn [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -i, --iterations <N>     Training iterations (default: 10000)");
    println!("  -o, --output <FILE>      Write the strategy report as JSON");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Solve with the default 10k iterations");
    println!("  solve_kuhn");
    println!();
    println!("  # Longer run, exporting the strategy tables");
    println!("  solve_kuhn --iterations 100000 --output kuhn.json");
}
