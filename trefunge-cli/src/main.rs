//! Trefunge CLI: load a program directory and run it on the terminal.
//!
//! Exit codes:
//! - 0: Program halted with `@`
//! - 1: Usage, load, or trace-file error
//! - 3: Runtime error

mod commands;

use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    if matches!(args[1].as_str(), "--help" | "-h" | "help") {
        print_usage();
        process::exit(0);
    }

    if let Err(code) = commands::run(&args[1..]) {
        process::exit(code);
    }
}

/// Diagnostics go to stderr so they never mix with program output.
/// `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    eprintln!("Usage: trefunge <program-dir> [options]");
    eprintln!();
    eprintln!("Runs the layer files (0.3f, 1.3f, _1.3f, ...) in <program-dir>,");
    eprintln!("starting at the top-left of layer 0.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --trace <file>   Write the stack before every step to <file>");
    eprintln!("  --seed <n>       Seed the random direction instruction '?'");
    eprintln!("  -h, --help       Show this message");
}
