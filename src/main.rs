use std::fs;

use clap::Parser;
use durham::get_result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// durham runs programs written in Durham, the language of college names.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells durham to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Logs interpreter activity to stderr. Without it, `RUST_LOG` decides.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("durham=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let result = get_result(&script);
    if result.success {
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
    } else {
        eprintln!("{}", result.output);
        std::process::exit(1);
    }
}
