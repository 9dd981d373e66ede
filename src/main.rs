use std::{io::Write, process::ExitCode, sync::OnceLock, time::Instant};

use clap::Parser;
use itertools::Itertools;
use log::{error, info};
use rayon::prelude::*;
use robust_minimisers::{
    kmer::{density, generate_random_string, Density},
    MinimiserError,
};

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Log to stderr with the elapsed time. `RUST_LOG` overrides the level.
fn init_logger(verbose: bool) {
    START_TIME.set(Instant::now()).ok();
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let elapsed = START_TIME.get().map_or(0.0, |t| t.elapsed().as_secs_f64());
            writeln!(buf, "[{elapsed:>8.3}s] {}: {}", record.level(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}

#[derive(clap::Subcommand)]
enum Command {
    /// Density of random minimisers for one (k, w).
    Run {
        /// Kmer length.
        #[arg(short, default_value_t = 21)]
        k: usize,
        /// Number of kmers in a window.
        #[arg(short, default_value_t = 11)]
        w: usize,
        /// Take the minimum of the forward and reverse-complement kmer hash.
        #[arg(long)]
        canonical: bool,
    },
    /// Density for a grid of k and w.
    Eval {
        #[arg(long)]
        canonical: bool,
    },
}

/// Print the density of robust random minimisers on a random text as JSON.
#[derive(clap::Parser)]
struct Args {
    /// Length of the generated random string.
    #[clap(short, default_value_t = 100000)]
    n: usize,
    /// Alphabet size.
    #[clap(short, long, default_value_t = 4)]
    sigma: usize,
    /// Log progress.
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    color_backtrace::install();
    let args = Args::parse();
    init_logger(args.verbose);

    if !(1..=4).contains(&args.sigma) {
        error!("Alphabet size must be between 1 and 4, got {}.", args.sigma);
        return ExitCode::FAILURE;
    }
    let text = &generate_random_string(args.n, args.sigma);
    info!("Generated random text of length {}.", text.len());

    let results = match args.command {
        Command::Run { k, w, canonical } => {
            if k == 0 {
                error!("Kmer length must be positive.");
                return ExitCode::FAILURE;
            }
            density(text, k, w, canonical).map(|d| vec![d])
        }
        Command::Eval { canonical } => {
            let params = [1, 2, 4, 8, 16, 32, 64]
                .into_iter()
                .cartesian_product([2, 4, 8, 16, 32, 64, 128])
                .collect_vec();
            params
                .into_par_iter()
                .map(|(k, w)| {
                    let d = density(text, k, w, canonical)?;
                    info!("k={k} w={w} density={:.3}", d.density);
                    Ok(d)
                })
                .collect::<Result<Vec<Density>, MinimiserError>>()
        }
    };

    match results {
        Ok(results) => {
            let json = serde_json::to_string(&results).expect("densities serialize");
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
