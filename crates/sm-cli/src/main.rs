//! `sm` - runs the sm-matrix demonstrations from the command line.

mod cli;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sm_matrix::{MatMul, MultiplyConfig, NaiveMultiplier, StrassenMultiplier};
use sm_samples::{run_case, seeded_rng, timing_grid, write_table, SampleKind};

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MultiplyConfig::new().with_naive_threshold(cli.threshold);
    let strassen = StrassenMultiplier::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List => {
            for kind in SampleKind::ALL {
                writeln!(out, "{}", kind)?;
            }
        }
        Command::Run {
            samples,
            all,
            seed,
            naive,
        } => {
            let kinds = if all { SampleKind::ALL.to_vec() } else { samples };
            let seed = seed.unwrap_or_else(rand::random);
            info!("random samples use seed {}", seed);
            let mut rng = seeded_rng(seed);

            let naive_backend = NaiveMultiplier::new();
            let backend: &dyn MatMul = if naive { &naive_backend } else { &strassen };

            for (i, kind) in kinds.iter().enumerate() {
                if i > 0 {
                    writeln!(out, "{}", "-".repeat(60))?;
                }
                let case = kind
                    .build(&mut rng)
                    .with_context(|| format!("sample {} could not be built", kind))?;
                let report = run_case(&case, backend, &mut out)
                    .with_context(|| format!("sample {} failed", kind))?;
                if report.matches_expected == Some(false) {
                    anyhow::bail!("sample {} does not match its expected product", kind);
                }
            }
        }
        Command::Bench { sizes, fill } => {
            let naive = NaiveMultiplier::new();
            let rows = timing_grid(&sizes, fill, &[&strassen, &naive])
                .context("timing grid failed")?;
            write_table(&rows, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
