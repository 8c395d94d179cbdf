use clap::{ArgAction, Parser, Subcommand};
use sm_matrix::DEFAULT_NAIVE_THRESHOLD;
use sm_samples::SampleKind;

#[derive(Parser, Debug)]
#[command(name = "sm")]
#[command(author, version, about = "Strassen matrix multiplication demos", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Largest chunk rank multiplied naively
    #[arg(
        short,
        long,
        global = true,
        env = "SM_NAIVE_THRESHOLD",
        default_value_t = DEFAULT_NAIVE_THRESHOLD
    )]
    pub threshold: u32,

    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the available samples
    List,

    /// Run one or more samples and print the operands and product
    Run {
        /// Samples to run (see `sm list`)
        #[arg(value_name = "SAMPLE", default_value = "random-small")]
        samples: Vec<SampleKind>,

        /// Run every sample
        #[arg(long, conflicts_with = "samples")]
        all: bool,

        /// Seed for the random samples
        #[arg(long)]
        seed: Option<u64>,

        /// Use the naive multiplier instead of the Strassen dispatcher
        #[arg(long)]
        naive: bool,
    },

    /// Time Strassen against naive multiplication over a grid of sizes
    Bench {
        /// Matrix sides; every point has at least one side equal to the smallest
        #[arg(long, value_delimiter = ',', default_value = "8,600,800,1000,1200")]
        sizes: Vec<usize>,

        /// Value every cell is filled with
        #[arg(long, default_value_t = 2.0)]
        fill: f64,
    },
}

impl Cli {
    /// Initialize logging based on verbosity. `RUST_LOG` takes precedence.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .format_target(false)
            .init();
    }
}
