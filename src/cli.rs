use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kcenter_datagen::{UniformParams, WriteMode};

/// Generate synthetic point sets for k-center clustering experiments
#[derive(Parser, Debug)]
#[command(name = "kcenter-datagen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed for the random source; omit for a fresh run every time
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Uniform points, optionally clustered and with outliers
    Uniform(UniformArgs),

    /// Standard bivariate normal points (2D)
    Normal {
        /// Number of points
        #[arg(short)]
        n: usize,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Resample a 2D dataset with replacement
    Sample {
        /// Number of samples
        #[arg(short)]
        n: usize,
        /// Source dataset
        #[arg(long)]
        from: PathBuf,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Add dimensions to a 2D dataset
    Augment {
        /// Number of coordinates to add to each point
        #[arg(long)]
        extra: usize,
        /// Source dataset
        #[arg(long)]
        from: PathBuf,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Run a JSON generation plan
    Run {
        /// Plan file
        plan: PathBuf,
    },

    /// Print the largest pairwise distance of a dataset
    MaxDist {
        /// Dataset file
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct UniformArgs {
    /// Number of points, outliers included
    #[arg(short)]
    pub n: usize,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Dimensions per point
    #[arg(short, long, default_value_t = 2)]
    pub dimension: usize,

    /// Lower bound of the value range
    #[arg(long = "min", allow_hyphen_values = true)]
    pub minval: f64,

    /// Upper bound of the value range
    #[arg(long = "max", allow_hyphen_values = true)]
    pub maxval: f64,

    /// Number of offset clusters (0 for none)
    #[arg(long, default_value_t = 0)]
    pub clusters: usize,

    /// Maximum per-cluster offset
    #[arg(long, default_value_t = 0.0)]
    pub cluster_offset: f64,

    /// Turn 2% of the points into far-away outliers
    #[arg(long)]
    pub outliers: bool,

    /// Append to the output file instead of replacing it
    #[arg(long)]
    pub append: bool,
}

impl UniformArgs {
    pub fn params(&self) -> UniformParams {
        let mut params = UniformParams::new(self.n, self.dimension, self.minval, self.maxval)
            .clustered(self.clusters, self.cluster_offset);
        params.outliers = self.outliers;
        params
    }

    pub fn mode(&self) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_uniform() {
        let cli = Cli::try_parse_from([
            "kcenter-datagen", "--seed", "9", "uniform", "-n", "30", "-o", "out.txt", "-d", "10",
            "--min", "-5", "--max", "20", "--clusters", "3", "--cluster-offset", "100", "--outliers",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        let Command::Uniform(args) = cli.command else {
            panic!("expected uniform");
        };
        let params = args.params();
        assert_eq!(params.n, 30);
        assert_eq!(params.dimension, 10);
        assert_eq!(params.minval, -5.0);
        assert_eq!(params.clusters, 3);
        assert!(params.outliers);
        assert_eq!(args.mode(), WriteMode::Truncate);
    }

    #[test]
    fn parses_augment() {
        let cli =
            Cli::try_parse_from(["kcenter-datagen", "augment", "--extra", "3", "--from", "a.txt", "-o", "b.txt"])
                .unwrap();
        assert!(matches!(cli.command, Command::Augment { extra: 3, .. }));
    }
}
