//! Writes the four reference datasets used in the k-center experiments.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use kcenter_datagen::rng::make_rng;
use kcenter_datagen::{
    generate_normal_cluster, generate_rand_uniform, increase_dimensions, UniformParams, WriteMode,
};

/// Generate the example datasets
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output directory, created if missing
    #[arg(default_value = "demos")]
    dir: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    std::fs::create_dir_all(&args.dir)
        .with_context(|| format!("creating {}", args.dir.display()))?;
    let mut rng = make_rng(args.seed);

    // Thirty 2D points, uniform in [0, 30]
    let ex1 = args.dir.join("example1_random_uniform.txt");
    generate_rand_uniform(&UniformParams::new(30, 2, 0.0, 30.0), &ex1, WriteMode::Truncate, &mut rng)?;

    // Fifty 2D points from a standard normal
    let ex2 = args.dir.join("example2_random_normal.txt");
    generate_normal_cluster(50, &ex2, &mut rng)?;

    // Thirty 10D points in three clusters offset by up to 100
    let ex3 = args.dir.join("example3_random_uniform_clustered.txt");
    let clustered = UniformParams::new(30, 10, 0.0, 20.0).clustered(3, 100.0);
    generate_rand_uniform(&clustered, &ex3, WriteMode::Truncate, &mut rng)?;

    // A 2D set lifted to 2 + 5 dimensions
    let ex4o = args.dir.join("example4_original.txt");
    let ex4a = args.dir.join("example4_augmented.txt");
    generate_rand_uniform(&UniformParams::new(20, 2, 0.0, 10.0), &ex4o, WriteMode::Truncate, &mut rng)?;
    increase_dimensions(5, &ex4o, &ex4a, &mut rng)?;

    for path in [&ex1, &ex2, &ex3, &ex4o, &ex4a] {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
