mod cli;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use kcenter_datagen::{
    generate_normal_cluster, generate_rand_uniform, increase_dimensions, load_file,
    max_pairwise_distance, rng::make_rng, sample_data, Plan,
};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Uniform(args) => {
            let mut rng = make_rng(cli.seed);
            let ds = generate_rand_uniform(&args.params(), &args.output, args.mode(), &mut rng)?;
            println!("Wrote {} points ({}D) to {}", ds.len(), ds.dimension(), args.output.display());
        }
        Command::Normal { n, output } => {
            let mut rng = make_rng(cli.seed);
            let (xs, _) = generate_normal_cluster(n, &output, &mut rng)?;
            println!("Wrote {} points (2D) to {}", xs.len(), output.display());
        }
        Command::Sample { n, from, output } => {
            let mut rng = make_rng(cli.seed);
            let ds = sample_data(n, &from, &output, &mut rng)?;
            println!("Wrote {} points (2D) to {}", ds.len(), output.display());
        }
        Command::Augment { extra, from, output } => {
            let mut rng = make_rng(cli.seed);
            let ds = increase_dimensions(extra, &from, &output, &mut rng)?;
            println!("Wrote {} points ({}D) to {}", ds.len(), ds.dimension(), output.display());
        }
        Command::Run { plan } => {
            let plan_file = Plan::from_path(&plan)?;
            // --seed on the command line wins over the plan's own
            let mut rng = make_rng(cli.seed.or(plan_file.seed));
            for report in plan_file.run(&mut rng)? {
                println!(
                    "Wrote {} points ({}D) to {}",
                    report.points,
                    report.dimension,
                    report.path.display()
                );
            }
        }
        Command::MaxDist { path } => {
            let ds = load_file(&path)?;
            println!("{}", max_pairwise_distance(ds.points()));
        }
    }

    Ok(())
}
