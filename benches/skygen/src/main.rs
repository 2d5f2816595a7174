//! Times the generation of synthetic skyline datasets over random test cases.

use std::time::Instant;

use clap::Parser;
use rand::prelude::*;

use bench_skygen::timing::{self, Report};
use skygen::{Distribution, TestCase};

/// Average generation time of skyline datasets over random test cases.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The number of random test cases.
    #[arg(short('n'), long, default_value = "100")]
    num_tests: usize,

    /// The number of points generated for each test case.
    #[arg(short('c'), long, default_value = "65536")]
    count: usize,

    /// The dimensionality of each test case is drawn from `1..=max_dim`.
    #[arg(short('d'), long, default_value = "4")]
    max_dim: usize,

    /// The seed for the random number generator. Defaults to the current time.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// Use this distribution for every test case instead of a random one.
    /// `unknown` gives all-zero points.
    #[arg(short('t'), long)]
    distribution: Option<Distribution>,

    /// Also time a parallel run over the same test cases.
    #[arg(short('p'), long)]
    parallel: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    let (_guard, log_path) = bench_skygen::configure_logger("skygen")?;
    println!("Log file: {log_path:?}");

    ftlog::info!("{args:?}");

    let seed = args.seed.unwrap_or_else(skygen::time_seed);
    ftlog::info!("Using seed {seed}.");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut cases = TestCase::random_batch(args.num_tests, args.max_dim, seed, &mut rng).map_err(|e| {
        ftlog::error!("{e}");
        e
    })?;

    if let Some(distribution) = args.distribution {
        if distribution == Distribution::Unknown {
            ftlog::warn!("Unknown distribution. Every test case will produce all-zero points.");
        }
        for case in &mut cases {
            case.distribution = distribution;
        }
    }

    for distribution in Distribution::ALL.into_iter().chain([Distribution::Unknown]) {
        let n = cases.iter().filter(|c| c.distribution == distribution).count();
        if n > 0 {
            ftlog::info!("{n} test cases with {distribution} points.");
        }
    }

    ftlog::info!("Timing {} test cases of {} points each...", cases.len(), args.count);
    let report = timing::benchmark(|case: &TestCase| case.run(args.count), &cases).map_err(|e| {
        ftlog::error!("{e}");
        e
    })?;
    ftlog::info!("{report:?}");

    println!("{}", report.total);
    println!("Average time (us): {}", report.mean_micros);

    if args.parallel {
        ftlog::info!("Timing the same test cases in parallel...");
        let start = Instant::now();
        let datasets = skygen::par_generate(&cases, args.count).map_err(|e| {
            ftlog::error!("{e}");
            e
        })?;
        let total = datasets.iter().map(Vec::len).sum();
        let report = Report::new(total, cases.len(), start.elapsed());
        ftlog::info!("{report:?}");

        println!("{}", report.total);
        println!("Average time in parallel (us): {}", report.mean_micros);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use skygen::Distribution;

    use super::Args;

    #[test]
    fn distribution_argument() {
        let parse = |name: &str| Args::try_parse_from(["bench-skygen", "-t", name]).map(|args| args.distribution);

        assert_eq!(parse("anti-correlated").ok(), Some(Some(Distribution::AntiCorrelated)));
        assert_eq!(parse("unknown").ok(), Some(Some(Distribution::Unknown)));
        assert!(parse("bogus").is_err());

        let args = Args::try_parse_from(["bench-skygen"]).map(|args| args.distribution);
        assert_eq!(args.ok(), Some(None));
    }
}
