use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use postmerge::errors::PostmergeError;
use postmerge::{Algorithm, Intersect, ListLayout, PostingList};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "benchmark",
    version,
    about = "A program to time every intersection algorithm over posting lists."
)]
struct Args {
    /// Posting-list files. Every pair of them is intersected in each round.
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Number of timed rounds per algorithm.
    #[clap(short = 'n', long, default_value_t = 10)]
    iterations: u32,

    /// Number of skip pointers per list, used by `skip-pointers`.
    #[clap(long, default_value_t = 1000)]
    skip_pointers: usize,

    /// Reads the input files as zstd-compressed.
    #[clap(long)]
    zstd: bool,

    /// Reports progress on stderr.
    #[clap(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum BenchmarkError {
    #[error("The number of iterations must be positive.")]
    ZeroIterations,

    #[error(transparent)]
    Postmerge(#[from] PostmergeError),
}

fn load(path: &Path, layout: ListLayout, zstd: bool) -> Result<PostingList, PostmergeError> {
    if zstd {
        PostingList::from_zstd(path, layout)
    } else {
        PostingList::from_path(path, layout)
    }
}

/// Intersects every unordered pair of `lists` once, returning the total
/// number of matches.
fn round(algorithm: &Algorithm, lists: &[PostingList]) -> usize {
    let mut matches = 0;
    for (j, l1) in lists.iter().enumerate() {
        for l2 in &lists[..j] {
            matches += std::hint::black_box(algorithm.intersect(l1, l2)).len();
        }
    }
    matches
}

fn main() -> Result<(), BenchmarkError> {
    let args = Args::parse();

    let filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if args.iterations == 0 {
        return Err(BenchmarkError::ZeroIterations);
    }

    for algorithm in Algorithm::ALL {
        let layout = algorithm.layout(args.skip_pointers);
        let lists = args
            .files
            .iter()
            .map(|path| load(path, layout, args.zstd))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("{}: loaded {} lists ({:?})", algorithm, lists.len(), layout);

        // Warm-up round, also used to report the result size.
        let matches = round(&algorithm, &lists);

        let mut elapsed = Duration::ZERO;
        for _ in 0..args.iterations {
            let start = Instant::now();
            round(&algorithm, &lists);
            elapsed += start.elapsed();
        }

        println!(
            "{:<16} {:.3?} per round ({} matches)",
            algorithm.name(),
            elapsed / args.iterations,
            matches
        );
    }

    Ok(())
}
