use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use postmerge::errors::PostmergeError;
use postmerge::intersect::intersect_all;
use postmerge::{Algorithm, PostingList};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "intersect",
    version,
    about = "A program to intersect posting lists."
)]
struct Args {
    /// Posting-list files, intersected from left to right.
    #[clap(required = true)]
    files: Vec<PathBuf>,

    /// Intersection algorithm: basic, less-conditional, sentinel,
    /// binary-search, galloping, skip-pointers, or hybrid.
    #[clap(short = 'a', long, default_value = "hybrid")]
    algorithm: Algorithm,

    /// Number of skip pointers per list, used by `skip-pointers`.
    #[clap(long, default_value_t = 1000)]
    skip_pointers: usize,

    /// Ratio of list lengths from which `hybrid` gallops.
    #[clap(long)]
    hybrid_threshold: Option<usize>,

    /// Reads the input files as zstd-compressed.
    #[clap(long)]
    zstd: bool,

    /// Reports progress on stderr.
    #[clap(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum IntersectError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Postmerge(#[from] PostmergeError),
}

fn main() -> Result<(), IntersectError> {
    let args = Args::parse();

    let filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let algorithm = match (args.algorithm, args.hybrid_threshold) {
        (Algorithm::Hybrid(h), Some(threshold)) => Algorithm::Hybrid(h.with_threshold(threshold)),
        (algorithm, _) => algorithm,
    };
    let layout = algorithm.layout(args.skip_pointers);

    let mut lists = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let list = if args.zstd {
            PostingList::from_zstd(path, layout)?
        } else {
            PostingList::from_path(path, layout)?
        };
        log::info!("loaded {} postings from {}", list.real_len(), path.display());
        lists.push(list);
    }

    let result = intersect_all(&lists, &algorithm).unwrap_or_default();
    log::info!("{} postings intersected with {}", result.len(), algorithm);

    let mut out = BufWriter::new(io::stdout().lock());
    for p in &result {
        writeln!(out, "{}\t{}", p.id, p.score)?;
    }
    out.flush()?;

    Ok(())
}
