//! CLI entry point: load a file of Boolean-algebra expressions, then search
//! for a shortest sequence of axiom rewrites from `START` to `TARGET`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use expr::parse;
use search::{find_shortest_path_with_cap, SearchOutcome};

const DEFAULT_MAX_DEPTH: usize = 6;
const DEFAULT_MAX_SIZE: usize = 64;
const VISITED_CAP_CEILING: usize = 4_000_000;

#[derive(Parser, Debug)]
#[command(name = "boolproof", about = "Proof search engine for Boolean-algebra identities")]
struct Cli {
    /// File of Boolean-algebra expressions, one per line (blank lines and
    /// lines starting with '#' are skipped).
    file: PathBuf,

    /// Starting expression.
    start: String,

    /// Target expression.
    target: String,

    /// Maximum number of rewrite steps to search.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum node count of any intermediate expression.
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Print one progress line per pipeline phase to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = load_and_echo(&cli.file, cli.verbose) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let start = match parse(&cli.start) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: could not parse START: {e}");
            std::process::exit(1);
        }
    };
    let target = match parse(&cli.target) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: could not parse TARGET: {e}");
            std::process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("[search] start = {}", expr::print(&start));
        eprintln!("[search] target = {}", expr::print(&target));
        eprintln!("[search] max_depth = {}, max_size = {}", cli.max_depth, cli.max_size);
    }

    let visited_cap = derive_visited_cap(cli.max_depth);
    let outcome =
        find_shortest_path_with_cap(&start, &target, cli.max_depth, cli.max_size, visited_cap, &|| false);

    match outcome {
        SearchOutcome::Found(steps) => {
            println!("#0 {}", expr::print(&start));
            for (i, step) in steps.iter().enumerate() {
                println!("#{} {} w/ {}", i + 1, expr::print(&step.expr), step.axiom);
            }
        }
        SearchOutcome::NotFound => {
            println!("not found within max_depth={} max_size={}", cli.max_depth, cli.max_size);
        }
    }

    Ok(())
}

/// Reads `path` line-by-line, skipping blank lines and `#`-prefixed
/// comments, parsing and echoing every remaining line to validate the file
/// (mirroring a loader that skips comments before tokenizing each line).
fn load_and_echo(path: &PathBuf, verbose: bool) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse(trimmed) {
            Ok(e) => {
                if verbose {
                    eprintln!("[load] line {}: {}", lineno + 1, expr::print(&e));
                }
            }
            Err(e) => bail!("{}:{}: {}", path.display(), lineno + 1, e),
        }
    }
    Ok(())
}

/// Derives the visited-set cap from `max_depth`: deeper
/// searches are allowed a proportionally larger visited set, clamped to a
/// hard ceiling so a large `--max-depth` alone can't exhaust memory.
fn derive_visited_cap(max_depth: usize) -> usize {
    4_usize
        .saturating_pow(max_depth.saturating_add(1) as u32)
        .min(VISITED_CAP_CEILING)
}
