use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, ArgAction, Parser};
use topo_repository::{RepoError, Repository};
use topo_revwalk::{build_graph, render, topo_order};
use tracing_subscriber::EnvFilter;

/// Print every commit reachable from a local branch, newest first, in a
/// deterministic topological order.
#[derive(Parser)]
#[command(name = "topo-order-commits", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Run as if started in <path>
    #[arg(short = 'C')]
    change_dir: Option<PathBuf>,

    /// Use <path> as the .git directory instead of searching for one
    #[arg(long = "git-dir")]
    git_dir: Option<PathBuf>,

    /// Log progress to stderr; repeat for more detail (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(128),
            }
        }
    };

    init_logging(cli.verbose);

    if let Some(dir) = &cli.change_dir {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("fatal: cannot change to '{}': {}", dir.display(), e);
            process::exit(128);
        }
    }

    if let Err(e) = run(&cli) {
        process::exit(report(&e));
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let repo = match &cli.git_dir {
        Some(git_dir) => Repository::open(git_dir)?,
        None => Repository::discover(std::env::current_dir()?)?,
    };
    tracing::info!(git_dir = %repo.git_dir().display(), "using repository");

    let branches = repo.branch_heads().context("reading branch heads")?;
    let store = repo.objects();
    let graph = build_graph(&store, branches.commits()).context("building commit graph")?;
    let order = topo_order(&graph);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out, &graph, &order, &branches)?;
    out.flush()?;
    Ok(())
}

/// Print a diagnostic for `err` and pick the exit status.
fn report(err: &anyhow::Error) -> i32 {
    if let Some(RepoError::NotFound(_)) = err.downcast_ref::<RepoError>() {
        eprintln!("Not inside a Git repository");
        return 1;
    }
    if let Some(io_err) = err.downcast_ref::<io::Error>() {
        if io_err.kind() == io::ErrorKind::BrokenPipe {
            return 0;
        }
    }
    eprintln!("fatal: {err:#}");
    128
}
