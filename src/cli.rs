// src/cli.rs
//! Command line surface and startup wiring.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;

use crate::config::Config;
use crate::session;
use crate::universe::{self, CostarGraph, Dataset, Universe};

#[derive(Debug, Parser)]
#[command(
    name = "sixdegrees",
    version,
    about = "The Kevin Bacon game over an actor co-appearance network"
)]
pub struct Cli {
    /// Actor ID file, one actorID|actorName per line
    #[arg(long, value_name = "FILE")]
    pub actors: Option<PathBuf>,
    /// Movie ID file, one movieID|movieTitle per line
    #[arg(long, value_name = "FILE")]
    pub movies: Option<PathBuf>,
    /// Credit file, one movieID|actorID per line
    #[arg(long, value_name = "FILE")]
    pub movie_actors: Option<PathBuf>,
    /// Starting center of the universe
    #[arg(long, value_name = "NAME")]
    pub center: Option<String>,
    /// Settings file to read instead of sixdegrees.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print dataset and graph statistics before the session starts
    #[arg(long, short)]
    pub verbose: bool,
}

/// Loads the universe described by flags and config, then hands control to
/// the interactive session on stdin/stdout.
///
/// # Errors
/// Fails on unresolved data file paths, unreadable or malformed data files,
/// or a starting center missing from the dataset.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let actors = resolve_path("--actors", cli.actors.clone(), config.data.actors)?;
    let movies = resolve_path("--movies", cli.movies.clone(), config.data.movies)?;
    let credits = resolve_path(
        "--movie-actors",
        cli.movie_actors.clone(),
        config.data.movie_actors,
    )?;

    let dataset = universe::load_dataset(&actors, &movies, &credits)?;
    let graph = universe::build_costar_graph(&dataset);

    if cli.verbose {
        print_stats(&dataset, &graph);
    }

    let center = cli.center.clone().unwrap_or(config.game.center);
    let mut universe = Universe::new(graph, center.clone())
        .with_context(|| format!("Starting center {center:?} is not in the dataset"))?;

    session::run(&mut universe, io::stdin().lock(), &mut io::stdout())
}

// CLI flag first, then the config file; neither has a built-in default.
fn resolve_path(flag: &str, cli: Option<PathBuf>, file: Option<PathBuf>) -> Result<PathBuf> {
    let Some(path) = cli.or(file) else {
        bail!("No {flag} file given. Pass {flag} or set it in sixdegrees.toml (see --help).");
    };
    Ok(path)
}

fn print_stats(dataset: &Dataset, graph: &CostarGraph) {
    let data = format!(
        "dataset: {} actors, {} movies, {} credits",
        dataset.actors.len(),
        dataset.casts.len(),
        dataset.num_credits()
    );
    let shape = format!(
        "graph: {} vertices, {} directed arcs",
        graph.num_vertices(),
        graph.num_edges()
    );
    println!("{}", data.dimmed());
    println!("{}", shape.dimmed());
}
