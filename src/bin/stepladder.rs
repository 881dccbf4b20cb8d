use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use stepladder_solver::{find_best_ladder, Dictionary, TileSet, WordGraph};

/// Find the highest scoring word ladder in a dictionary.
///
/// Prints the best ladder's total score on stdout.
#[derive(Parser)]
#[command(name = "stepladder", version, about)]
struct Cli {
    /// Word file with one word per line
    wordfile: String,

    /// Length of the words to consider
    #[arg(short, long)]
    length: usize,

    /// Print timings and the best ladder on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let t0 = Instant::now();
    let dictionary = Dictionary::from_file(&cli.wordfile, cli.length)?;
    let graph = WordGraph::new(dictionary.words(), &TileSet::new());
    if cli.verbose {
        eprintln!("{} built in {:?}", graph, t0.elapsed());
    }

    let t0 = Instant::now();
    let best = find_best_ladder(&graph);
    if cli.verbose {
        eprintln!("search took {:?}", t0.elapsed());
        eprintln!("best ladder ({}):", best.score());
        for (word, score) in best.entries(&graph) {
            eprintln!("{} {}", word, score);
        }
    }

    println!("{}", best.score());
    Ok(())
}
