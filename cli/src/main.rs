mod args;
mod format;
mod render;

use args::Args;
use format::SaveFile;
use log::info;
use polyomino_lib::{Generation, Grid, Symmetry};
use render::Renderer;
use std::{
    error::Error,
    io::{self, IsTerminal},
    process,
};
use tracing_subscriber::EnvFilter;

/// Installs the logger. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Number of shapes with each symmetry, largest groups first.
fn symmetry_breakdown(generation: &Generation) -> Vec<(Symmetry, usize)> {
    let symmetries: Vec<Symmetry> = generation.iter().map(Grid::symmetry).collect();
    Symmetry::ALL
        .into_iter()
        .map(|sym| (sym, symmetries.iter().filter(|&&s| s == sym).count()))
        .filter(|&(_, count)| count > 0)
        .collect()
}

fn report(args: &Args, renderer: &Renderer, generation: &Generation) {
    println!("n = {}: {} polyominoes", generation.size(), generation.len());
    if args.verbosity > 0 {
        let breakdown: Vec<String> = symmetry_breakdown(generation)
            .into_iter()
            .map(|(sym, count)| format!("{}: {}", sym, count))
            .collect();
        println!("  {}", breakdown.join(", "));
    }

    let shapes: Vec<&Grid> = generation
        .iter()
        .filter(|g| args.config.accepts(g.symmetry()))
        .collect();
    if let Some(symmetry) = args.config.symmetry {
        println!("  {} with symmetry {}", shapes.len(), symmetry);
    }
    if !args.count_only && !shapes.is_empty() {
        println!();
        print!("{}", renderer.render(&shapes));
        println!();
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let renderer = Renderer::new(args.columns, args.plain || !io::stdout().is_terminal());
    let mut saved = Vec::new();

    let mut generations = args.config.generations()?;
    while let Some(generation) = generations.next() {
        let generation = generation?;
        if let Some(stats) = generations.stats() {
            info!(
                "{} cells: {} candidates, {} duplicates removed",
                generation.size(),
                stats.candidates,
                stats.rejected
            );
        }
        if args.config.verify {
            generation.verify()?;
        }
        if !args.config.reports(&generation) {
            continue;
        }
        report(&args, &renderer, &generation);
        if args.save.is_some() {
            saved.push(generation);
        }
    }

    if let Some(path) = &args.save {
        format::save(path, &SaveFile { generations: saved })?;
        info!("Saved to {}", path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    init_logging(args.verbosity);
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetromino_symmetries() -> Result<(), polyomino_lib::Error> {
        let tetrominoes = Generation::of_size(4)?;
        let breakdown = symmetry_breakdown(&tetrominoes);
        // O; I; T; S; L.
        assert_eq!(
            breakdown,
            vec![
                (Symmetry::D8, 1),
                (Symmetry::D4Ortho, 1),
                (breakdown[2].0, 1),
                (Symmetry::C2, 1),
                (Symmetry::C1, 1),
            ]
        );
        assert!(matches!(breakdown[2].0, Symmetry::D2Row | Symmetry::D2Col));
        Ok(())
    }
}
