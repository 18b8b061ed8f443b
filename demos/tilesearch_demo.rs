//! Animate a grid search in the terminal.
//!
//! Run: cargo run --bin tilesearch-demo -- --algorithm ucs --seed 7

use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilesearch_core::{Grid, GridConfig, Position};
use tilesearch_demos::Board;
use tilesearch_paths::{Algorithm, HeuristicKind, Search, SearchConfig};

#[derive(Parser)]
#[command(name = "tilesearch-demo")]
#[command(version, about = "Step through BFS, DFS, uniform-cost, best-first and A* on a tile grid")]
struct Cli {
    /// Search algorithm (bfs, dfs, ucs, best-first, astar)
    #[arg(short, long, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,

    /// Heuristic for best-first and A* (manhattan, euclidean)
    #[arg(short = 'H', long, default_value_t = HeuristicKind::Euclidean)]
    heuristic: HeuristicKind,

    /// Seed for obstacle placement and depth-first shuffling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rows of a generated grid
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Columns of a generated grid
    #[arg(short, long, default_value_t = 10)]
    columns: usize,

    /// Fraction of generated tiles made impassable
    #[arg(short, long, default_value_t = 0.2)]
    obstacles: f64,

    /// Read the grid from an ASCII layout instead ('.' floor, '#' wall, 1-9 weights)
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Start tile as ROW,COL
    #[arg(long, value_parser = parse_position, default_value = "0,0")]
    start: Position,

    /// Goal tile as ROW,COL (defaults to the opposite corner)
    #[arg(long, value_parser = parse_position)]
    goal: Option<Position>,

    /// Explore every reachable tile without a goal (bfs, dfs, ucs)
    #[arg(short, long)]
    traverse: bool,

    /// Pause between frames
    #[arg(short, long, value_name = "MS", default_value_t = 60)]
    delay: u64,
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok(Position::new(row, col))
}

fn load_grid(cli: &Cli, seed: u64) -> Result<Grid, Box<dyn Error>> {
    if let Some(path) = &cli.layout {
        let text = std::fs::read_to_string(path)?;
        return Ok(Grid::parse(&text)?);
    }
    let config = GridConfig {
        rows: cli.rows,
        columns: cli.columns,
        obstacle_ratio: cli.obstacles,
    };
    let corner = Position::new(cli.rows.saturating_sub(1), cli.columns.saturating_sub(1));
    let keep = [cli.start, cli.goal.unwrap_or(corner)];
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(config.build(&mut rng, &keep)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("using seed {seed}");

    let grid = load_grid(&cli, seed)?;
    let goal = if cli.traverse {
        None
    } else {
        let corner = Position::new(grid.rows() - 1, grid.cols() - 1);
        Some(cli.goal.unwrap_or(corner))
    };
    let config = SearchConfig {
        algorithm: cli.algorithm,
        heuristic: cli.heuristic,
        seed: Some(seed),
    };

    let mut search = Search::from_config(&grid, cli.start, goal, &config)?;
    let mut board = Board::new(&grid, cli.start, goal);
    let delay = Duration::from_millis(cli.delay);
    while !search.is_finished() {
        for event in search.step() {
            board.apply(event);
        }
        // clear screen and home the cursor
        print!("\x1b[2J\x1b[H");
        println!("{} | expansions: {}", config.algorithm, board.visited());
        println!("{}", board.render());
        if !search.is_finished() {
            thread::sleep(delay);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
