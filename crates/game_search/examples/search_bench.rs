//! Search benchmark for profiling with cargo-flamegraph.
//!
//! Compares node counts and speed of each strategy on a few tic-tac-toe
//! positions.
//!
//! Usage:
//!   cargo flamegraph --example search_bench -p game_search -- [depth] [board]
//!
//! Examples:
//!   # Default: depth 9 on every test position
//!   cargo run --release --example search_bench -p game_search
//!
//!   # Custom depth and position, X to move
//!   cargo run --release --example search_bench -p game_search -- 6 "X...O...."
//!
//!   # Per-node trace of a single position
//!   RUST_LOG=game_search::trace=trace cargo run --example search_bench -p game_search -- 3 "XX.OO...."

use std::env;
use std::time::Instant;

use game_search::{
    GameAdapter, Perspective, Score, SearchEngine, Strategy, TracingObserver, perft,
};
use tracing_subscriber::EnvFilter;

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Empty board", "........."),
    ("Centre opening", "....X...."),
    ("Corner reply", "O...X...."),
    ("Fork threat", "X...O...X"),
];

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone)]
struct Board {
    cells: [Option<Perspective>; 9],
}

impl Board {
    fn parse(s: &str) -> Self {
        let mut cells = [None; 9];
        for (cell, c) in cells.iter_mut().zip(s.chars()) {
            *cell = match c {
                'X' => Some(Perspective::Maximizer),
                'O' => Some(Perspective::Minimizer),
                _ => None,
            };
        }
        Self { cells }
    }

    /// X moves first, so X is to move whenever the counts are even.
    fn side_to_move(&self) -> Perspective {
        let filled = self.cells.iter().filter(|c| c.is_some()).count();
        Perspective::from_maximizing(filled % 2 == 0)
    }

    fn winner(&self) -> Option<Perspective> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line.iter()
                .all(|&i| self.cells[i] == Some(first))
                .then_some(first)
        })
    }
}

impl GameAdapter for Board {
    type Move = usize;

    fn evaluate(&self) -> Score {
        match self.winner() {
            Some(Perspective::Maximizer) => 10,
            Some(Perspective::Minimizer) => -10,
            None => 0,
        }
    }

    fn moves_into(&self, _perspective: Perspective, moves: &mut Vec<usize>) {
        if self.winner().is_none() {
            moves.extend((0..9).filter(|&i| self.cells[i].is_none()));
        }
    }

    fn apply_move(&mut self, perspective: Perspective, mv: &usize) {
        self.cells[*mv] = Some(perspective);
    }

    fn undo_move(&mut self, _perspective: Perspective, mv: &usize) {
        self.cells[*mv] = None;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    // If a board is provided, use single position mode
    if let Some(board) = args.get(2) {
        run_single_position(board, depth);
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(board: &str, depth: u8) {
    let engine = SearchEngine::default();
    let mut pos = Board::parse(board);
    let side = pos.side_to_move();

    println!("Position: {board}");
    println!("Depth: {depth}");
    println!("Perft: {}", perft(&mut pos, side, depth));
    println!();

    for strategy in Strategy::ALL {
        let start = Instant::now();
        let result = engine.search_with_observer(&mut pos, strategy, side, depth, &mut TracingObserver);
        let elapsed = start.elapsed();

        match result {
            Ok(result) => println!(
                "{strategy:<18} move {:?} score {:>3} pv {:?} ({} nodes, {} cutoffs, {elapsed:.3?})",
                result.best_move,
                result.score,
                result.principal_variation,
                result.stats.nodes,
                result.stats.cutoffs,
            ),
            Err(e) => println!("{strategy:<18} failed: {e}"),
        }
    }
}

fn run_all_positions(depth: u8) {
    let engine = SearchEngine::default();

    println!("=== Search Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    for strategy in Strategy::ALL {
        let mut total_nodes = 0u64;
        let mut total_time = std::time::Duration::ZERO;

        println!("{strategy}");
        for (name, board) in TEST_POSITIONS {
            let mut pos = Board::parse(board);
            let side = pos.side_to_move();

            print!("  {name:.<28}");

            let start = Instant::now();
            let result = match engine.search(&mut pos, strategy, side, depth) {
                Ok(result) => result,
                Err(e) => {
                    println!(" failed: {e}");
                    continue;
                }
            };
            let elapsed = start.elapsed();

            total_nodes += result.stats.nodes;
            total_time += elapsed;

            let nps = if elapsed.as_secs_f64() > 0.0 {
                result.stats.nodes as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            };

            println!(
                " {:>9} nodes in {elapsed:>8.3?} ({nps:>10.0} nps) score {:>3}",
                result.stats.nodes, result.score
            );
        }
        println!("  TOTAL: {total_nodes} nodes in {total_time:.3?}");
        println!();
    }
}
