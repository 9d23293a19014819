//! Test adapters shared by the integration tests.

#![allow(dead_code)]

use game_search::{CancellationToken, GameAdapter, Perspective, Score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Explicit game tree
// =============================================================================

/// Interior nodes carry their own static value, used when the search depth
/// runs out above them or a cancelled node falls back to it.
#[derive(Clone, Debug, PartialEq)]
pub enum Tree {
    Leaf(Score),
    Node(Score, Vec<Tree>),
}

pub fn leaves(values: &[Score]) -> Tree {
    Tree::Node(0, values.iter().map(|&v| Tree::Leaf(v)).collect())
}

pub fn node(children: Vec<Tree>) -> Tree {
    Tree::Node(0, children)
}

impl Tree {
    pub fn height(&self) -> u8 {
        match self {
            Tree::Leaf(_) => 0,
            Tree::Node(_, children) => 1 + children.iter().map(Tree::height).max().unwrap_or(0),
        }
    }
}

/// Random tree with up to `max_branching` children per node.
///
/// Nodes above the last level have at least one child with probability
/// 9/10, so terminal positions also appear mid-tree.
pub fn random_tree(rng: &mut StdRng, height: u8, max_branching: usize) -> Tree {
    let value = rng.gen_range(-100..=100);
    if height == 0 || rng.gen_ratio(1, 10) {
        return Tree::Leaf(value);
    }
    let width = rng.gen_range(1..=max_branching);
    let children = (0..width)
        .map(|_| random_tree(rng, height - 1, max_branching))
        .collect();
    Tree::Node(value, children)
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Adapter over a [`Tree`] that checks stack discipline and counts calls.
#[derive(Debug, Clone)]
pub struct TreeGame {
    root: Tree,
    path: Vec<usize>,
    /// Side expected to move next, updated on every apply and undo
    expected: Option<Perspective>,
    /// apply/undo calls indexed by `Perspective::idx`
    pub applied: [u64; 2],
    pub undone: [u64; 2],
    /// Paths at which `evaluate` was called, in order
    pub evaluated: std::cell::RefCell<Vec<Vec<usize>>>,
    cancel_after: Option<(u64, CancellationToken)>,
}

impl TreeGame {
    pub fn new(root: Tree) -> Self {
        Self {
            root,
            path: Vec::new(),
            expected: None,
            applied: [0; 2],
            undone: [0; 2],
            evaluated: std::cell::RefCell::new(Vec::new()),
            cancel_after: None,
        }
    }

    /// Cancel `token` from inside the search once `applies` moves have been played.
    pub fn cancel_after(mut self, applies: u64, token: CancellationToken) -> Self {
        self.cancel_after = Some((applies, token));
        self
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn total_applied(&self) -> u64 {
        self.applied[0] + self.applied[1]
    }

    pub fn total_undone(&self) -> u64 {
        self.undone[0] + self.undone[1]
    }

    pub fn was_evaluated(&self, path: &[usize]) -> bool {
        self.evaluated.borrow().iter().any(|p| p == path)
    }

    fn current(&self) -> &Tree {
        let mut t = &self.root;
        for &i in &self.path {
            match t {
                Tree::Node(_, children) => t = &children[i],
                Tree::Leaf(_) => panic!("path {:?} runs through a leaf", self.path),
            }
        }
        t
    }
}

impl GameAdapter for TreeGame {
    type Move = usize;

    fn evaluate(&self) -> Score {
        self.evaluated.borrow_mut().push(self.path.clone());
        match self.current() {
            Tree::Leaf(v) | Tree::Node(v, _) => *v,
        }
    }

    fn moves_into(&self, _perspective: Perspective, moves: &mut Vec<usize>) {
        if let Tree::Node(_, children) = self.current() {
            moves.extend(0..children.len());
        }
    }

    fn apply_move(&mut self, perspective: Perspective, mv: &usize) {
        // The root side may change between searches; below it sides alternate
        if !self.path.is_empty()
            && let Some(expected) = self.expected
        {
            assert_eq!(perspective, expected, "sides must alternate");
        }
        match self.current() {
            Tree::Node(_, children) if *mv < children.len() => {}
            _ => panic!("move {} is not legal at {:?}", mv, self.path),
        }
        self.path.push(*mv);
        self.expected = Some(perspective.other());
        self.applied[perspective.idx()] += 1;

        if let Some((limit, token)) = &self.cancel_after
            && self.total_applied() >= *limit
        {
            token.cancel();
        }
    }

    fn undo_move(&mut self, perspective: Perspective, mv: &usize) {
        assert_eq!(self.path.pop(), Some(*mv), "undo must mirror the last apply");
        self.expected = Some(perspective);
        self.undone[perspective.idx()] += 1;
    }
}

// =============================================================================
// Tic-tac-toe
// =============================================================================

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

/// X is the maximizer, O the minimizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicTacToe {
    pub cells: [Option<Perspective>; 9],
}

impl TicTacToe {
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Board from a 9-character string of `X`, `O` and `.`.
    pub fn from_board(board: &str) -> Self {
        let mut cells = [None; 9];
        for (i, c) in board.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[i] = match c {
                'X' => Some(Perspective::Maximizer),
                'O' => Some(Perspective::Minimizer),
                _ => None,
            };
        }
        Self { cells }
    }

    pub fn winner(&self) -> Option<Perspective> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line.iter()
                .all(|&i| self.cells[i] == Some(first))
                .then_some(first)
        })
    }
}

impl GameAdapter for TicTacToe {
    type Move = usize;

    fn evaluate(&self) -> Score {
        match self.winner() {
            Some(Perspective::Maximizer) => 10,
            Some(Perspective::Minimizer) => -10,
            None => 0,
        }
    }

    fn moves_into(&self, _perspective: Perspective, moves: &mut Vec<usize>) {
        if self.winner().is_some() {
            return;
        }
        moves.extend((0..9).filter(|&i| self.cells[i].is_none()));
    }

    fn apply_move(&mut self, perspective: Perspective, mv: &usize) {
        assert!(self.cells[*mv].is_none(), "cell {} already taken", mv);
        self.cells[*mv] = Some(perspective);
    }

    fn undo_move(&mut self, perspective: Perspective, mv: &usize) {
        assert_eq!(self.cells[*mv], Some(perspective), "undo of a move never made");
        self.cells[*mv] = None;
    }
}

/// Replays `line` from the adapter's current position, alternating sides.
pub fn replay<A: GameAdapter>(adapter: &mut A, first: Perspective, line: &[A::Move]) {
    let mut side = first;
    for mv in line {
        adapter.apply_move(side, mv);
        side = side.other();
    }
}
