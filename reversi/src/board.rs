//! Reversi board: placement legality, flips, and terminal detection.

use std::fmt;

/// Eight scan directions for flip runs.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A piece color. Black moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Black,
    White,
}

impl Piece {
    /// The other color.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BlackWin,
    WhiteWin,
    Tie,
}

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board sizes must be even and at least 4.
    InvalidSize { size: usize },
    /// A row's glyph count does not match the board size.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A glyph other than `.`, `B`, or `W`.
    UnknownCell { row: usize, col: usize, glyph: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "board size must be even and at least 4, got {size}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::UnknownCell { row, col, glyph } => {
                write!(f, "unknown cell glyph {glyph:?} at row {row}, col {col}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A square Reversi position: cells plus the side to move.
///
/// The side to move is part of position identity — two boards with the
/// same cells but different movers compare unequal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
    turn: Piece,
}

impl Board {
    /// The standard 8×8 opening: four center pieces, Black to move.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self {
            size: 8,
            cells: vec![None; 64],
            turn: Piece::Black,
        };
        board.cells[3 * 8 + 3] = Some(Piece::White);
        board.cells[3 * 8 + 4] = Some(Piece::Black);
        board.cells[4 * 8 + 3] = Some(Piece::Black);
        board.cells[4 * 8 + 4] = Some(Piece::White);
        board
    }

    /// An empty `size`×`size` board, Black to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] unless `size` is even and ≥ 4.
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size < 4 || size % 2 != 0 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            turn: Piece::Black,
        })
    }

    /// Parse a position from one string per row: `.` empty, `B` black,
    /// `W` white. The board size is the number of rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for bad dimensions,
    /// [`BoardError::RaggedRow`] for a row of the wrong width, and
    /// [`BoardError::UnknownCell`] for an unrecognized glyph.
    pub fn from_rows(rows: &[&str], turn: Piece) -> Result<Self, BoardError> {
        let mut board = Self::empty(rows.len())?;
        board.turn = turn;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != board.size {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: board.size,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                board.cells[row * board.size + col] = match glyph {
                    '.' => None,
                    'B' => Some(Piece::Black),
                    'W' => Some(Piece::White),
                    _ => return Err(BoardError::UnknownCell { row, col, glyph }),
                };
            }
        }
        Ok(board)
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The side to move.
    #[must_use]
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// The piece at `(row, col)`, if any.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[row * self.size + col]
    }

    /// Number of cells holding `side`.
    #[must_use]
    pub fn count(&self, side: Piece) -> usize {
        self.cells.iter().filter(|c| **c == Some(side)).count()
    }

    /// Number of cells holding `side` on the outer ring of the board.
    #[must_use]
    pub fn boundary_count(&self, side: Piece) -> usize {
        let last = self.size - 1;
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&(row, col)| row == 0 || row == last || col == 0 || col == last)
            .filter(|&(row, col)| self.get(row, col) == Some(side))
            .count()
    }

    /// Whether `side` may place at `(row, col)`.
    #[must_use]
    pub fn is_legal(&self, row: usize, col: usize, side: Piece) -> bool {
        !self.flips_from(row, col, side).is_empty()
    }

    /// All cells where `side` may place, in row-major order.
    #[must_use]
    pub fn legal_placements(&self, side: Piece) -> Vec<(usize, usize)> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.is_legal(row, col, side))
            .collect()
    }

    /// One board per legal placement of `side`, in row-major placement
    /// order; each has the flips applied and the turn passed to the
    /// opponent.
    #[must_use]
    pub fn possible_placements(&self, side: Piece) -> Vec<Self> {
        self.legal_placements(side)
            .into_iter()
            .map(|(row, col)| self.placed(row, col, side))
            .collect()
    }

    /// Every next-turn position for the side to move: its placements, or
    /// a single passed position when it is blocked but the opponent is
    /// not. Empty iff the position is terminal.
    #[must_use]
    pub fn next_positions(&self) -> Vec<Self> {
        let moves = self.possible_placements(self.turn);
        if !moves.is_empty() {
            return moves;
        }
        if self.legal_placements(self.turn.opponent()).is_empty() {
            return Vec::new();
        }
        let mut passed = self.clone();
        passed.turn = self.turn.opponent();
        vec![passed]
    }

    /// `Some` iff the game is over: the board is full or neither side can
    /// place. Winner by piece count; equal counts tie.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        let over = self.cells.iter().all(Option::is_some)
            || (self.legal_placements(Piece::Black).is_empty()
                && self.legal_placements(Piece::White).is_empty());
        if !over {
            return None;
        }
        let black = self.count(Piece::Black);
        let white = self.count(Piece::White);
        Some(match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::BlackWin,
            std::cmp::Ordering::Less => Outcome::WhiteWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    fn placed(&self, row: usize, col: usize, side: Piece) -> Self {
        let mut next = self.clone();
        next.cells[row * self.size + col] = Some(side);
        for idx in self.flips_from(row, col, side) {
            next.cells[idx] = Some(side);
        }
        next.turn = side.opponent();
        next
    }

    /// Indices of opponent pieces flipped by `side` placing at
    /// `(row, col)`: for each direction, a contiguous opponent run
    /// terminated by an own piece. Empty for occupied or non-flipping
    /// cells (a placement must flip at least one piece to be legal).
    fn flips_from(&self, row: usize, col: usize, side: Piece) -> Vec<usize> {
        if self.cells[row * self.size + col].is_some() {
            return Vec::new();
        }
        let mut flips = Vec::new();
        #[allow(clippy::cast_possible_wrap)]
        for &(dr, dc) in &DIRECTIONS {
            let mut run = Vec::new();
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            while let Some(idx) = self.cell_index(r, c) {
                match self.cells[idx] {
                    Some(p) if p == side => {
                        flips.extend(run);
                        break;
                    }
                    Some(_) => run.push(idx),
                    None => break,
                }
                r += dr;
                c += dc;
            }
        }
        flips
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn cell_index(&self, row: i32, col: i32) -> Option<usize> {
        let size = self.size as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(row as usize * self.size + col as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let glyph = match self.get(row, col) {
                    None => '.',
                    Some(Piece::Black) => 'B',
                    Some(Piece::White) => 'W',
                };
                write!(f, "{glyph}")?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
