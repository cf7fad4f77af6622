//! Game primitives commonly used within [`crate::game`] and
//! [`crate::learning`].

use std::fmt::{self, Write};
use std::ops::Not;
use std::str::FromStr;

use anyhow::bail;
use arrayvec::ArrayVec;

use crate::game::footprint::Footprint;

/// Largest supported board: every cell has to fit into a [`Footprint`].
pub const MAX_CELLS: usize = 64;

/// The two sides of a game. The learner is the automated player whose winning
/// shapes are remembered; the opponent is whoever plays against it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Marks the board with `X`.
    Learner,
    /// Marks the board with `O`.
    Opponent,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Learner => Self::Opponent,
            Self::Opponent => Self::Learner,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Cell::from(*self), f)
    }
}

/// State of a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Marked by [`Player::Learner`].
    Learner,
    /// Marked by [`Player::Opponent`].
    Opponent,
    /// Not marked yet.
    #[default]
    Empty,
}

impl Cell {
    /// Swaps the learner and the opponent marks, keeps empty cells.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Learner => Self::Opponent,
            Self::Opponent => Self::Learner,
            Self::Empty => Self::Empty,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Learner => Self::Learner,
            Player::Opponent => Self::Opponent,
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            'X' | 'x' => Ok(Self::Learner),
            'O' | 'o' => Ok(Self::Opponent),
            '.' | '_' => Ok(Self::Empty),
            _ => bail!("cell should be one of 'X', 'O' or '.', got '{symbol}'"),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Learner => 'X',
            Self::Opponent => 'O',
            Self::Empty => ' ',
        })
    }
}

/// Fixed-size sequence of cells. The size is set at construction and never
/// changes afterwards.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: ArrayVec<Cell, MAX_CELLS>,
}

impl Grid {
    /// Creates a board where every cell is [`Cell::Empty`].
    ///
    /// # Panics
    ///
    /// If `size` exceeds [`MAX_CELLS`].
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size <= MAX_CELLS, "grid can hold at most {MAX_CELLS} cells, got {size}");
        Self {
            cells: std::iter::repeat(Cell::Empty).take(size).collect(),
        }
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns the state of the cell at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is outside of the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Set of indices holding the given cell state.
    #[must_use]
    pub fn footprint(&self, cell: Cell) -> Footprint {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, candidate)| **candidate == cell)
            .fold(Footprint::empty(), |footprint, (index, _)| {
                footprint | Footprint::from(index)
            })
    }

    /// Number of cells marked by the learner.
    #[must_use]
    pub fn learner_moves(&self) -> usize {
        self.count(Cell::Learner)
    }

    /// Number of cells marked by the opponent.
    #[must_use]
    pub fn opponent_moves(&self) -> usize {
        self.count(Cell::Opponent)
    }

    /// Number of marked cells.
    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.size() - self.count(Cell::Empty)
    }

    /// Returns true if no cell is left empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Returns a copy of the board with the learner and the opponent marks
    /// swapped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            cells: self.cells.iter().map(|cell| cell.flipped()).collect(),
        }
    }

    fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&candidate| candidate == cell).count()
    }
}

impl TryFrom<&[Cell]> for Grid {
    type Error = anyhow::Error;

    fn try_from(cells: &[Cell]) -> anyhow::Result<Self> {
        if cells.len() > MAX_CELLS {
            bail!("grid can hold at most {MAX_CELLS} cells, got {}", cells.len());
        }
        Ok(Self {
            cells: cells.iter().copied().collect(),
        })
    }
}

impl FromStr for Grid {
    type Err = anyhow::Error;

    /// Parses a compact board description: one symbol per cell (`X`, `O` or
    /// `.`), whitespace is ignored.
    fn from_str(input: &str) -> anyhow::Result<Self> {
        let cells = input
            .chars()
            .filter(|symbol| !symbol.is_whitespace())
            .map(Cell::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Self::try_from(cells.as_slice())
    }
}

impl fmt::Display for Grid {
    /// Dumps the board as a single line of cells followed by `-`, e.g.
    /// `X-O- -` for a three-cell board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}-")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            f.write_char(match cell {
                Cell::Learner => 'X',
                Cell::Opponent => 'O',
                Cell::Empty => '.',
            })?;
        }
        Ok(())
    }
}
