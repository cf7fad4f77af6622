//! A single game being played on one board.

use rand::Rng;

use crate::error::{Error, Result};
use crate::game::core::{Cell, Grid, Player};
use crate::game::variant::{GameVariant, Oracle};

/// One game: a board judged by `O` that accepts moves until it is finished.
/// Finishing is final: a finished session ignores further moves and is never
/// reopened.
#[derive(Clone, Debug)]
pub struct Session<O = GameVariant> {
    oracle: O,
    grid: Grid,
    active: bool,
}

impl<O: Oracle> Session<O> {
    /// Starts a game on an empty board.
    #[must_use]
    pub fn new(oracle: O) -> Self {
        let grid = Grid::empty(oracle.size());
        Self {
            oracle,
            grid,
            active: true,
        }
    }

    /// Starts a game from an arbitrary board state.
    ///
    /// # Errors
    ///
    /// If the board size does not match the oracle.
    pub fn from_grid(oracle: O, grid: Grid) -> Result<Self> {
        if grid.size() != oracle.size() {
            return Err(Error::TypeMismatch {
                expected: oracle.size(),
                actual: grid.size(),
            });
        }
        Ok(Self {
            oracle,
            grid,
            active: true,
        })
    }

    /// Current board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns false once the game is finished.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the cell at `index` for `player`. Moves made after the session is
    /// finished are ignored: the simulation loop may still send one after the
    /// game has ended.
    ///
    /// # Panics
    ///
    /// If `index` is outside of the board.
    pub fn apply(&mut self, index: usize, player: Player) {
        if self.active {
            self.grid.set(index, Cell::from(player));
        }
    }

    /// Ends the game. Calling it again has no effect.
    pub fn finish(&mut self) {
        self.active = false;
    }

    /// Picks one of the empty cells uniformly at random.
    ///
    /// # Errors
    ///
    /// If the board is full.
    pub fn random_open_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        let open = self.grid.footprint(Cell::Empty);
        if open.is_empty() {
            return Err(Error::NoOpenCells);
        }
        let nth = rng.gen_range(0..open.count() as usize);
        open.iter().nth(nth).ok_or(Error::NoOpenCells)
    }

    /// Swaps the learner and the opponent marks on the whole board.
    ///
    /// # Errors
    ///
    /// If the game is still being played: only finished boards may change
    /// perspective.
    pub fn flip(&mut self) -> Result<()> {
        if self.active {
            return Err(Error::InvalidState);
        }
        self.grid = self.grid.flipped();
        Ok(())
    }

    /// Asks the oracle about the current board.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.oracle.winner(&self.grid)
    }

    /// Returns true when a side has won or there are no cells left to mark.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.winner().is_some() || self.grid.is_full()
    }
}
