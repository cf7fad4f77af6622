//! Normalized snapshots of finished games.

use std::fmt;

use crate::error::{Error, Result};
use crate::game::core::{Cell, Grid, Player};
use crate::game::footprint::Footprint;
use crate::game::session::Session;
use crate::game::variant::Oracle;

/// Immutable copy of a finished board. If the opponent won, the marks are
/// swapped before storing so that [`Cell::Learner`] always denotes the side
/// whose winning shape is recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinishedGame {
    grid: Grid,
    learner: Footprint,
    is_draw: bool,
}

impl FinishedGame {
    /// Freezes a finished session. The session itself is left untouched.
    ///
    /// # Errors
    ///
    /// If the session is still active.
    pub fn new<O: Oracle>(session: &Session<O>) -> Result<Self> {
        if session.is_active() {
            return Err(Error::InvalidState);
        }
        let winner = session.winner();
        let grid = match winner {
            Some(Player::Opponent) => session.grid().flipped(),
            Some(Player::Learner) | None => session.grid().clone(),
        };
        Ok(Self {
            learner: grid.footprint(Cell::Learner),
            grid,
            is_draw: winner.is_none(),
        })
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Stored board, from the winner's perspective.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns true if neither side won.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Cells marked by the winning side.
    #[must_use]
    pub const fn footprint(&self) -> Footprint {
        self.learner
    }

    /// Returns true if every learner cell of `other` is also a learner cell
    /// here, i.e. `other`'s shape is part of this one.
    ///
    /// # Errors
    ///
    /// If the boards have different sizes.
    pub fn contains(&self, other: &Self) -> Result<bool> {
        if self.size() != other.size() {
            return Err(Error::TypeMismatch {
                expected: self.size(),
                actual: other.size(),
            });
        }
        Ok(self.covers(other))
    }

    pub(super) const fn covers(&self, other: &Self) -> bool {
        other.learner.is_subset_of(self.learner)
    }
}

impl fmt::Display for FinishedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
