//! Move selection heuristic.
//!
//! Each stored shape votes for the empty cells it still needs on the live
//! board, with a weight inversely proportional to how many cells are still
//! missing. Two situations bypass the vote:
//!
//! - **Offense**: the learner is one cell away from completing a stored
//!   shape, so that cell is played.
//! - **Defense**: the opponent has filled all but one cell of a stored shape,
//!   so that cell is blocked.
//!
//! There is no lookahead: the decision only depends on the current board and
//! the stored shapes.

use rand::Rng;
use tracing::trace;

use crate::error::{Error, Result};
use crate::game::core::{Cell, Grid};
use crate::game::session::Session;
use crate::game::variant::Oracle;
use crate::learning::database::Database;

/// Why a cell was chosen without weighing the alternatives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Forced {
    /// Completes a stored winning shape.
    Offense,
    /// Blocks the opponent from completing a stored winning shape.
    Defense,
}

/// Result of scoring a live board against the database.
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// A single cell has to be played.
    Forced {
        /// Cell to play.
        index: usize,
        /// Which pass forced it.
        reason: Forced,
    },
    /// Accumulated weight of every cell, indexed like the board.
    Weights(Vec<f64>),
}

/// Scores the cells of `grid` against the stored shapes.
///
/// The offense pass runs over all records before the defense pass, so a
/// winning move always takes priority over a block.
///
/// # Errors
///
/// If the board and the database have different sizes.
pub fn evaluate(database: &Database, grid: &Grid) -> Result<Evaluation> {
    check_size(database, grid)?;
    let learner = grid.footprint(Cell::Learner);
    let opponent = grid.footprint(Cell::Opponent);
    let open = grid.footprint(Cell::Empty);

    let mut weights = vec![0.0; grid.size()];
    for record in database {
        let shape = record.footprint();
        let need = (shape - learner).count();
        for index in shape & open {
            if need == 1 {
                trace!(index, record = %record, "completing a known shape");
                return Ok(Evaluation::Forced {
                    index,
                    reason: Forced::Offense,
                });
            }
            weights[index] += 1.0 / f64::from(need);
        }
    }
    for record in database {
        let shape = record.footprint();
        if (shape - opponent).count() != 1 {
            continue;
        }
        if let Some(index) = (shape & open).iter().next() {
            trace!(index, record = %record, "blocking a known shape");
            return Ok(Evaluation::Forced {
                index,
                reason: Forced::Defense,
            });
        }
    }
    Ok(Evaluation::Weights(weights))
}

fn check_size(database: &Database, grid: &Grid) -> Result<()> {
    if grid.size() != database.size() {
        return Err(Error::TypeMismatch {
            expected: database.size(),
            actual: grid.size(),
        });
    }
    Ok(())
}

/// Picks the index with the largest weight among the empty cells.
///
/// The running best starts at cell 0. If cell 0 is already marked, the first
/// empty cell replaces it unconditionally; afterwards only a strictly larger
/// weight does, so ties go to the lowest index.
fn best_cell(grid: &Grid, weights: &[f64]) -> usize {
    let mut best = 0;
    let mut max = weights[0];
    for index in grid.footprint(Cell::Empty).iter().filter(|&index| index > 0) {
        if best == 0 && grid.cell(0) != Cell::Empty {
            best = index;
            max = weights[index];
        } else if weights[index] > max {
            best = index;
            max = weights[index];
        }
    }
    best
}

/// Chooses the learner's next move on the live board.
///
/// With an empty database the move is a uniformly random empty cell.
/// Otherwise the move comes from [`evaluate`].
///
/// The board must have at least one empty cell: [`crate::manager::Manager`]
/// never asks for a move on a full board.
///
/// # Errors
///
/// If the database is for a different variant, or the database is empty and
/// the board is full.
pub fn select_move<O: Oracle, R: Rng + ?Sized>(
    database: &Database,
    session: &Session<O>,
    rng: &mut R,
) -> Result<usize> {
    let grid = session.grid();
    check_size(database, grid)?;
    if database.is_empty() {
        return session.random_open_cell(rng);
    }
    match evaluate(database, grid)? {
        Evaluation::Forced { index, .. } => Ok(index),
        Evaluation::Weights(weights) => Ok(best_cell(grid, &weights)),
    }
}
