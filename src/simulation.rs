//! Self-play against a random opponent.
//!
//! The opponent moves first and marks a uniformly random empty cell, then the
//! learner answers with the move chosen by [`crate::learning::selector`]. A
//! game ends as soon as a side completes a winning group or the board is full.

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::game::core::Player;
use crate::game::variant::GameVariant;
use crate::learning::database::Database;
use crate::manager::Manager;

/// Plays games and remembers who won each of them.
#[derive(Debug)]
pub struct Simulator<R: Rng> {
    manager: Manager,
    rng: R,
    history: Vec<Option<Player>>,
}

impl<R: Rng> Simulator<R> {
    /// Creates a simulator that has not played any games yet.
    pub fn new(variant: GameVariant, rng: R) -> Self {
        Self {
            manager: Manager::new(variant),
            rng,
            history: Vec::new(),
        }
    }

    /// Winner of every game played so far, `None` for draws.
    /// Winner of every game played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Option<Player>] {
        &self.history
    }

    /// Shapes learned so far.
    #[must_use]
    pub const fn database(&self) -> &Database {
        self.manager.database()
    }

    /// Manager running the games.
    #[must_use]
    pub const fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Plays a single game to the end and returns its winner.
    ///
    /// # Errors
    ///
    /// Propagates failures of the move selection or of the database update;
    /// neither happens for a consistent variant.
    pub fn play_game(&mut self) -> Result<Option<Player>> {
        self.manager.start_game();
        loop {
            let index = self.manager.session().random_open_cell(&mut self.rng)?;
            self.manager.opponent_move(index);
            if self.manager.session().is_decided() {
                break;
            }
            let _ = self.manager.learner_move(&mut self.rng)?;
            if self.manager.session().is_decided() {
                break;
            }
        }
        let winner = self.manager.session().winner();
        self.history.push(winner);
        let _ = self.manager.deactivate()?;
        Ok(winner)
    }

    /// Plays `games` games in a row.
    ///
    /// # Errors
    ///
    /// Stops at the first game that fails, see [`Simulator::play_game`].
    pub fn play(&mut self, games: usize) -> Result<&[Option<Player>]> {
        info!(games, size = self.manager.variant().size(), "starting simulation");
        for _ in 0..games {
            let _ = self.play_game()?;
        }
        info!(
            games,
            records = self.manager.database().len(),
            "simulation finished"
        );
        Ok(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn plays_requested_number_of_games() {
        let mut simulator = Simulator::new(GameVariant::tic_tac_toe(), StdRng::seed_from_u64(1));
        assert_eq!(simulator.play(50).unwrap().len(), 50);
        assert_eq!(simulator.history().len(), 50);
        assert_eq!(simulator.manager().finished_games(), 50);
        // At least someone won a game out of 50, so something was learned.
        assert!(!simulator.database().is_empty());
    }

    #[test]
    fn deterministic_with_seed() {
        let mut first = Simulator::new(GameVariant::tic_tac_toe(), StdRng::seed_from_u64(3));
        let mut second = Simulator::new(GameVariant::tic_tac_toe(), StdRng::seed_from_u64(3));
        assert_eq!(first.play(30).unwrap(), second.play(30).unwrap());
    }

    #[test]
    fn every_game_is_complete() {
        let mut simulator = Simulator::new(GameVariant::big_tac_toe(), StdRng::seed_from_u64(11));
        for _ in 0..20 {
            let winner = simulator.play_game().unwrap();
            let session = simulator.manager().session();
            assert!(!session.is_active());
            assert_eq!(session.winner(), winner);
            assert!(winner.is_some() || session.grid().is_full());
        }
    }
}
