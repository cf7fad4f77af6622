//! The manager owns the learned database and the game currently being
//! played. It applies moves for both sides and feeds every finished game back
//! into the database.

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::game::core::Player;
use crate::game::session::Session;
use crate::game::variant::GameVariant;
use crate::learning::database::{Database, Insertion};
use crate::learning::record::FinishedGame;
use crate::learning::selector;

/// How often the database size is reported, in finished games.
const REPORT_INTERVAL: u64 = 200;

/// Runs games of a single variant one after another.
#[derive(Clone, Debug)]
pub struct Manager {
    variant: GameVariant,
    database: Database,
    session: Session,
    finished_games: u64,
}

impl Manager {
    /// Creates a manager with an empty database and a fresh game.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        Self {
            database: Database::new(variant.size()),
            session: Session::new(variant.clone()),
            variant,
            finished_games: 0,
        }
    }

    /// Variant every game of this manager is played on.
    #[must_use]
    pub const fn variant(&self) -> &GameVariant {
        &self.variant
    }

    /// Learned shapes.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// The game currently being played.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Number of games passed to [`Manager::deactivate`] so far.
    #[must_use]
    pub const fn finished_games(&self) -> u64 {
        self.finished_games
    }

    /// Replaces the current game with a fresh one.
    pub fn start_game(&mut self) {
        self.session = Session::new(self.variant.clone());
    }

    /// Replaces the current game with the given one.
    ///
    /// # Errors
    ///
    /// If the session is played on a board of a different size.
    pub fn activate(&mut self, session: Session) -> Result<()> {
        if session.size() != self.variant.size() {
            return Err(Error::TypeMismatch {
                expected: self.variant.size(),
                actual: session.size(),
            });
        }
        self.session = session;
        Ok(())
    }

    /// Marks `index` for the opponent.
    pub fn opponent_move(&mut self, index: usize) {
        self.session.apply(index, Player::Opponent);
    }

    /// Asks the database for the learner's move, plays it and returns the
    /// chosen cell.
    ///
    /// # Errors
    ///
    /// If the database is empty and the board is full.
    pub fn learner_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let index = selector::select_move(&self.database, &self.session, rng)?;
        self.session.apply(index, Player::Learner);
        Ok(index)
    }

    /// Finishes the current game and merges it into the database.
    ///
    /// # Errors
    ///
    /// If the finished game does not fit the database.
    pub fn deactivate(&mut self) -> Result<Option<Insertion>> {
        self.session.finish();
        if self.finished_games % REPORT_INTERVAL == 0 {
            debug!(
                games = self.finished_games,
                records = self.database.len(),
                "database size"
            );
        }
        self.finished_games += 1;
        let record = match FinishedGame::new(&self.session) {
            Ok(record) => record,
            // The session was finished above, the record can not be rejected
            // for being active.
            Err(Error::InvalidState) => {
                warn!("finished game is still active");
                return Ok(None);
            },
            Err(e) => return Err(e),
        };
        self.database.insert(record).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn learns_from_finished_game() {
        let mut manager = Manager::new(GameVariant::tic_tac_toe());
        for index in [3, 4] {
            manager.opponent_move(index);
        }
        let mut session = manager.session().clone();
        for index in [0, 1, 2] {
            session.apply(index, Player::Learner);
        }
        manager.activate(session).unwrap();
        assert_eq!(manager.session().winner(), Some(Player::Learner));

        assert_eq!(
            manager.deactivate(),
            Ok(Some(Insertion::Inserted { evicted: 0 }))
        );
        assert!(!manager.session().is_active());
        assert_eq!(manager.finished_games(), 1);
        assert_eq!(manager.database().len(), 1);

        // Moves after the end are ignored.
        manager.opponent_move(8);
        assert_eq!(format!("{:?}", manager.session().grid()), "XXXOO....");
    }

    #[test]
    fn learner_uses_database() {
        let mut manager = Manager::new(GameVariant::tic_tac_toe());
        let mut rng = StdRng::seed_from_u64(7);
        let won: Session = Session::from_grid(
            GameVariant::tic_tac_toe(),
            "XXX OO. ...".parse().unwrap(),
        )
        .unwrap();
        manager.activate(won).unwrap();
        let _ = manager.deactivate().unwrap();

        manager.start_game();
        assert!(manager.session().is_active());
        for index in [3, 8] {
            manager.opponent_move(index);
        }
        let mut session = manager.session().clone();
        session.apply(0, Player::Learner);
        session.apply(1, Player::Learner);
        manager.activate(session).unwrap();
        assert_eq!(manager.learner_move(&mut rng), Ok(2));
        assert_eq!(manager.session().winner(), Some(Player::Learner));
    }

    #[test]
    fn wrong_session_size() {
        let mut manager = Manager::new(GameVariant::tic_tac_toe());
        assert_eq!(
            manager.activate(Session::new(GameVariant::big_tac_toe())),
            Err(Error::TypeMismatch {
                expected: 9,
                actual: 25
            })
        );
    }

    #[test]
    fn draws_are_counted_but_not_stored() {
        let mut manager = Manager::new(GameVariant::tic_tac_toe());
        let draw = Session::from_grid(
            GameVariant::tic_tac_toe(),
            "XOX XOO OXX".parse().unwrap(),
        )
        .unwrap();
        manager.activate(draw).unwrap();
        assert_eq!(manager.deactivate(), Ok(Some(Insertion::Draw)));
        assert_eq!(manager.finished_games(), 1);
        assert!(manager.database().is_empty());
    }
}
