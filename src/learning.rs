//! Learning from finished games.
//!
//! Every finished game is frozen into a [`record::FinishedGame`] that always
//! describes the winning shape from the learner's point of view. Records are
//! collected in a [`database::Database`] that only keeps the narrowest shapes,
//! and [`selector::select_move`] scores the cells of a live board against
//! them.

pub mod database;
pub mod record;
pub mod selector;
