//! Implementation of the marking game: cells and boards, win-group tables for
//! the supported variants and live game sessions.

pub mod core;
pub mod footprint;
pub mod session;
pub mod variant;
