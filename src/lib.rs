//! Tic-tac-toe player that remembers the shapes of finished games and uses
//! them to steer its next moves.
//!
//! The building blocks are:
//!
//! - [`game`]: boards, variants (the win-group tables) and live sessions.
//! - [`learning`]: normalized records of finished games, the deduplicated
//!   [`learning::database::Database`] of winning shapes and the move selection
//!   heuristic on top of it.
//! - [`manager`] and [`simulation`]: turn alternation and repeated self-play
//!   against a random opponent.
//! - [`report`]: binning of the win history for display.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod error;
pub mod game;
pub mod learning;
pub mod manager;
pub mod report;
pub mod simulation;

pub use error::{Error, Result};
use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the version and the build type on startup.
pub fn print_build_info() {
    println!("Tacto {}", version());
    println!("Release build: {}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
