//! Summaries of the win history for display.

use std::fmt;

use itertools::Itertools;

use crate::game::core::{Cell, Player};

/// Points a game is worth to the learner: a win counts fully, a draw counts
/// half.
fn points(winner: Option<Player>) -> f64 {
    match winner {
        Some(Player::Learner) => 1.0,
        Some(Player::Opponent) => 0.0,
        None => 0.5,
    }
}

/// Learner points per consecutive chunk of games. A rising histogram means
/// the learner is getting better.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    games_per_bin: usize,
    bins: Vec<f64>,
}

impl Histogram {
    /// Splits the history into `bins` chunks of `history.len() / bins` games.
    /// Games that do not fill a whole chunk at the end are left out. With
    /// fewer games than bins every chunk is empty and scores zero.
    #[must_use]
    pub fn from_history(history: &[Option<Player>], bins: usize) -> Self {
        let games_per_bin = history.len().checked_div(bins).unwrap_or(0);
        let bins = if games_per_bin == 0 {
            vec![0.0; bins]
        } else {
            history
                .chunks_exact(games_per_bin)
                .take(bins)
                .map(|chunk| chunk.iter().copied().map(points).sum::<f64>())
                .collect()
        };
        Self {
            games_per_bin,
            bins,
        }
    }

    /// Number of games summed into each bin.
    #[must_use]
    pub const fn games_per_bin(&self) -> usize {
        self.games_per_bin
    }

    /// Points of every bin, oldest games first.
    #[must_use]
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for points in &self.bins {
            writeln!(f, "{points:.1}")?;
        }
        Ok(())
    }
}

/// Total number of wins and draws.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Games won by the learner.
    pub learner_wins: usize,
    /// Games won by the opponent.
    pub opponent_wins: usize,
    /// Games without a winner.
    pub draws: usize,
}

impl Summary {
    /// Counts the outcomes of every game in the history.
    #[must_use]
    pub fn from_history(history: &[Option<Player>]) -> Self {
        history
            .iter()
            .fold(Self::default(), |mut summary, winner| {
                match winner {
                    Some(Player::Learner) => summary.learner_wins += 1,
                    Some(Player::Opponent) => summary.opponent_wins += 1,
                    None => summary.draws += 1,
                }
                summary
            })
    }

    /// Number of games summarized.
    #[must_use]
    pub const fn games(&self) -> usize {
        self.learner_wins + self.opponent_wins + self.draws
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Games: {}, learner wins: {}, opponent wins: {}, draws: {}",
            self.games(),
            self.learner_wins,
            self.opponent_wins,
            self.draws
        )
    }
}

/// Renders the winner of each game as a single character: `X` for the
/// learner, `O` for the opponent and a space for a draw.
#[must_use]
pub fn render_history(history: &[Option<Player>]) -> String {
    history
        .iter()
        .map(|winner| winner.map_or(Cell::Empty, Cell::from))
        .join("")
}

/// Same as [`render_history`], but split into lines of `width` games.
#[must_use]
pub fn render_history_lines(history: &[Option<Player>], width: usize) -> String {
    history
        .chunks(width.max(1))
        .map(render_history)
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const L: Option<Player> = Some(Player::Learner);
    const O: Option<Player> = Some(Player::Opponent);
    const D: Option<Player> = None;

    fn assert_bins(histogram: &Histogram, expected: &[f64]) {
        assert_eq!(histogram.bins().len(), expected.len());
        for (actual, expected) in histogram.bins().iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
        }
    }

    #[test]
    fn histogram() {
        let history = [L, L, O, D, D, O, L, L, L, O];
        let histogram = Histogram::from_history(&history, 3);
        assert_eq!(histogram.games_per_bin(), 3);
        // The last game does not fill a bin.
        assert_bins(&histogram, &[2.0, 1.0, 3.0]);
        assert_eq!(histogram.to_string(), "2.0\n1.0\n3.0\n");
    }

    #[test]
    fn histogram_degenerate() {
        assert!(Histogram::from_history(&[L, O], 0).bins().is_empty());
        let sparse = Histogram::from_history(&[L, L, D], 5);
        assert_eq!(sparse.games_per_bin(), 0);
        assert_bins(&sparse, &[0.0; 5]);
        assert_eq!(sparse.to_string(), "0.0\n".repeat(5));
        assert_bins(&Histogram::from_history(&[], 2), &[0.0, 0.0]);
        assert_bins(&Histogram::from_history(&[D, D], 1), &[1.0]);
    }

    #[test]
    fn summary() {
        let summary = Summary::from_history(&[L, L, O, D]);
        assert_eq!(
            summary,
            Summary {
                learner_wins: 2,
                opponent_wins: 1,
                draws: 1
            }
        );
        assert_eq!(summary.games(), 4);
        assert_eq!(
            summary.to_string(),
            "Games: 4, learner wins: 2, opponent wins: 1, draws: 1"
        );
    }

    #[test]
    fn rendering() {
        assert_eq!(render_history(&[L, O, D, L]), "XO X");
        assert_eq!(render_history_lines(&[L, O, D, L, L], 2), "XO\n X\nX");
    }
}
