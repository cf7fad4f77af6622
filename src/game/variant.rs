//! Game variants and the win detection on top of them.
//!
//! A variant is plain data: the board size, the number of marks in a row
//! needed to win and the table of winning groups. Win detection only looks at
//! that table, so supporting a new board means describing its groups rather
//! than writing new rules.

use crate::error::{Error, Result};
use crate::game::core::{Cell, Grid, Player, MAX_CELLS};
use crate::game::footprint::Footprint;

/// Reports the winner of a board, if any.
///
/// Implementations have to be pure: the answer depends on the board alone.
/// [`GameVariant`] is the table-driven one used for every preset; a
/// [`Session`](crate::game::session::Session) accepts any other.
pub trait Oracle {
    /// Number of cells on the boards this oracle judges.
    fn size(&self) -> usize;

    /// Returns the side that owns a complete winning group or `None` when
    /// neither does. When both sides own a group the learner is reported.
    fn winner(&self, grid: &Grid) -> Option<Player>;
}

/// Classic 3×3 tic-tac-toe: rows, columns and both diagonals.
#[rustfmt::skip]
const TIC_TAC_TOE_GROUPS: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

/// 5×5 board with four marks in a row: both 4-long windows of each row and
/// column and of the two main diagonals.
#[rustfmt::skip]
const BIG_TAC_TOE_GROUPS: [[usize; 4]; 24] = [
    [0, 1, 2, 3], [1, 2, 3, 4], [5, 6, 7, 8], [6, 7, 8, 9],
    [10, 11, 12, 13], [11, 12, 13, 14], [15, 16, 17, 18], [16, 17, 18, 19],
    [20, 21, 22, 23], [21, 22, 23, 24],
    [0, 5, 10, 15], [5, 10, 15, 20], [1, 6, 11, 16], [6, 11, 16, 21],
    [2, 7, 12, 17], [7, 12, 17, 22], [3, 8, 13, 18], [8, 13, 18, 23],
    [4, 9, 14, 19], [9, 14, 19, 24],
    [0, 6, 12, 18], [6, 12, 18, 24], [4, 8, 12, 16], [8, 12, 16, 20],
];

/// Board configuration: size, winning groups and the number of marks needed
/// to complete one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameVariant {
    size: usize,
    win_length: usize,
    win_groups: Vec<Footprint>,
}

impl GameVariant {
    /// Creates a variant from an explicit table of winning groups.
    ///
    /// # Errors
    ///
    /// If the board is empty or larger than [`MAX_CELLS`], there are no
    /// groups, or some group refers to a cell outside of the board, repeats a
    /// cell or has a length different from `win_length`.
    pub fn new<G: AsRef<[usize]>>(size: usize, win_length: usize, groups: &[G]) -> Result<Self> {
        if size == 0 || size > MAX_CELLS {
            return Err(Error::InvalidVariant(format!(
                "board size should be in 1..={MAX_CELLS}, got {size}"
            )));
        }
        if groups.is_empty() {
            return Err(Error::InvalidVariant("no winning groups".to_string()));
        }
        let mut win_groups = Vec::with_capacity(groups.len());
        for group in groups {
            let group = group.as_ref();
            if let Some(index) = group.iter().find(|&&index| index >= size) {
                return Err(Error::InvalidVariant(format!(
                    "group {group:?} refers to cell {index} outside of board of size {size}"
                )));
            }
            let footprint = Footprint::from_indices(group);
            if group.len() != win_length || footprint.count() as usize != win_length {
                return Err(Error::InvalidVariant(format!(
                    "group {group:?} should have {win_length} distinct cells"
                )));
            }
            win_groups.push(footprint);
        }
        Ok(Self {
            size,
            win_length,
            win_groups,
        })
    }

    /// Square `width`×`width` board where any `win_length` consecutive marks
    /// in a row, a column or a diagonal win.
    ///
    /// # Errors
    ///
    /// If the board does not fit into [`MAX_CELLS`] or `win_length` is not in
    /// `1..=width`.
    pub fn k_in_a_row(width: usize, win_length: usize) -> Result<Self> {
        let Some(cells) = width
            .checked_mul(width)
            .filter(|&cells| cells > 0 && cells <= MAX_CELLS)
        else {
            return Err(Error::InvalidVariant(format!(
                "{width}x{width} board does not fit into {MAX_CELLS} cells"
            )));
        };
        if win_length == 0 || win_length > width {
            return Err(Error::InvalidVariant(format!(
                "win length should be in 1..={width}, got {win_length}"
            )));
        }
        let width = width as isize;
        let length = win_length as isize;
        let inside = |row: isize, column: isize| (0..width).contains(&row) && (0..width).contains(&column);
        let mut groups = Vec::new();
        // Right, down, down-right and down-left.
        for (d_row, d_column) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
            for row in 0..width {
                for column in 0..width {
                    let end_row = row + d_row * (length - 1);
                    let end_column = column + d_column * (length - 1);
                    if !inside(end_row, end_column) {
                        continue;
                    }
                    groups.push(
                        (0..length)
                            .map(|step| ((row + d_row * step) * width + column + d_column * step) as usize)
                            .collect::<Vec<_>>(),
                    );
                }
            }
        }
        Self::new(cells, win_length, &groups)
    }

    /// 3×3 board, three in a row.
    #[must_use]
    pub fn tic_tac_toe() -> Self {
        Self::from_table(9, &TIC_TAC_TOE_GROUPS)
    }

    /// 5×5 board, four in a row.
    #[must_use]
    pub fn big_tac_toe() -> Self {
        Self::from_table(25, &BIG_TAC_TOE_GROUPS)
    }

    fn from_table<const N: usize>(size: usize, table: &[[usize; N]]) -> Self {
        Self {
            size,
            win_length: N,
            win_groups: table
                .iter()
                .map(|group| Footprint::from_indices(group))
                .collect(),
        }
    }

    /// Number of cells on the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of marks a winning group is made of.
    #[must_use]
    pub const fn win_length(&self) -> usize {
        self.win_length
    }

    /// Every group of cells that wins when owned by a single side.
    #[must_use]
    pub fn win_groups(&self) -> &[Footprint] {
        &self.win_groups
    }

    fn completes_group(&self, owned: Footprint) -> bool {
        self.win_groups.iter().any(|group| group.is_subset_of(owned))
    }
}

impl Oracle for GameVariant {
    fn size(&self) -> usize {
        self.size
    }

    fn winner(&self, grid: &Grid) -> Option<Player> {
        debug_assert_eq!(grid.size(), self.size);
        if self.completes_group(grid.footprint(Cell::Learner)) {
            return Some(Player::Learner);
        }
        if self.completes_group(grid.footprint(Cell::Opponent)) {
            return Some(Player::Opponent);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn grid(cells: &str) -> Grid {
        cells.parse().expect("valid grid")
    }

    #[test]
    fn presets() {
        let small = GameVariant::tic_tac_toe();
        assert_eq!(small.size(), 9);
        assert_eq!(small.win_length(), 3);
        assert_eq!(small.win_groups().len(), 8);

        let big = GameVariant::big_tac_toe();
        assert_eq!(big.size(), 25);
        assert_eq!(big.win_length(), 4);
        assert_eq!(big.win_groups().len(), 24);
        assert!(big.win_groups().iter().all(|group| group.count() == 4));
    }

    #[test]
    fn generated_tic_tac_toe_matches_table() {
        let generated = GameVariant::k_in_a_row(3, 3).unwrap();
        let mut expected = GameVariant::tic_tac_toe().win_groups().to_vec();
        let mut actual = generated.win_groups().to_vec();
        expected.sort_by_key(|group| group.bits());
        actual.sort_by_key(|group| group.bits());
        assert_eq!(actual, expected);
    }

    #[test]
    fn generated_big_board_covers_table() {
        let generated = GameVariant::k_in_a_row(5, 4).unwrap();
        // Rows and columns: 2 windows each, plus 8 diagonal windows.
        assert_eq!(generated.win_groups().len(), 28);
        for group in GameVariant::big_tac_toe().win_groups() {
            assert!(generated.win_groups().contains(group), "{group:?}");
        }
    }

    #[test]
    fn invalid_variants() {
        assert!(GameVariant::new(0, 1, &[[0]]).is_err());
        assert!(GameVariant::new(65, 1, &[[0]]).is_err());
        assert!(GameVariant::new::<[usize; 1]>(3, 1, &[]).is_err());
        assert!(GameVariant::new(3, 3, &[[0, 1, 3]]).is_err());
        assert!(GameVariant::new(3, 3, &[[0, 1, 1]]).is_err());
        assert!(GameVariant::new(3, 2, &[[0, 1, 2]]).is_err());
        assert!(GameVariant::k_in_a_row(9, 3).is_err());
        assert!(GameVariant::k_in_a_row(3, 4).is_err());
        assert!(GameVariant::k_in_a_row(0, 1).is_err());
        // Squares to exactly 2^usize::BITS, which wraps around to 0.
        let huge = 1_usize << (usize::BITS / 2);
        assert_eq!(
            GameVariant::k_in_a_row(huge, 4),
            Err(Error::InvalidVariant(format!(
                "{huge}x{huge} board does not fit into 64 cells"
            )))
        );
        assert!(GameVariant::k_in_a_row(usize::MAX, 4).is_err());
        assert_eq!(
            GameVariant::new(3, 3, &[[0, 1, 3]]),
            Err(Error::InvalidVariant(
                "group [0, 1, 3] refers to cell 3 outside of board of size 3".to_string()
            ))
        );
    }

    #[test]
    fn winners() {
        let variant = GameVariant::tic_tac_toe();
        assert_eq!(variant.winner(&grid(".........")), None);
        assert_eq!(variant.winner(&grid("XXX OO. ...")), Some(Player::Learner));
        assert_eq!(variant.winner(&grid("O.X .OX X.O")), Some(Player::Opponent));
        assert_eq!(variant.winner(&grid("XOX XOO OXX")), None);
        // Learner groups are checked first.
        assert_eq!(variant.winner(&grid("XXX OOO ...")), Some(Player::Learner));
    }

    #[test]
    fn big_board_winners() {
        let variant = GameVariant::big_tac_toe();
        assert_eq!(
            variant.winner(&grid(".XXXX ..... ..... ..... .....")),
            Some(Player::Learner)
        );
        assert_eq!(
            variant.winner(&grid("...O. ...O. ...O. ...O. .....")),
            Some(Player::Opponent)
        );
        // Three in a row is not enough on the big board.
        assert_eq!(variant.winner(&grid("XXX.. ..... ..... ..... .....")), None);
        // Column 3, second window.
        assert_eq!(
            variant.winner(&grid("..... ...X. ...X. ...X. ...X.")),
            Some(Player::Learner)
        );
    }
}
