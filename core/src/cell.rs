use serde::{Deserialize, Serialize};

/// One square of the board.
///
/// `has_mine` is fixed once the board is generated, `revealed` only ever goes
/// from `false` to `true`, and a revealed cell never carries a flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mined cells among the 8 neighbors, unused on mined cells.
    pub adjacent_mines: u8,
}

impl Cell {
    pub const fn is_hidden_safe(self) -> bool {
        !self.has_mine && !self.revealed
    }

    pub const fn view(self) -> CellView {
        match self {
            Self { revealed: true, has_mine: true, .. } => CellView::Mine,
            Self { revealed: true, adjacent_mines: 0, .. } => CellView::Empty,
            Self { revealed: true, adjacent_mines, .. } => CellView::Number(adjacent_mines),
            Self { flagged: true, .. } => CellView::Flagged,
            _ => CellView::Hidden,
        }
    }
}

/// What a presentation layer draws for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Mine,
    Empty,
    Number(u8),
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
