use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Only a restart leads back to InProgress, with a new board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// True once every non-mine cell is revealed; flags play no part.
pub fn check_win(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_hidden_safe())
}

/// Status following a reveal. A detonation decides the game before any win
/// check runs.
pub fn status_after(board: &Board, detonated: bool) -> GameStatus {
    if detonated {
        GameStatus::Lost
    } else if check_win(board) {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_ignores_unflagged_mines() {
        let mut board = Board::from_mine_coords((1, 3), &[(0, 0)]).unwrap();
        assert!(!check_win(&board));

        board[(0, 1)].revealed = true;
        assert!(!check_win(&board));

        board[(0, 2)].revealed = true;
        assert!(check_win(&board));
        assert_eq!(status_after(&board, false), GameStatus::Won);
    }

    #[test]
    fn flags_do_not_count_toward_win() {
        let mut board = Board::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        board[(0, 0)].flagged = true;
        board[(0, 1)].flagged = true;

        assert!(!check_win(&board));
        assert_eq!(status_after(&board, false), GameStatus::InProgress);
    }

    #[test]
    fn detonation_beats_win() {
        let mut board = Board::from_mine_coords((1, 2), &[(0, 0)]).unwrap();
        board[(0, 1)].revealed = true;

        assert!(check_win(&board));
        assert_eq!(status_after(&board, true), GameStatus::Lost);
        assert!(GameStatus::Lost.is_finished());
        assert!(!GameStatus::default().is_finished());
    }
}
