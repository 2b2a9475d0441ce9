use alloc::collections::VecDeque;
use core::ops::BitOr;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Used to merge outcomes of a multi-cell reveal.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Marks a cell revealed. A flag on it does not survive the reveal.
pub fn reveal_cell(board: &mut Board, coords: Coord2) {
    let cell = &mut board[coords];
    cell.revealed = true;
    cell.flagged = false;
}

/// Reveals `start` and, through zero-count cells, everything connected to it.
///
/// Breadth-first from `start`: mines are never revealed, numbered cells are
/// revealed but not expanded, and flags do not stop the fill. Returns how many
/// cells were newly revealed.
pub fn flood_reveal(board: &mut Board, start: Coord2) -> CellCount {
    let mut revealed = 0;
    let mut to_visit = VecDeque::from([start]);

    while let Some(coords) = to_visit.pop_front() {
        let cell = board[coords];
        if cell.revealed || cell.has_mine {
            continue;
        }

        reveal_cell(board, coords);
        revealed += 1;

        if cell.adjacent_mines > 0 {
            continue;
        }

        to_visit.extend(
            board
                .iter_neighbors(coords)
                .filter(|&pos| board[pos].is_hidden_safe()),
        );
    }

    log::trace!("Flood from {:?} revealed {} cells", start, revealed);
    revealed
}

/// Shows every mine on the board, used once the game is lost.
pub fn reveal_all_mines(board: &mut Board) {
    let mines: alloc::vec::Vec<_> = board
        .cells()
        .filter(|(_, cell)| cell.has_mine)
        .map(|(coords, _)| coords)
        .collect();
    for coords in mines {
        reveal_cell(board, coords);
    }
}

/// Reveals the hidden, unflagged neighbors of `coords` in one step.
///
/// The first mined neighbor reached ends the chord: all mines are shown and
/// `HitMine` is returned, leaving later neighbors untouched.
pub fn chord_reveal(board: &mut Board, coords: Coord2) -> RevealOutcome {
    let mut outcome = RevealOutcome::NoChange;

    for pos in board.iter_neighbors(coords) {
        let neighbor = board[pos];
        if neighbor.revealed || neighbor.flagged {
            continue;
        }

        if neighbor.has_mine {
            log::debug!("Chord at {:?} detonated mine at {:?}", coords, pos);
            reveal_all_mines(board);
            return RevealOutcome::HitMine;
        }

        if neighbor.adjacent_mines == 0 {
            flood_reveal(board, pos);
        } else {
            reveal_cell(board, pos);
        }
        outcome = outcome | RevealOutcome::Revealed;
    }

    outcome
}
