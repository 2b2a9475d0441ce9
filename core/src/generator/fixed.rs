use alloc::vec::Vec;

use super::*;

/// Replays one mine layout on every call, ignoring the requested mine count.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mine_coords: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mine_coords: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mine_coords: mine_coords.into(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, level: Level) -> Result<Board> {
        Board::from_mine_coords(level.size(), &self.mine_coords)
    }
}
