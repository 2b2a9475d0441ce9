use ndarray::Array2;
use rand::Rng;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait BoardGenerator {
    fn generate(&mut self, level: Level) -> Result<Board>;
}

/// Places `mines` on a fresh `rows`×`cols` board by rejection sampling.
///
/// Each draw picks a uniformly random cell and is redrawn if the cell already
/// holds a mine, so the result has exactly `mines` mines.
pub fn generate<R: Rng>(
    rng: &mut R,
    rows: Coord,
    cols: Coord,
    mines: CellCount,
) -> Result<Board> {
    if rows == 0 || cols == 0 {
        log::warn!("Cannot generate a {}x{} board", rows, cols);
        return Err(GameError::InvalidSize);
    }

    let total_cells = mult(rows, cols);
    if mines >= total_cells {
        log::warn!(
            "Requested {} mines but a {}x{} board only fits {}",
            mines,
            rows,
            cols,
            total_cells - 1
        );
        return Err(GameError::TooManyMines);
    }

    let mut cells: Array2<Cell> = Array2::default((rows, cols).to_nd_index());
    let mut placed = 0;
    let mut draws = 0u32;
    while placed < mines {
        let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
        draws += 1;
        let cell = &mut cells[coords.to_nd_index()];
        if !cell.has_mine {
            cell.has_mine = true;
            placed += 1;
        }
    }
    log::debug!(
        "Placed {} mines on {}x{} in {} draws",
        mines,
        rows,
        cols,
        draws
    );

    Ok(Board::from_placed_mines(cells))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn generates_requested_mine_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = generate(&mut rng, 16, 30, 99).unwrap();

        assert_eq!(board.size(), (16, 30));
        assert_eq!(board.mine_count(), 99);
        assert_eq!(board.cells().filter(|(_, cell)| cell.has_mine).count(), 99);
        assert!(board.validate_adjacency());
    }

    #[test]
    fn fresh_board_is_untouched() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = generate(&mut rng, 8, 8, 10).unwrap();

        assert_eq!(board.count_revealed(), 0);
        assert_eq!(board.count_flagged(), 0);
    }

    #[test]
    fn nearly_full_board_still_terminates() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = generate(&mut rng, 3, 3, 8).unwrap();

        assert_eq!(board.mine_count(), 8);
        let (coords, safe) = board.cells().find(|(_, cell)| !cell.has_mine).unwrap();
        // every neighbor of the lone safe cell is a mine
        assert_eq!(safe.adjacent_mines as usize, board.iter_neighbors(coords).count());
    }

    #[test]
    fn rejects_impossible_requests() {
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(generate(&mut rng, 0, 4, 0), Err(GameError::InvalidSize));
        assert_eq!(generate(&mut rng, 2, 2, 4), Err(GameError::TooManyMines));
    }
}
