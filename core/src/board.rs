use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells indexed `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Wraps cells whose mines are already placed and fills in neighbor counts.
    pub(crate) fn from_placed_mines(mut cells: Array2<Cell>) -> Self {
        adjacency::fill_adjacency(&mut cells);
        // bounded by the `Coord::MAX`² cells a board can hold
        let mine_count = cells.iter().filter(|cell| cell.has_mine).count() as CellCount;
        Self { cells, mine_count }
    }

    /// Builds a board with mines at exactly `mine_coords`; duplicates collapse.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()].has_mine = true;
        }

        let board = Self::from_placed_mines(cells);
        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn count_flagged(&self) -> CellCount {
        self.count_where(|cell| cell.flagged)
    }

    pub fn count_revealed(&self) -> CellCount {
        self.count_where(|cell| cell.revealed)
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| pred(cell)).count() as CellCount
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Whether every stored neighbor count matches the placed mines.
    pub fn validate_adjacency(&self) -> bool {
        self.cells().all(|(coords, cell)| {
            cell.has_mine || cell.adjacent_mines == adjacency::count_adjacent_mines(&self.cells, coords)
        })
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_places_and_counts() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.safe_cell_count(), 8);
        assert!(board[(1, 1)].has_mine);
        assert_eq!(board[(0, 0)].adjacent_mines, 1);
        assert!(board.validate_adjacency());
    }

    #[test]
    fn from_mine_coords_rejects_bad_input() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_mine_coords((0, 2), &[]),
            Err(GameError::InvalidSize)
        );
        assert_eq!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 3)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn cells_iterate_row_major() {
        let board = Board::from_mine_coords((2, 2), &[(0, 1)]).unwrap();
        let coords: alloc::vec::Vec<_> = board.cells().map(|(coords, _)| coords).collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn serializes_cells_for_presentation() {
        let board = Board::from_mine_coords((1, 2), &[(0, 1)]).unwrap();
        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["mine_count"], 1);
        assert_eq!(json["cells"]["dim"], serde_json::json!([1, 2]));
    }
}
