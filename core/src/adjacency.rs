//! Mine-neighbor counts derived from a placed board.

use ndarray::Array2;

use crate::*;

pub fn count_adjacent_mines(cells: &Array2<Cell>, coords: Coord2) -> u8 {
    // at most 8 neighbors
    cells
        .iter_neighbors(coords)
        .filter(|&pos| cells[pos.to_nd_index()].has_mine)
        .count() as u8
}

/// Stores the neighbor count on every non-mine cell.
pub fn fill_adjacency(cells: &mut Array2<Cell>) {
    let (rows, cols) = cells.dim();
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row as Coord, col as Coord);
            if cells[coords.to_nd_index()].has_mine {
                continue;
            }
            let count = count_adjacent_mines(cells, coords);
            cells[coords.to_nd_index()].adjacent_mines = count;
        }
    }
}
