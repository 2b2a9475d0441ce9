use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Reasons a custom level is turned down, worded for the player.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Rows and columns must be non-negative numbers, and mines must be positive.")]
    NonPositive,
    #[error("The board must have at least 2 cells.")]
    TooFewCells,
    #[error("Too many mines! Please reduce the number of mines.")]
    TooManyMines,
    #[error("Rows and columns cannot exceed {max}.")]
    TooLarge { max: Coord },
    #[error(transparent)]
    Board(#[from] GameError),
}
