use serde::{Deserialize, Serialize};

use crate::*;

/// Board shape and mine count a session generates from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl Level {
    pub const EASY: Self = Self::new_unchecked(8, 8, 10);
    pub const MEDIUM: Self = Self::new_unchecked(16, 16, 40);
    pub const HARD: Self = Self::new_unchecked(16, 30, 99);

    /// Values the custom level form starts out with.
    pub const CUSTOM_DEFAULT: Self = Self::new_unchecked(20, 28, 100);

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validates player-entered values for a custom level.
    ///
    /// Inputs are signed because they come straight from a form. Zero rows or
    /// columns slip past the sign check and are caught by the cell count.
    pub fn custom(rows: i64, cols: i64, mines: i64) -> core::result::Result<Self, LevelError> {
        if rows < 0 || cols < 0 || mines <= 0 {
            return Err(LevelError::NonPositive);
        }

        let total_cells = i128::from(rows) * i128::from(cols);
        if total_cells <= 1 {
            return Err(LevelError::TooFewCells);
        }

        // mines / total_cells >= 0.8, without floats
        if 5 * i128::from(mines) >= total_cells.saturating_mul(4) {
            return Err(LevelError::TooManyMines);
        }

        let max = Coord::MAX;
        let (Ok(rows), Ok(cols)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(LevelError::TooLarge { max });
        };

        // below 80% of at most `Coord::MAX`² cells, so this always fits
        let mines = CellCount::try_from(mines).map_err(|_| LevelError::TooManyMines)?;

        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::EASY
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn level(self) -> Level {
        use Difficulty::*;
        match self {
            Easy => Level::EASY,
            Medium => Level::MEDIUM,
            Hard => Level::HARD,
        }
    }
}

impl From<Difficulty> for Level {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_classic_boards() {
        assert_eq!(Difficulty::Easy.level().total_cells(), 64);
        assert_eq!(Difficulty::Medium.level(), Level::new_unchecked(16, 16, 40));
        assert_eq!(Level::from(Difficulty::Hard), Level::new_unchecked(16, 30, 99));
        assert_eq!(Level::default(), Level::EASY);
    }

    #[test]
    fn custom_accepts_default_form_values() {
        assert_eq!(Level::custom(20, 28, 100), Ok(Level::CUSTOM_DEFAULT));
    }

    #[test]
    fn custom_rejects_negative_dimensions_and_missing_mines() {
        assert_eq!(Level::custom(-1, 5, 3), Err(LevelError::NonPositive));
        assert_eq!(Level::custom(5, -1, 3), Err(LevelError::NonPositive));
        assert_eq!(Level::custom(5, 5, 0), Err(LevelError::NonPositive));
        assert_eq!(Level::custom(5, 5, -4), Err(LevelError::NonPositive));
    }

    #[test]
    fn zero_dimension_is_caught_by_cell_count() {
        assert_eq!(Level::custom(0, 10, 1), Err(LevelError::TooFewCells));
        assert_eq!(Level::custom(10, 0, 1), Err(LevelError::TooFewCells));
        assert_eq!(Level::custom(1, 1, 1), Err(LevelError::TooFewCells));
    }

    #[test]
    fn mine_ratio_must_stay_below_eighty_percent() {
        assert_eq!(Level::custom(10, 10, 90), Err(LevelError::TooManyMines));
        assert_eq!(Level::custom(10, 10, 80), Err(LevelError::TooManyMines));
        assert_eq!(Level::custom(10, 10, 79), Ok(Level::new_unchecked(10, 10, 79)));
        assert_eq!(Level::custom(1, 2, 1), Ok(Level::new_unchecked(1, 2, 1)));
    }

    #[test]
    fn oversized_boards_are_rejected() {
        assert_eq!(
            Level::custom(256, 2, 1),
            Err(LevelError::TooLarge { max: 255 })
        );
        assert_eq!(Level::custom(255, 255, 1), Ok(Level::new_unchecked(255, 255, 1)));
    }
}
