use rand::{SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random boards, drawn from a seeded generator that keeps advancing so
/// every call yields an independent layout.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, level: Level) -> Result<Board> {
        generate(&mut self.rng, level.rows, level.cols, level.mines)
    }
}
