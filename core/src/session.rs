use crate::*;

/// Player intents a presentation layer forwards to the session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Restart,
    SetLevel(Level),
}

/// One played game: the active level, its board and where the game stands.
///
/// The board is owned exclusively and is only ever replaced wholesale, by
/// [`Session::restart`] or [`Session::set_level`].
#[derive(Clone, Debug)]
pub struct Session<G = RandomBoardGenerator> {
    generator: G,
    level: Level,
    board: Board,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Session<RandomBoardGenerator> {
    pub fn with_seed(level: Level, seed: u64) -> Result<Self> {
        Self::new(level, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> Session<G> {
    pub fn new(level: Level, mut generator: G) -> Result<Self> {
        let board = generator.generate(level)?;
        Ok(Self {
            generator,
            level,
            board,
            status: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    pub fn view_at(&self, coords: Coord2) -> CellView {
        self.board[coords].view()
    }

    /// The mine a direct click detonated, if the game was lost that way.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn remaining_mines(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.count_flagged() as isize)
    }

    /// Left click: reveal a hidden cell, or chord around a revealed one.
    pub fn primary_action(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.board[coords];
        let outcome = if cell.revealed {
            reveal::chord_reveal(&mut self.board, coords)
        } else if cell.has_mine {
            reveal::reveal_all_mines(&mut self.board);
            self.triggered_mine = Some(coords);
            RevealOutcome::HitMine
        } else if cell.adjacent_mines == 0 {
            reveal::flood_reveal(&mut self.board, coords);
            RevealOutcome::Revealed
        } else {
            reveal::reveal_cell(&mut self.board, coords);
            RevealOutcome::Revealed
        };

        if !outcome.has_update() {
            return Ok(outcome);
        }

        let detonated = outcome == RevealOutcome::HitMine;
        self.status = evaluate::status_after(&self.board, detonated);
        log::debug!("Reveal at {:?}: {:?}, game {:?}", coords, outcome, self.status);

        Ok(match self.status {
            GameStatus::Won => RevealOutcome::Won,
            _ => outcome,
        })
    }

    /// Right click: toggle the flag on a hidden cell.
    pub fn secondary_action(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.board[coords];
        if cell.revealed {
            return Ok(MarkOutcome::NoChange);
        }
        cell.flagged = !cell.flagged;
        Ok(MarkOutcome::Changed)
    }

    /// Starts over on a new board for the current level.
    pub fn restart(&mut self) -> Result<()> {
        self.set_level(self.level)
    }

    /// Switches level and starts a new game on it. On error the current game
    /// is kept.
    pub fn set_level(&mut self, level: Level) -> Result<()> {
        let board = self.generator.generate(level)?;
        log::debug!(
            "New game {}x{} with {} mines",
            level.rows,
            level.cols,
            level.mines
        );
        self.level = level;
        self.board = board;
        self.status = GameStatus::InProgress;
        self.triggered_mine = None;
        Ok(())
    }

    /// Validates player-entered level values and switches to them. A rejected
    /// level leaves the current game untouched.
    pub fn set_custom_level(
        &mut self,
        rows: i64,
        cols: i64,
        mines: i64,
    ) -> core::result::Result<(), LevelError> {
        let level = Level::custom(rows, cols, mines)?;
        self.set_level(level)?;
        Ok(())
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Reveal(coords) => self.primary_action(coords).map(drop),
            Action::ToggleFlag(coords) => self.secondary_action(coords).map(drop),
            Action::Restart => self.restart(),
            Action::SetLevel(level) => self.set_level(level),
        }
    }
}

impl<G: BoardGenerator + Clone> Session<G> {
    /// Applies `action` to a snapshot of this session and returns the result as
    /// the new session; `self` is left as it was.
    pub fn apply(&self, action: Action) -> Result<Self> {
        let mut next = self.clone();
        next.dispatch(action)?;
        Ok(next)
    }
}
