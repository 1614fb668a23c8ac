use engine::InputAction;

use super::grid::{TileGrid, TileGridError};
use super::systems::{apply_tile_changes, resolve_move, MoveOutcome};
use super::types::{Direction, GridPos, TileKind};

pub(crate) const LEVEL_WIDTH: u32 = 12;
pub(crate) const LEVEL_HEIGHT: u32 = 12;
pub(crate) const LEVEL_ORIGIN_PX: (i32, i32) = (100, 100);
pub(crate) const PLAYER_START: GridPos = GridPos::new(0, 0);
const START_WALLS: [GridPos; 1] = [GridPos::new(6, 6)];
const START_BOXES: [GridPos; 1] = [GridPos::new(10, 10)];
const START_GOALS: [GridPos; 1] = [GridPos::new(2, 2)];

/// Player position plus the delta accumulated from the current key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Player {
    pub pos: GridPos,
    pending_dx: i32,
    pending_dy: i32,
}

impl Player {
    pub(crate) fn at(pos: GridPos) -> Self {
        Self {
            pos,
            pending_dx: 0,
            pending_dy: 0,
        }
    }

    pub(crate) fn pending_delta(&self) -> (i32, i32) {
        (self.pending_dx, self.pending_dy)
    }

    /// Adds one unit of delta for a movement action. Returns false for anything else.
    pub(crate) fn nudge(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MoveUp => self.pending_dy -= 1,
            InputAction::MoveDown => self.pending_dy += 1,
            InputAction::MoveLeft => self.pending_dx -= 1,
            InputAction::MoveRight => self.pending_dx += 1,
            InputAction::Quit => return false,
        }
        true
    }

    /// Reads and clears the pending delta. A zero or diagonal delta yields no direction.
    pub(crate) fn take_direction(&mut self) -> Option<Direction> {
        let direction = Direction::from_delta(self.pending_dx, self.pending_dy);
        self.pending_dx = 0;
        self.pending_dy = 0;
        direction
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Level {
    pub player: Player,
    pub grid: TileGrid,
    moves: u32,
    pushes: u32,
}

impl Level {
    pub(crate) fn new(grid: TileGrid, player_pos: GridPos) -> Self {
        Self {
            player: Player::at(player_pos),
            grid,
            moves: 0,
            pushes: 0,
        }
    }

    /// The hand-built starting layout: one wall, one box and one goal on open floor.
    pub(crate) fn starting_layout() -> Result<Self, TileGridError> {
        let mut grid = TileGrid::new(
            LEVEL_WIDTH,
            LEVEL_HEIGHT,
            LEVEL_ORIGIN_PX,
            TileKind::Floor,
        )?;
        for pos in START_WALLS {
            grid.set(pos, TileKind::Wall);
        }
        for pos in START_BOXES {
            grid.set(pos, TileKind::Box);
        }
        for pos in START_GOALS {
            grid.set(pos, TileKind::Goal);
        }
        Ok(Self::new(grid, PLAYER_START))
    }

    pub(crate) fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn pushes(&self) -> u32 {
        self.pushes
    }

    pub(crate) fn box_count(&self) -> usize {
        self.grid.cells().filter(|(_, tile)| tile.holds_box()).count()
    }

    /// Feeds one key action through the player's pending delta and resolves it. The
    /// delta is always cleared afterwards, so each action is exactly one step attempt.
    pub(crate) fn handle_action(&mut self, action: InputAction) -> Option<MoveOutcome> {
        if !self.player.nudge(action) {
            return None;
        }
        let direction = self.player.take_direction()?;
        Some(self.step(direction))
    }

    pub(crate) fn step(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = resolve_move(&self.grid, self.player.pos, direction);
        self.apply(&outcome);
        outcome
    }

    pub(crate) fn apply(&mut self, outcome: &MoveOutcome) {
        apply_tile_changes(&mut self.grid, outcome);
        if let Some(to) = outcome.player_destination() {
            self.player.pos = to;
            self.moves = self.moves.saturating_add(1);
        }
        if matches!(outcome, MoveOutcome::Pushed { .. }) {
            self.pushes = self.pushes.saturating_add(1);
        }
    }
}
