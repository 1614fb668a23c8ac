use super::grid::TileGrid;
use super::types::{Direction, GridPos, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockReason {
    Wall,
    /// The cell behind the box is a wall or holds another box.
    PushObstructed { beyond: GridPos, beyond_tile: TileKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    Blocked {
        at: GridPos,
        reason: BlockReason,
    },
    Stepped {
        to: GridPos,
    },
    Pushed {
        to: GridPos,
        vacated_tile: TileKind,
        box_to: GridPos,
        box_tile: TileKind,
    },
}

impl MoveOutcome {
    pub(crate) fn player_destination(&self) -> Option<GridPos> {
        match self {
            MoveOutcome::Blocked { .. } => None,
            MoveOutcome::Stepped { to } | MoveOutcome::Pushed { to, .. } => Some(*to),
        }
    }
}

/// Works out what a single step from `from` towards `direction` would do, without touching
/// the grid. Only one box is ever pushed; anything behind it blocks the move.
pub(crate) fn resolve_move(grid: &TileGrid, from: GridPos, direction: Direction) -> MoveOutcome {
    let target = grid.step(from, direction);
    let target_tile = grid.get(target);

    if target_tile.is_walkable() {
        return MoveOutcome::Stepped { to: target };
    }

    let Some(vacated_tile) = target_tile.with_box_removed() else {
        return MoveOutcome::Blocked {
            at: target,
            reason: BlockReason::Wall,
        };
    };

    let beyond = grid.step(target, direction);
    let beyond_tile = grid.get(beyond);
    match beyond_tile.with_box_added() {
        Some(box_tile) => MoveOutcome::Pushed {
            to: target,
            vacated_tile,
            box_to: beyond,
            box_tile,
        },
        None => MoveOutcome::Blocked {
            at: target,
            reason: BlockReason::PushObstructed {
                beyond,
                beyond_tile,
            },
        },
    }
}

/// Commits the tile mutations of `outcome`. Player bookkeeping is left to the caller.
pub(crate) fn apply_tile_changes(grid: &mut TileGrid, outcome: &MoveOutcome) {
    if let MoveOutcome::Pushed {
        to,
        vacated_tile,
        box_to,
        box_tile,
    } = *outcome
    {
        grid.set(box_to, box_tile);
        grid.set(to, vacated_tile);
    }
}
