#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum TileKind {
    #[default]
    Floor,
    Wall,
    Box,
    Goal,
    /// A box parked on a goal.
    Done,
}

impl TileKind {
    pub(crate) fn is_walkable(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Goal)
    }

    pub(crate) fn holds_box(self) -> bool {
        matches!(self, TileKind::Box | TileKind::Done)
    }

    /// What a cell becomes when a box is pushed onto it, if it can take one.
    pub(crate) fn with_box_added(self) -> Option<TileKind> {
        match self {
            TileKind::Floor => Some(TileKind::Box),
            TileKind::Goal => Some(TileKind::Done),
            TileKind::Wall | TileKind::Box | TileKind::Done => None,
        }
    }

    /// What a cell reverts to once its box is pushed away.
    pub(crate) fn with_box_removed(self) -> Option<TileKind> {
        match self {
            TileKind::Box => Some(TileKind::Floor),
            TileKind::Done => Some(TileKind::Goal),
            TileKind::Floor | TileKind::Wall | TileKind::Goal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx.signum(), dy.signum()) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Grid delta with rows growing downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) struct GridPos {
    pub col: u32,
    pub row: u32,
}

impl GridPos {
    pub(crate) const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}
