use thiserror::Error;

use super::types::{Direction, GridPos, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum TileGridError {
    #[error("tile grid must be at least 1x1, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
}

/// Fixed-size tile storage, indexed `row * width + col`.
///
/// `origin_px` is the screen position of the top-left corner of cell (0,0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TileGrid {
    width: u32,
    height: u32,
    origin_px: (i32, i32),
    tiles: Vec<TileKind>,
}

impl TileGrid {
    pub(crate) fn new(
        width: u32,
        height: u32,
        origin_px: (i32, i32),
        fill: TileKind,
    ) -> Result<Self, TileGridError> {
        if width == 0 || height == 0 {
            return Err(TileGridError::EmptyDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            origin_px,
            tiles: vec![fill; width as usize * height as usize],
        })
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn origin_px(&self) -> (i32, i32) {
        self.origin_px
    }

    pub(crate) fn index_of(&self, col: u32, row: u32) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub(crate) fn tile_at(&self, col: u32, row: u32) -> Option<TileKind> {
        self.index_of(col, row)
            .and_then(|index| self.tiles.get(index).copied())
    }

    /// Panics when `(col, row)` lies outside the grid; callers wrap coordinates first.
    pub(crate) fn get(&self, pos: GridPos) -> TileKind {
        match self.tile_at(pos.col, pos.row) {
            Some(tile) => tile,
            None => self.out_of_bounds(pos),
        }
    }

    /// Panics when `(col, row)` lies outside the grid; callers wrap coordinates first.
    pub(crate) fn set(&mut self, pos: GridPos, kind: TileKind) {
        match self.index_of(pos.col, pos.row) {
            Some(index) => self.tiles[index] = kind,
            None => self.out_of_bounds(pos),
        }
    }

    /// One step from `pos`, reappearing on the opposite edge when it leaves the grid.
    pub(crate) fn step(&self, pos: GridPos, direction: Direction) -> GridPos {
        let (dx, dy) = direction.delta();
        GridPos {
            col: wrap_coordinate(pos.col, dx, self.width),
            row: wrap_coordinate(pos.row, dy, self.height),
        }
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (GridPos, TileKind)> + '_ {
        let width = self.width as usize;
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let pos = GridPos::new((index % width) as u32, (index / width) as u32);
            (pos, *tile)
        })
    }

    pub(crate) fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| **tile == kind).count()
    }

    fn out_of_bounds(&self, pos: GridPos) -> ! {
        panic!(
            "tile ({}, {}) is outside the {}x{} grid",
            pos.col, pos.row, self.width, self.height
        )
    }
}

/// Anything below zero lands on the last cell and anything past the end lands on the
/// first, so a unit delta walks off one edge and back in on the other.
pub(crate) fn wrap_coordinate(pos: u32, delta: i32, dimension: u32) -> u32 {
    let next = i64::from(pos) + i64::from(delta);
    if next < 0 {
        dimension.saturating_sub(1)
    } else if next >= i64::from(dimension) {
        0
    } else {
        next as u32
    }
}
