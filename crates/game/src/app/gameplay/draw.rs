use engine::{Canvas, Rgba};

use super::scene_state::Level;
use super::types::{GridPos, TileKind};

pub(crate) const TILE_SIZE_PX: u32 = 16;

const CLEAR_COLOR: Rgba = [0, 0, 0, 255];
const FLOOR_COLOR: Rgba = [169, 169, 169, 255];
const WALL_COLOR: Rgba = [128, 128, 128, 255];
const BOX_COLOR: Rgba = [135, 206, 235, 255];
const GOAL_COLOR: Rgba = [144, 238, 144, 255];
const DONE_COLOR: Rgba = [0, 128, 0, 255];
const PLAYER_COLOR: Rgba = [255, 255, 0, 255];

pub(crate) fn tile_color(tile: TileKind) -> Rgba {
    match tile {
        TileKind::Floor => FLOOR_COLOR,
        TileKind::Wall => WALL_COLOR,
        TileKind::Box => BOX_COLOR,
        TileKind::Goal => GOAL_COLOR,
        TileKind::Done => DONE_COLOR,
    }
}

/// Top-left pixel of a cell for a grid placed at `origin_px`.
pub(crate) fn cell_screen_px(origin_px: (i32, i32), pos: GridPos) -> (i32, i32) {
    let size = TILE_SIZE_PX as i32;
    (
        origin_px.0 + pos.col as i32 * size,
        origin_px.1 + pos.row as i32 * size,
    )
}

pub(crate) fn draw_level(canvas: &mut Canvas<'_>, level: &Level) {
    canvas.clear(CLEAR_COLOR);

    let origin = level.grid.origin_px();
    for (pos, tile) in level.grid.cells() {
        let (x, y) = cell_screen_px(origin, pos);
        canvas.fill_rect(x, y, TILE_SIZE_PX, TILE_SIZE_PX, tile_color(tile));
    }

    let (x, y) = cell_screen_px(origin, level.player.pos);
    canvas.fill_rect(x, y, TILE_SIZE_PX, TILE_SIZE_PX, PLAYER_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gameplay::grid::TileGrid;

    fn render(level: &Level, width: u32, height: u32) -> Vec<u8> {
        let mut frame = vec![0; width as usize * height as usize * 4];
        let mut canvas = Canvas::new(&mut frame, width, height).expect("canvas");
        draw_level(&mut canvas, level);
        frame
    }

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> Rgba {
        let offset = (y as usize * width as usize + x as usize) * 4;
        [
            frame[offset],
            frame[offset + 1],
            frame[offset + 2],
            frame[offset + 3],
        ]
    }

    #[test]
    fn tile_colors_are_distinct() {
        let colors = [
            tile_color(TileKind::Floor),
            tile_color(TileKind::Wall),
            tile_color(TileKind::Box),
            tile_color(TileKind::Goal),
            tile_color(TileKind::Done),
            PLAYER_COLOR,
            CLEAR_COLOR,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn cell_screen_px_offsets_by_origin_and_tile_size() {
        assert_eq!(cell_screen_px((100, 100), GridPos::new(0, 0)), (100, 100));
        assert_eq!(cell_screen_px((100, 100), GridPos::new(10, 2)), (260, 132));
    }

    #[test]
    fn starting_layout_draws_tiles_player_and_background() {
        let level = Level::starting_layout().expect("level");
        let frame = render(&level, 800, 400);

        assert_eq!(pixel(&frame, 800, 0, 0), CLEAR_COLOR);
        assert_eq!(pixel(&frame, 800, 100, 100), PLAYER_COLOR);
        assert_eq!(pixel(&frame, 800, 115, 115), PLAYER_COLOR);
        assert_eq!(pixel(&frame, 800, 116, 100), FLOOR_COLOR);
        assert_eq!(pixel(&frame, 800, 196, 196), WALL_COLOR);
        assert_eq!(pixel(&frame, 800, 268, 268), BOX_COLOR);
        assert_eq!(pixel(&frame, 800, 132, 132), GOAL_COLOR);
        assert_eq!(pixel(&frame, 800, 292, 100), CLEAR_COLOR);
    }

    #[test]
    fn player_is_drawn_over_its_tile() {
        let mut grid = TileGrid::new(2, 1, (0, 0), TileKind::Floor).expect("grid");
        grid.set(GridPos::new(1, 0), TileKind::Goal);
        let level = Level::new(grid, GridPos::new(1, 0));
        let frame = render(&level, 32, 16);

        assert_eq!(pixel(&frame, 32, 0, 0), FLOOR_COLOR);
        assert_eq!(pixel(&frame, 32, 16, 0), PLAYER_COLOR);
    }

    #[test]
    fn drawing_clips_grids_larger_than_the_canvas() {
        let level = Level::starting_layout().expect("level");
        let frame = render(&level, 120, 120);

        // Player covers 100..=115; cell (1,1) starts at 116 and is cut off at 119.
        assert_eq!(pixel(&frame, 120, 115, 115), PLAYER_COLOR);
        assert_eq!(pixel(&frame, 120, 119, 119), FLOOR_COLOR);
        assert_eq!(pixel(&frame, 120, 99, 99), CLEAR_COLOR);
        assert_eq!(frame.len(), 120 * 120 * 4);
    }

    #[test]
    fn done_tile_uses_done_color() {
        let mut grid = TileGrid::new(2, 1, (0, 0), TileKind::Floor).expect("grid");
        grid.set(GridPos::new(1, 0), TileKind::Done);
        let level = Level::new(grid, GridPos::new(0, 0));
        let frame = render(&level, 32, 16);
        assert_eq!(pixel(&frame, 32, 20, 4), DONE_COLOR);
    }
}
