mod draw;
mod grid;
mod scene_impl;
mod scene_state;
mod systems;
mod types;

use engine::Scene;

pub(crate) use grid::TileGridError;

use scene_impl::SokobanScene;
use scene_state::Level;

pub(crate) fn build_scene() -> Result<Box<dyn Scene>, TileGridError> {
    let level = Level::starting_layout()?;
    Ok(Box::new(SokobanScene::new("main", level)))
}
