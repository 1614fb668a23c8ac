use engine::{Canvas, InputAction, Scene, SceneCommand};
use tracing::{debug, info};

use super::draw::draw_level;
use super::scene_state::Level;
use super::systems::{BlockReason, MoveOutcome};
use super::types::TileKind;

pub(crate) struct SokobanScene {
    scene_name: &'static str,
    level: Level,
}

impl SokobanScene {
    pub(crate) fn new(scene_name: &'static str, level: Level) -> Self {
        Self { scene_name, level }
    }
}

impl Scene for SokobanScene {
    fn load(&mut self) {
        info!(
            scene = self.scene_name,
            grid_width = self.level.grid.width(),
            grid_height = self.level.grid.height(),
            player_col = self.level.player.pos.col,
            player_row = self.level.player.pos.row,
            boxes = self.level.box_count(),
            goals = self.level.grid.count(TileKind::Goal) + self.level.grid.count(TileKind::Done),
            "scene_loaded"
        );
    }

    fn handle_action(&mut self, action: InputAction) -> SceneCommand {
        if action == InputAction::Quit {
            return SceneCommand::Quit;
        }
        if let Some(outcome) = self.level.handle_action(action) {
            log_outcome(action, &outcome);
        }
        SceneCommand::None
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        draw_level(canvas, &self.level);
    }

    fn unload(&mut self) {
        info!(
            scene = self.scene_name,
            moves = self.level.moves(),
            pushes = self.level.pushes(),
            "scene_unloaded"
        );
    }

    fn debug_title(&self) -> Option<String> {
        Some(format!(
            "Sokoban | moves: {} | pushes: {}",
            self.level.moves(),
            self.level.pushes()
        ))
    }
}

fn log_outcome(action: InputAction, outcome: &MoveOutcome) {
    match outcome {
        MoveOutcome::Stepped { to } => {
            debug!(?action, col = to.col, row = to.row, "player_moved");
        }
        MoveOutcome::Pushed {
            to,
            box_to,
            box_tile,
            ..
        } => {
            debug!(
                ?action,
                col = to.col,
                row = to.row,
                box_col = box_to.col,
                box_row = box_to.row,
                box_tile = ?box_tile,
                "box_pushed"
            );
        }
        MoveOutcome::Blocked {
            at,
            reason: BlockReason::Wall,
        } => {
            debug!(?action, col = at.col, row = at.row, "move_blocked_by_wall");
        }
        MoveOutcome::Blocked {
            at,
            reason:
                BlockReason::PushObstructed {
                    beyond,
                    beyond_tile,
                },
        } => {
            debug!(
                ?action,
                col = at.col,
                row = at.row,
                beyond_col = beyond.col,
                beyond_row = beyond.row,
                beyond_tile = ?beyond_tile,
                "push_blocked"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gameplay::types::GridPos;

    fn scene() -> SokobanScene {
        SokobanScene::new("main", Level::starting_layout().expect("level"))
    }

    #[test]
    fn quit_action_asks_loop_to_exit() {
        let mut scene = scene();
        assert_eq!(scene.handle_action(InputAction::Quit), SceneCommand::Quit);
        assert_eq!(scene.level.player.pos, GridPos::new(0, 0));
    }

    #[test]
    fn movement_actions_drive_the_level() {
        let mut scene = scene();
        assert_eq!(
            scene.handle_action(InputAction::MoveDown),
            SceneCommand::None
        );
        assert_eq!(scene.level.player.pos, GridPos::new(0, 1));
    }

    #[test]
    fn update_does_not_touch_state() {
        let mut scene = scene();
        let before = scene.level.clone();
        scene.update(0.5);
        scene.update(10.0);
        assert_eq!(scene.level, before);
    }

    #[test]
    fn title_reports_counters() {
        let mut scene = scene();
        assert_eq!(
            scene.debug_title().as_deref(),
            Some("Sokoban | moves: 0 | pushes: 0")
        );
        scene.handle_action(InputAction::MoveRight);
        assert_eq!(
            scene.debug_title().as_deref(),
            Some("Sokoban | moves: 1 | pushes: 0")
        );
    }

    #[test]
    fn render_is_a_pure_read() {
        let scene = scene();
        let before = scene.level.clone();
        let mut frame = vec![0; 800 * 400 * 4];
        let mut canvas = Canvas::new(&mut frame, 800, 400).expect("canvas");
        scene.render(&mut canvas);
        scene.render(&mut canvas);
        assert_eq!(scene.level, before);
    }
}
