use super::input::InputAction;
use super::rendering::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// A single state-owning game screen driven by the loop runner.
///
/// Input arrives as discrete [`InputAction`] messages, one per key press, and is handled
/// synchronously before the next frame. `render` must only read state.
pub trait Scene {
    fn load(&mut self);
    fn handle_action(&mut self, action: InputAction) -> SceneCommand;
    fn update(&mut self, _dt_seconds: f32) {}
    fn render(&self, canvas: &mut Canvas<'_>);
    fn unload(&mut self) {}
    fn debug_title(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingScene {
        loads: u32,
        actions: Vec<InputAction>,
    }

    impl Scene for CountingScene {
        fn load(&mut self) {
            self.loads += 1;
        }

        fn handle_action(&mut self, action: InputAction) -> SceneCommand {
            self.actions.push(action);
            SceneCommand::None
        }

        fn render(&self, canvas: &mut Canvas<'_>) {
            canvas.clear([0, 0, 0, 255]);
        }
    }

    #[test]
    fn default_hooks_are_no_ops() {
        let mut scene = CountingScene::default();
        scene.load();
        scene.update(0.016);
        scene.unload();

        assert_eq!(scene.loads, 1);
        assert!(scene.actions.is_empty());
        assert_eq!(scene.debug_title(), None);
    }

    #[test]
    fn scene_is_object_safe() {
        let mut scene: Box<dyn Scene> = Box::new(CountingScene::default());
        assert_eq!(
            scene.handle_action(InputAction::MoveDown),
            SceneCommand::None
        );

        let mut frame = vec![0; 4];
        let mut canvas = Canvas::new(&mut frame, 1, 1).expect("canvas");
        scene.render(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
    }
}
