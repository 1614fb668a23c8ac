pub mod app;

pub use app::{
    action_for_physical_key, run_app, AppError, Canvas, CanvasError, InputAction, LoopConfig,
    LoopMetricsSnapshot, RenderError, Renderer, Rgba, Scene, SceneCommand, Viewport,
    RENDER_FPS_CAP_ENV_VAR,
};
