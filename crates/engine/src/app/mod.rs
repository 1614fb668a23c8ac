mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::{action_for_physical_key, InputAction};
pub use loop_runner::{run_app, AppError, LoopConfig, RENDER_FPS_CAP_ENV_VAR};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{Canvas, CanvasError, RenderError, Renderer, Rgba, Viewport};
pub use scene::{Scene, SceneCommand};
