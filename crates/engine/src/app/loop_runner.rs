use std::env;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowBuilder;

use super::input::{action_for_physical_key, ActionStates};
use super::metrics::MetricsAccumulator;
use super::{InputAction, Renderer, Scene, SceneCommand, Viewport};

pub const RENDER_FPS_CAP_ENV_VAR: &str = "SOKOBAN_MAX_FPS";

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub max_frame_delta: Duration,
    pub metrics_log_interval: Duration,
    pub max_render_fps: Option<u32>,
    pub key_repeat: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "Sokoban".to_string(),
            window_width: 800,
            window_height: 400,
            max_frame_delta: Duration::from_millis(250),
            metrics_log_interval: Duration::from_secs(5),
            max_render_fps: None,
            key_repeat: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub fn run_app(config: LoopConfig, mut scene: Box<dyn Scene>) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let buffer = Viewport {
        width: config.window_width,
        height: config.window_height,
    };
    let mut renderer =
        Renderer::new(Arc::clone(&window), buffer).map_err(AppError::CreateRenderer)?;

    event_loop.set_control_flow(ControlFlow::Poll);

    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(5));
    let effective_render_cap = resolve_render_fps_cap(config.max_render_fps);
    let render_frame_target = target_frame_duration(effective_render_cap);
    let mut input_collector = InputCollector::new(config.key_repeat);

    scene.load();
    info!(
        buffer_width = renderer.buffer_size().width,
        buffer_height = renderer.buffer_size().height,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        render_fps_cap = %format_render_cap(effective_render_cap),
        key_repeat = config.key_repeat,
        "loop_config"
    );

    let mut last_frame_instant = Instant::now();
    let mut last_present_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);
    let mut last_applied_title: Option<String> = None;
    let window_for_loop = Arc::clone(&window);

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window_for_loop.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        info!(reason = "window_close", "shutdown_requested");
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(error) =
                            renderer.resize_surface(new_size.width, new_size.height)
                        {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        let size = window_for_loop.inner_size();
                        if let Err(error) = renderer.resize_surface(size.width, size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        let Some(action) = input_collector.handle_keyboard_input(&event) else {
                            return;
                        };
                        metrics_accumulator.record_action();
                        if dispatch_action(&mut *scene, action) {
                            window_target.exit();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                        last_frame_instant = now;
                        let frame_dt = clamp_frame_delta(raw_frame_dt, max_frame_delta);
                        scene.update(frame_dt.as_secs_f32());

                        let elapsed_since_last_present =
                            Instant::now().saturating_duration_since(last_present_instant);
                        let cap_sleep =
                            compute_cap_sleep(elapsed_since_last_present, render_frame_target);
                        if cap_sleep > Duration::ZERO {
                            thread::sleep(cap_sleep);
                        }

                        if let Err(error) = renderer.render_scene(&*scene) {
                            warn!(error = %error, "renderer_draw_failed");
                            window_target.exit();
                        }
                        last_present_instant = Instant::now();

                        let next_title = scene.debug_title();
                        if next_title != last_applied_title {
                            match &next_title {
                                Some(title) => window_for_loop.set_title(title),
                                None => window_for_loop.set_title(&config.window_title),
                            }
                            last_applied_title = next_title;
                        }
                        metrics_accumulator.record_frame(raw_frame_dt);

                        if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                            info!(
                                fps = snapshot.fps,
                                actions_per_second = snapshot.actions_per_second,
                                frame_time_ms = snapshot.frame_time_ms,
                                "loop_metrics"
                            );
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window_for_loop.request_redraw();
            }
            Event::LoopExiting => {
                scene.unload();
                info!("shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Turns raw key events into discrete actions. A press yields an action when the key
/// was up, or when it is an OS auto-repeat and repeats are enabled.
#[derive(Debug, Default)]
struct InputCollector {
    key_repeat: bool,
    action_states: ActionStates,
}

impl InputCollector {
    fn new(key_repeat: bool) -> Self {
        Self {
            key_repeat,
            ..Self::default()
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) -> Option<InputAction> {
        self.handle_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    fn handle_key(
        &mut self,
        key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputAction> {
        let Some(action) = action_for_physical_key(key) else {
            debug!(key = ?key, "key_ignored");
            return None;
        };

        match state {
            ElementState::Pressed => {
                let was_down = self.action_states.is_down(action);
                self.action_states.set(action, true);
                if was_down && !(repeat && self.key_repeat) {
                    return None;
                }
                Some(action)
            }
            ElementState::Released => {
                self.action_states.set(action, false);
                None
            }
        }
    }
}

/// Hands one action to the scene. Returns true once the scene asks the loop to stop.
fn dispatch_action(scene: &mut dyn Scene, action: InputAction) -> bool {
    match scene.handle_action(action) {
        SceneCommand::Quit => {
            info!(
                reason = "scene_command",
                action = ?action,
                "shutdown_requested"
            );
            true
        }
        SceneCommand::None => false,
    }
}

fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

fn normalize_render_fps_cap(cap: Option<u32>) -> Option<u32> {
    cap.filter(|value| *value > 0)
}

fn target_frame_duration(max_render_fps: Option<u32>) -> Option<Duration> {
    max_render_fps.map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
}

fn compute_cap_sleep(elapsed: Duration, target: Option<Duration>) -> Duration {
    match target {
        Some(frame_target) if elapsed < frame_target => frame_target - elapsed,
        _ => Duration::ZERO,
    }
}

fn format_render_cap(cap: Option<u32>) -> String {
    match cap {
        Some(value) => value.to_string(),
        None => "off".to_string(),
    }
}

fn resolve_render_fps_cap(config_cap: Option<u32>) -> Option<u32> {
    parse_render_fps_cap(env::var(RENDER_FPS_CAP_ENV_VAR), config_cap)
}

fn parse_render_fps_cap(
    raw: Result<String, env::VarError>,
    config_cap: Option<u32>,
) -> Option<u32> {
    match raw {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(fps) => normalize_render_fps_cap(Some(fps)),
            Err(_) => {
                warn!(
                    env_var = RENDER_FPS_CAP_ENV_VAR,
                    value = value.as_str(),
                    "invalid render fps cap env var value; falling back to config"
                );
                normalize_render_fps_cap(config_cap)
            }
        },
        Err(env::VarError::NotPresent) => normalize_render_fps_cap(config_cap),
        Err(err) => {
            warn!(
                env_var = RENDER_FPS_CAP_ENV_VAR,
                error = %err,
                "unable to read render fps cap env var; falling back to config"
            );
            normalize_render_fps_cap(config_cap)
        }
    }
}
