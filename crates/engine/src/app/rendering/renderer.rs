use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture, TextureError};
use thiserror::Error;
use winit::window::Window;

use crate::app::Scene;

use super::{Canvas, CanvasError, Viewport};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to wrap frame buffer: {0}")]
    Canvas(#[from] CanvasError),
    #[error("failed to present frame: {0}")]
    Present(#[from] pixels::Error),
}

/// Owns the pixel surface. The frame buffer keeps the logical size it was created with;
/// only the window surface follows resizes, so the picture is scaled rather than reflowed.
pub struct Renderer {
    pixels: Pixels<'static>,
    buffer: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>, buffer: Viewport) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer.width, buffer.height, surface)?;
        Ok(Self { pixels, buffer })
    }

    pub fn buffer_size(&self) -> Viewport {
        self.buffer
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub(crate) fn render_scene(&mut self, scene: &dyn Scene) -> Result<(), RenderError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        {
            let frame = self.pixels.frame_mut();
            let mut canvas = Canvas::new(frame, self.buffer.width, self.buffer.height)?;
            scene.render(&mut canvas);
        }
        self.pixels.render()?;
        Ok(())
    }
}
