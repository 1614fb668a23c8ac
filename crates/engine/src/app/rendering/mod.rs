mod canvas;
mod renderer;

pub use canvas::{Canvas, CanvasError, Rgba};
pub use renderer::{RenderError, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    #[test]
    fn viewport_with_a_zero_side_is_empty() {
        assert!(viewport(0, 400).is_empty());
        assert!(viewport(800, 0).is_empty());
        assert!(!viewport(800, 400).is_empty());
    }
}
