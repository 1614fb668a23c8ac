use thiserror::Error;

pub type Rgba = [u8; 4];

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("frame size mismatch: expected {expected} bytes for {width}x{height}, got {actual}")]
    FrameSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Mutable view over an RGBA8 frame buffer, row-major with the origin at the top-left.
///
/// Every write is clipped to the buffer, so callers may pass rectangles that hang off
/// any edge (or lie entirely outside it).
#[derive(Debug)]
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Result<Self, CanvasError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        let actual = frame.len();
        if expected != actual {
            return Err(CanvasError::FrameSizeMismatch {
                width,
                height,
                expected,
                actual,
            });
        }
        Ok(Self {
            frame,
            width,
            height,
        })
    }

    pub fn clear(&mut self, color: Rgba) {
        for chunk in self.frame.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
        let left = i64::from(x).max(0);
        let top = i64::from(y).max(0);
        let right = (i64::from(x) + i64::from(width)).min(i64::from(self.width));
        let bottom = (i64::from(y) + i64::from(height)).min(i64::from(self.height));
        if left >= right || top >= bottom {
            return;
        }

        let row_stride = self.width as usize * BYTES_PER_PIXEL;
        for row in top as usize..bottom as usize {
            let start = row * row_stride + left as usize * BYTES_PER_PIXEL;
            let end = row * row_stride + right as usize * BYTES_PER_PIXEL;
            for chunk in self.frame[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                chunk.copy_from_slice(&color);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut color = [0; BYTES_PER_PIXEL];
        color.copy_from_slice(&self.frame[offset..offset + BYTES_PER_PIXEL]);
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];
    const BLACK: Rgba = [0, 0, 0, 255];

    fn blank(width: u32, height: u32) -> Vec<u8> {
        vec![0; width as usize * height as usize * BYTES_PER_PIXEL]
    }

    #[test]
    fn new_rejects_mismatched_frame() {
        let mut frame = vec![0; 10];
        let err = Canvas::new(&mut frame, 2, 2).expect_err("err");
        assert_eq!(
            err,
            CanvasError::FrameSizeMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn clear_paints_every_pixel() {
        let mut frame = blank(3, 2);
        let mut canvas = Canvas::new(&mut frame, 3, 2).expect("canvas");
        canvas.clear(BLACK);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(canvas.pixel(x, y), Some(BLACK));
            }
        }
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut frame = blank(8, 8);
        let mut canvas = Canvas::new(&mut frame, 8, 8).expect("canvas");
        canvas.fill_rect(2, 3, 2, 4, RED);

        assert_eq!(canvas.pixel(2, 3), Some(RED));
        assert_eq!(canvas.pixel(3, 6), Some(RED));
        assert_eq!(canvas.pixel(4, 3), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(2, 7), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(1, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut frame = blank(4, 4);
        let mut canvas = Canvas::new(&mut frame, 4, 4).expect("canvas");
        canvas.fill_rect(-2, -2, 4, 4, RED);
        canvas.fill_rect(3, 3, 10, 10, RED);

        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
    }

    #[test]
    fn fill_rect_fully_outside_is_a_no_op() {
        let mut frame = blank(4, 4);
        let mut canvas = Canvas::new(&mut frame, 4, 4).expect("canvas");
        canvas.fill_rect(10, 10, 4, 4, RED);
        canvas.fill_rect(-10, 0, 4, 4, RED);
        canvas.fill_rect(0, 0, 0, 4, RED);

        assert!(frame.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn pixel_outside_bounds_is_none() {
        let mut frame = blank(2, 2);
        let canvas = Canvas::new(&mut frame, 2, 2).expect("canvas");
        assert_eq!(canvas.pixel(2, 0), None);
        assert_eq!(canvas.pixel(0, 2), None);
    }
}
