use crate::graph::Position;

/// The canvas viewport: a pan offset plus zoom factor used to translate a
/// drop coordinate from screen space into canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan: Position,
    pub zoom: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            pan: Position::default(),
            zoom: 1.0,
        }
    }

    /// Projects a screen-space point (already relative to the canvas origin)
    /// into canvas space.
    pub fn project(&self, screen: Position) -> Position {
        Position {
            x: (screen.x - self.pan.x) / self.zoom,
            y: (screen.y - self.pan.y) / self.zoom,
        }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Zoom factor is kept strictly positive.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > 0.0 {
            self.zoom = zoom;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
