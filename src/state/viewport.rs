use crate::model::Point;

// Fits the square board into whatever size the canvas has
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    /// Largest zoom that shows the whole board, centered.
    pub fn fit(&mut self, canvas_w: f64, canvas_h: f64, board_w: f64, board_h: f64) {
        if board_w <= 0.0 || board_h <= 0.0 {
            return;
        }
        self.zoom = (canvas_w / board_w).min(canvas_h / board_h).max(0.05);
        self.offset_x = (canvas_w - board_w * self.zoom) * 0.5;
        self.offset_y = (canvas_h - board_h * self.zoom) * 0.5;
    }

    pub fn to_board(&self, canvas_x: f64, canvas_y: f64) -> Point {
        Point::new((canvas_x - self.offset_x) / self.zoom, (canvas_y - self.offset_y) / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_letterboxes_wide_canvas() {
        let mut v = Viewport::default();
        v.fit(1600.0, 800.0, 800.0, 800.0);
        assert_eq!(v.zoom, 1.0);
        assert_eq!(v.offset_x, 400.0);
        assert_eq!(v.offset_y, 0.0);
        assert_eq!(v.to_board(800.0, 400.0), Point::new(400.0, 400.0));
    }

    #[test]
    fn fit_scales_small_canvas() {
        let mut v = Viewport::default();
        v.fit(400.0, 600.0, 800.0, 800.0);
        assert_eq!(v.zoom, 0.5);
        assert_eq!(v.offset_y, 100.0);
        assert_eq!(v.to_board(200.0, 300.0), Point::new(400.0, 400.0));
    }
}
