//! Board geometry: the rectangular loop enemies walk and the inner area towers live in.

use crate::config::GameConfig;
use crate::model::Point;

/// Closed loop running through the middle of the track band.
///
/// Enemies start at the top-right corner and travel counter-clockwise on screen:
/// left along the top edge, down the left edge, right along the bottom, up the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopPath {
    pub width: f64,
    pub height: f64,
    pub offset: f64,
    pub length_x: f64,
    pub length_y: f64,
    pub perimeter: f64,
}

impl LoopPath {
    pub fn new(config: &GameConfig) -> Self {
        let offset = config.track_thickness / 2.0;
        let length_x = config.width - offset * 2.0;
        let length_y = config.height - offset * 2.0;
        Self {
            width: config.width,
            height: config.height,
            offset,
            length_x,
            length_y,
            perimeter: length_x * 2.0 + length_y * 2.0,
        }
    }

    pub fn position(&self, progress: f64) -> Point {
        let mut p = progress.rem_euclid(self.perimeter);
        if p < self.length_x {
            return Point::new(self.width - self.offset - p, self.offset);
        }
        p -= self.length_x;
        if p < self.length_y {
            return Point::new(self.offset, self.offset + p);
        }
        p -= self.length_y;
        if p < self.length_x {
            return Point::new(self.offset + p, self.height - self.offset);
        }
        p -= self.length_x;
        Point::new(self.width - self.offset, self.height - self.offset - p)
    }
}

/// The square inside the track where towers may stand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InnerArea {
    pub start: f64,
    pub end: f64,
    pub margin: f64,
}

impl InnerArea {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            start: config.track_thickness,
            end: config.width - config.track_thickness,
            margin: config.placement_margin,
        }
    }

    /// Strictly inside; a tower exactly on the edge counts as outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.start && x < self.end && y > self.start && y < self.end
    }

    pub fn clamp(&self, x: f64, y: f64) -> Point {
        let lo = self.start + self.margin;
        let hi = self.end - self.margin;
        Point::new(x.max(lo).min(hi), y.max(lo).min(hi))
    }

    pub fn center(&self) -> Point {
        let c = (self.start + self.end) / 2.0;
        Point::new(c, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> LoopPath {
        LoopPath::new(&GameConfig::default())
    }

    #[test]
    fn perimeter_matches_board() {
        let p = path();
        assert_eq!(p.offset, 30.0);
        assert_eq!(p.length_x, 740.0);
        assert_eq!(p.perimeter, 2960.0);
    }

    #[test]
    fn walks_the_corners_in_order() {
        let p = path();
        assert_eq!(p.position(0.0), Point::new(770.0, 30.0));
        assert_eq!(p.position(740.0), Point::new(30.0, 30.0));
        assert_eq!(p.position(1480.0), Point::new(30.0, 770.0));
        assert_eq!(p.position(2220.0), Point::new(770.0, 770.0));
        assert_eq!(p.position(100.0), Point::new(670.0, 30.0));
        assert_eq!(p.position(2220.0 + 40.0), Point::new(770.0, 730.0));
    }

    #[test]
    fn wraps_exactly_after_one_lap() {
        let p = path();
        assert_eq!(p.position(p.perimeter), p.position(0.0));
        for progress in [0.0, 12.5, 739.75, 1000.0, 2959.0, 5000.25] {
            assert_eq!(p.position(progress), p.position(progress + p.perimeter));
        }
    }

    #[test]
    fn every_point_lies_on_the_track_line() {
        let p = path();
        let mut progress = 0.0;
        while progress < p.perimeter * 2.0 {
            let pos = p.position(progress);
            let on_vertical = pos.x == p.offset || pos.x == p.width - p.offset;
            let on_horizontal = pos.y == p.offset || pos.y == p.height - p.offset;
            assert!(on_vertical || on_horizontal, "{pos:?} at {progress}");
            progress += 7.3;
        }
    }

    #[test]
    fn inner_area_bounds_and_clamp() {
        let inner = InnerArea::new(&GameConfig::default());
        assert!(inner.contains(400.0, 400.0));
        assert!(!inner.contains(60.0, 400.0));
        assert!(!inner.contains(400.0, 790.0));
        assert_eq!(inner.clamp(-50.0, 900.0), Point::new(70.0, 730.0));
        assert_eq!(inner.clamp(300.0, 200.0), Point::new(300.0, 200.0));
        assert_eq!(inner.center(), Point::new(400.0, 400.0));
    }
}
