use crate::model::{Placement, TowerId};

// Mouse state kept between canvas events
#[derive(Default, Debug, Clone)]
pub struct Pointer {
    /// Tower grabbed by the last mouse-down, before the queued drag has been applied.
    pub held: Option<TowerId>,
    pub mouse_down: bool,
}

impl Pointer {
    /// The tower that pointer moves should drag: a fresh grab wins over the run's placement.
    /// A freshly drawn tower follows the pointer with the button up; a placed one needs it held.
    pub fn dragging(&self, placement: Option<Placement>) -> Option<TowerId> {
        if self.mouse_down && self.held.is_some() {
            return self.held;
        }
        placement
            .filter(|p| p.is_new || self.mouse_down)
            .map(|p| p.tower)
    }

    pub fn release(&mut self) {
        self.held = None;
        self.mouse_down = false;
    }
}
