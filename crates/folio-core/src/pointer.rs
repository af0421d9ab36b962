use crate::constants::POINTER_SENTINEL;
use glam::Vec2;

/// Last known pointer position in viewport px.
///
/// Written by the host's pointer events, read once per frame. When the
/// pointer leaves (or never arrives on touch-only devices) it sits at a
/// sentinel far outside any viewport, so proximity checks simply never pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl PointerState {
    pub const ABSENT: PointerState = PointerState {
        position: Vec2::new(POINTER_SENTINEL, POINTER_SENTINEL),
    };

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn leave(&mut self) {
        *self = Self::ABSENT;
    }

    pub fn is_present(&self) -> bool {
        *self != Self::ABSENT
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::ABSENT
    }
}
