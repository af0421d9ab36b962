use crate::constants::{GLOW_FOLLOW_PER_FRAME, GLOW_HALF_SIZE_PX, GLOW_MAX_DT_SEC, GLOW_REFERENCE_FPS};
use glam::Vec2;

/// Smoothing factor for `dt_sec` of elapsed time. Equals
/// `GLOW_FOLLOW_PER_FRAME` for one 60 Hz frame.
#[inline]
pub fn follow_alpha(dt_sec: f32) -> f32 {
    let dt = if dt_sec.is_finite() {
        dt_sec.clamp(0.0, GLOW_MAX_DT_SEC)
    } else {
        0.0
    };
    1.0 - (1.0 - GLOW_FOLLOW_PER_FRAME).powf(dt * GLOW_REFERENCE_FPS)
}

/// Soft glow that trails the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorGlow {
    target: Vec2,
    current: Vec2,
}

impl CursorGlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        self.current += (self.target - self.current) * follow_alpha(dt_sec);
        self.current
    }

    /// CSS transform centering the glow element on the smoothed position.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px)",
            self.current.x - GLOW_HALF_SIZE_PX,
            self.current.y - GLOW_HALF_SIZE_PX
        )
    }
}
