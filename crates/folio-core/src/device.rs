//! Device-class profile resolved once per mount.
//!
//! Mobile-class devices get a sparser field, shorter links and no pointer
//! interaction. The profile is passed explicitly into everything that needs
//! it instead of re-checking the viewport in several places.

use crate::constants::*;
use crate::error::FolioError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    pub class: DeviceClass,
    pub density_divisor: f32,
    pub max_particles: usize,
    pub connection_distance: f32,
    pub velocity_span: f32,
    pub repulsion_radius: f32,
    pub pointer_interaction: bool,
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self {
            class: DeviceClass::Desktop,
            density_divisor: DESKTOP_DENSITY_DIVISOR,
            max_particles: DESKTOP_MAX_PARTICLES,
            connection_distance: DESKTOP_CONNECTION_DIST,
            velocity_span: DESKTOP_VELOCITY_SPAN,
            repulsion_radius: POINTER_REPULSION_RADIUS,
            pointer_interaction: true,
        }
    }

    pub fn mobile() -> Self {
        Self {
            class: DeviceClass::Mobile,
            density_divisor: MOBILE_DENSITY_DIVISOR,
            max_particles: MOBILE_MAX_PARTICLES,
            connection_distance: MOBILE_CONNECTION_DIST,
            velocity_span: MOBILE_VELOCITY_SPAN,
            repulsion_radius: POINTER_REPULSION_RADIUS,
            pointer_interaction: false,
        }
    }

    /// Pick a profile from the viewport width and whether the primary input
    /// is a fine pointer (mouse/trackpad). Touch-only devices are always
    /// mobile-class.
    pub fn resolve(viewport_width: f32, fine_pointer: bool) -> Self {
        if viewport_width < MOBILE_BREAKPOINT_PX || !fine_pointer {
            Self::mobile()
        } else {
            Self::desktop()
        }
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if !(self.density_divisor > 0.0) {
            return Err(FolioError::InvalidProfile("density divisor must be positive"));
        }
        if !(self.connection_distance > 0.0) {
            return Err(FolioError::InvalidProfile(
                "connection distance must be positive",
            ));
        }
        if !(self.repulsion_radius > 0.0) {
            return Err(FolioError::InvalidProfile("repulsion radius must be positive"));
        }
        if !(self.velocity_span >= 0.0) {
            return Err(FolioError::InvalidProfile("velocity span must not be negative"));
        }
        Ok(())
    }

    /// `min(floor(width * height / divisor), max_particles)`.
    ///
    /// Degenerate or non-finite viewports yield zero particles.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        let area = width * height;
        if !area.is_finite() || area <= 0.0 {
            return 0;
        }
        let by_density = (area / self.density_divisor).floor();
        if by_density >= self.max_particles as f32 {
            self.max_particles
        } else {
            by_density as usize
        }
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop()
    }
}
