//! Particle field: drifting points, proximity links and pointer repulsion.
//!
//! One call to [`ParticleField::frame`] is one animation tick: clear, move
//! every particle (wrapping toroidally), push particles away from a nearby
//! pointer, draw them, then draw links between close pairs.

use crate::constants::*;
use crate::device::DeviceProfile;
use crate::error::FolioError;
use crate::pointer::PointerState;
use crate::surface::DrawSurface;
use crate::theme::Theme;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: Vec2, velocity_span: f32) -> Self {
        let position = Vec2::new(
            wrap_axis(rng.gen::<f32>() * size.x, size.x),
            wrap_axis(rng.gen::<f32>() * size.y, size.y),
        );
        let velocity = Vec2::new(
            (rng.gen::<f32>() * 2.0 - 1.0) * velocity_span,
            (rng.gen::<f32>() * 2.0 - 1.0) * velocity_span,
        );
        let radius =
            PARTICLE_RADIUS_MIN + rng.gen::<f32>() * (PARTICLE_RADIUS_MAX - PARTICLE_RADIUS_MIN);
        let opacity = PARTICLE_OPACITY_MIN
            + rng.gen::<f32>() * (PARTICLE_OPACITY_MAX - PARTICLE_OPACITY_MIN);
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }
}

/// Per-frame snapshot of everything outside the field that affects drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldContext {
    pub pointer: PointerState,
    pub theme: Theme,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
    pub pointer_links: usize,
}

/// Toroidal wrap of one coordinate into `[0, extent)`.
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0) || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn wrap_position(position: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(position.x, size.x), wrap_axis(position.y, size.y))
}

/// Distance between two particles if they are strictly closer than
/// `threshold`. The axis-aligned reject runs before the exact check.
#[inline]
pub fn link_distance(a: Vec2, b: Vec2, threshold: f32) -> Option<f32> {
    let d = a - b;
    if d.x.abs() > threshold || d.y.abs() > threshold {
        return None;
    }
    let dist_sq = d.length_squared();
    if dist_sq < threshold * threshold {
        Some(dist_sq.sqrt())
    } else {
        None
    }
}

/// Alpha for a line of length `dist`, fading linearly to zero at `range`.
#[inline]
pub fn fade_alpha(dist: f32, range: f32, max_alpha: f32) -> f32 {
    ((1.0 - dist / range) * max_alpha).clamp(0.0, max_alpha)
}

/// Displacement applied to a particle at `offset` from the pointer
/// (`offset = particle - pointer`). Zero outside the radius and at the
/// pointer itself.
#[inline]
pub fn repulsion(offset: Vec2, radius: f32) -> Vec2 {
    let dist = offset.length();
    if dist >= radius || dist <= 0.0 {
        return Vec2::ZERO;
    }
    let force = (radius - dist) / radius;
    offset / dist * force * POINTER_PUSH_STRENGTH
}

/// Seed for [`ParticleField::new`] from a host random number in [0, 1).
/// Distinct inputs give distinct seeds; non-finite input maps to 0.
pub fn seed_from_unit(unit: f64) -> u64 {
    let unit = if unit.is_finite() {
        unit.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let bits = (unit * (1u64 << 53) as f64) as u64;
    bits.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub struct ParticleField {
    profile: DeviceProfile,
    size: Vec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(profile: DeviceProfile, size: Vec2, seed: u64) -> Result<Self, FolioError> {
        profile.validate()?;
        let mut field = Self {
            profile,
            size,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        field.regenerate();
        Ok(field)
    }

    /// Build a field around an explicit particle set (no random generation).
    pub fn with_particles(
        profile: DeviceProfile,
        size: Vec2,
        particles: Vec<Particle>,
    ) -> Result<Self, FolioError> {
        profile.validate()?;
        Ok(Self {
            profile,
            size,
            particles,
            rng: StdRng::seed_from_u64(0),
        })
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Throw away every particle and generate a fresh set for `size`.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let count = self.profile.particle_count(self.size.x, self.size.y);
        let size = self.size;
        let span = self.profile.velocity_span;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, size, span))
            .collect();
        log::debug!(
            "[field] generated {} particles for {:.0}x{:.0} ({:?})",
            count,
            size.x,
            size.y,
            self.profile.class
        );
    }

    /// Advance one tick and draw it.
    pub fn frame<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        ctx: &FieldContext,
    ) -> FrameStats {
        surface.clear(self.size);
        let rgb = ctx.theme.particle_rgb();
        let size = self.size;
        let radius = self.profile.repulsion_radius;
        let pointer = ctx.pointer.position;
        let interact = self.profile.pointer_interaction && ctx.pointer.is_present();

        let mut stats = FrameStats {
            particles: self.particles.len(),
            ..FrameStats::default()
        };

        for p in self.particles.iter_mut() {
            p.position = wrap_position(p.position + p.velocity, size);

            if interact {
                let offset = p.position - pointer;
                let dist = offset.length();
                if dist < radius {
                    p.position = wrap_position(p.position + repulsion(offset, radius), size);
                    let alpha = fade_alpha(dist, radius, POINTER_LINK_ALPHA_MAX);
                    surface.stroke_line(
                        p.position,
                        pointer,
                        POINTER_LINK_WIDTH,
                        rgb.with_alpha(alpha),
                    );
                    stats.pointer_links += 1;
                }
            }

            surface.fill_circle(p.position, p.radius, rgb.with_alpha(p.opacity));
        }

        stats.links = self.draw_links(surface, ctx.theme);
        stats
    }

    /// Draw the particles once without moving them (reduced motion).
    pub fn draw_static<S: DrawSurface + ?Sized>(&self, surface: &mut S, theme: Theme) -> FrameStats {
        surface.clear(self.size);
        let rgb = theme.particle_rgb();
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, rgb.with_alpha(p.opacity));
        }
        FrameStats {
            particles: self.particles.len(),
            ..FrameStats::default()
        }
    }

    fn draw_links<S: DrawSurface + ?Sized>(&self, surface: &mut S, theme: Theme) -> usize {
        let rgb = theme.particle_rgb();
        let threshold = self.profile.connection_distance;
        let mut links = 0;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(dist) = link_distance(a.position, b.position, threshold) {
                    let alpha = fade_alpha(dist, threshold, LINK_ALPHA_MAX);
                    surface.stroke_line(a.position, b.position, LINK_WIDTH, rgb.with_alpha(alpha));
                    links += 1;
                }
            }
        }
        links
    }
}
