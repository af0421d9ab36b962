// Shared tuning constants for the particle field, cursor glow and card stage.

// Device classes
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // viewports narrower than this are mobile-class

// Particle density (one particle per this many square px) and caps
pub const DESKTOP_DENSITY_DIVISOR: f32 = 9000.0;
pub const DESKTOP_MAX_PARTICLES: usize = 120;
pub const MOBILE_DENSITY_DIVISOR: f32 = 15000.0;
pub const MOBILE_MAX_PARTICLES: usize = 50;

// Pairwise link distance (px)
pub const DESKTOP_CONNECTION_DIST: f32 = 120.0;
pub const MOBILE_CONNECTION_DIST: f32 = 80.0;

// Velocity half-span: each axis is drawn from [-span, span) px/frame
pub const DESKTOP_VELOCITY_SPAN: f32 = 0.2;
pub const MOBILE_VELOCITY_SPAN: f32 = 0.15;

// Particle appearance ranges
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_MAX: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_MAX: f32 = 0.6;

// Link styling
pub const LINK_ALPHA_MAX: f32 = 0.15; // alpha of a zero-length particle link
pub const LINK_WIDTH: f32 = 0.5;
pub const POINTER_LINK_ALPHA_MAX: f32 = 0.3;
pub const POINTER_LINK_WIDTH: f32 = 0.8;

// Pointer interaction
pub const POINTER_REPULSION_RADIUS: f32 = 200.0;
pub const POINTER_PUSH_STRENGTH: f32 = 2.0; // px pushed per frame at zero distance
pub const POINTER_SENTINEL: f32 = -10_000.0; // both axes; far outside any viewport

// Resize handling
pub const RESIZE_DEBOUNCE_MS: i32 = 200;

// Cursor glow
pub const GLOW_FOLLOW_PER_FRAME: f32 = 0.08; // lerp factor at 60 Hz
pub const GLOW_REFERENCE_FPS: f32 = 60.0;
pub const GLOW_HALF_SIZE_PX: f32 = 300.0;
pub const GLOW_MAX_DT_SEC: f32 = 0.25; // clamp after tab switches

// Card stage: entry phase as a fraction of an item's segment
pub const STAGE_ENTRY_FRACTION: f32 = 0.18;
pub const STAGE_TEXT_EXIT_FRACTION: f32 = 0.18;
pub const STAGE_ENTRY_SCALE: f32 = 0.92;

// Card stage: vertical entry offsets (px, positive is downward)
pub const STAGE_TEXT_ENTRY_OFFSET: f32 = 60.0;
pub const STAGE_CARD_ENTRY_OFFSET: f32 = 160.0;
pub const STAGE_FOLDER_ENTRY_OFFSET: f32 = 80.0;
pub const STAGE_COVER_ENTRY_OFFSET: f32 = 240.0;
pub const STAGE_COVER_ENTRY_ROTATION_DEG: f32 = -8.0;

// Card stage: post-settle fan, multiplied by the 1-based item ordinal
pub const STAGE_FAN_ROTATION_DEG: f32 = 2.5;
pub const STAGE_FAN_OFFSET_X: f32 = 14.0;
pub const STAGE_FAN_OFFSET_Y: f32 = -10.0;

// Card stage: final zoom-out
pub const STAGE_FINAL_SCALE: f32 = 0.6;
pub const STAGE_FINAL_DRIFT_X: f32 = -40.0;
