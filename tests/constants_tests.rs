// Host-side tests for tuning constants and their relationships.

use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_well_formed() {
    assert!(PARTICLE_RADIUS_MIN > 0.0 && PARTICLE_RADIUS_MIN < PARTICLE_RADIUS_MAX);
    assert!(PARTICLE_OPACITY_MIN > 0.0 && PARTICLE_OPACITY_MIN < PARTICLE_OPACITY_MAX);
    assert!(PARTICLE_OPACITY_MAX <= 1.0);
    assert!(LINK_ALPHA_MAX > 0.0 && LINK_ALPHA_MAX <= 1.0);
    assert!(POINTER_LINK_ALPHA_MAX > 0.0 && POINTER_LINK_ALPHA_MAX <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_is_cheaper_than_desktop() {
    assert!(MOBILE_DENSITY_DIVISOR > DESKTOP_DENSITY_DIVISOR);
    assert!(MOBILE_MAX_PARTICLES < DESKTOP_MAX_PARTICLES);
    assert!(MOBILE_CONNECTION_DIST < DESKTOP_CONNECTION_DIST);
    assert!(MOBILE_VELOCITY_SPAN <= DESKTOP_VELOCITY_SPAN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_sentinel_is_out_of_reach() {
    // a particle at the origin must never be within reach of the sentinel
    let d = (2.0 * POINTER_SENTINEL * POINTER_SENTINEL).sqrt();
    assert!(d > POINTER_REPULSION_RADIUS * 10.0);
    assert!(POINTER_REPULSION_RADIUS > DESKTOP_CONNECTION_DIST);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stage_fractions_leave_room_to_settle() {
    assert!(STAGE_ENTRY_FRACTION > 0.0);
    assert!(STAGE_ENTRY_FRACTION + STAGE_TEXT_EXIT_FRACTION < 1.0);
    assert!(STAGE_ENTRY_SCALE < 1.0);
    assert!(STAGE_FINAL_SCALE < 1.0 && STAGE_FINAL_SCALE > 0.0);
    assert!(STAGE_CARD_ENTRY_OFFSET > STAGE_TEXT_ENTRY_OFFSET);
}
