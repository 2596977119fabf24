//! Pinning — toggling a particle's fixed state by proximity.

use weft_solver::ClothState;
use weft_types::{ParticleId, Scalar, Vec2};

/// Toggles the pinned flag of the first particle within `radius` of
/// the query point.
///
/// Particles are scanned in storage (grid row-major) order and the
/// comparison uses squared distance, so no square root is taken.
/// First-match, not nearest-match: when several particles fall inside
/// the radius, only the one earliest in enumeration order toggles.
///
/// Returns the toggled particle and its new pinned state, or `None`
/// when no particle lies within the radius.
pub fn toggle_pin_near(
    point: Vec2,
    radius: Scalar,
    state: &mut ClothState,
) -> Option<(ParticleId, bool)> {
    let radius_sq = radius * radius;
    for i in 0..state.particle_count {
        let dx = state.pos_x[i] - point.x;
        let dy = state.pos_y[i] - point.y;
        if dx * dx + dy * dy < radius_sq {
            let id = ParticleId(i as u32);
            let pinned = state.toggle_pin(id);
            return Some((id, pinned));
        }
    }
    None
}
