//! Tearing — deactivating constraints struck by a drawn polyline.

use weft_solver::{ClothState, ConstraintSet};
use weft_types::{ConstraintId, Vec2};

use crate::geometry::segments_intersect;

/// Tears every active constraint crossed by the gesture polyline.
///
/// Each active constraint is tested against every consecutive polyline
/// segment; the first intersecting segment deactivates the constraint
/// and ends its scan, but the remaining constraints are still tested
/// against the whole polyline (brute force, no early exit across
/// constraints). Deactivation is permanent.
///
/// Degenerate gestures (fewer than two points, zero-length segments)
/// yield no intersections and no deactivations.
///
/// Returns the number of constraints severed.
pub fn tear_along(path: &[Vec2], state: &ClothState, constraints: &mut ConstraintSet) -> u32 {
    if path.len() < 2 {
        return 0;
    }

    let mut severed = 0;
    for i in 0..constraints.len() {
        let id = ConstraintId(i as u32);
        let c = match constraints.get(id) {
            Some(c) if c.active => *c,
            _ => continue,
        };

        let pa = state.position(c.a);
        let pb = state.position(c.b);
        let hit = path
            .windows(2)
            .any(|seg| segments_intersect(seg[0], seg[1], pa, pb));

        if hit {
            constraints.deactivate(id);
            severed += 1;
        }
    }
    severed
}
