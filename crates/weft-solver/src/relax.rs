//! Constraint relaxation — sequential Gauss–Seidel passes.
//!
//! Instead of applying spring forces, each pass moves constraint
//! endpoints directly toward satisfying the rest length (constraint
//! projection, after Jakobsen's "Advanced Character Physics").
//! Repeated passes approximate a globally consistent configuration.

use weft_types::Scalar;

use crate::constraint::ConstraintSet;
use crate::state::ClothState;

/// One sweep over every active constraint, in insertion order.
///
/// For each constraint the positional error is split evenly: the
/// correction is half the excess along the delta, added to endpoint A
/// and subtracted from endpoint B. A pinned endpoint absorbs nothing,
/// and the free endpoint still receives only its half-correction, so
/// a constraint with one pinned endpoint under-corrects per pass.
///
/// A zero current length leaves the correction undefined, so the
/// constraint is treated as already satisfied and skipped; without the
/// guard a division by zero would send non-finite values into every
/// subsequent tick.
pub fn relax_pass(state: &mut ClothState, constraints: &ConstraintSet) {
    for c in constraints.iter() {
        if !c.active {
            continue;
        }

        let pa = state.position(c.a);
        let pb = state.position(c.b);
        let delta = pb - pa;
        let current_length = delta.length();
        if current_length == 0.0 {
            continue;
        }

        let diff = (current_length - c.rest_length) / current_length;
        let correction = delta * 0.5 * diff;

        if !state.pinned[c.a.index()] {
            state.set_position(c.a, pa + correction);
        }
        if !state.pinned[c.b.index()] {
            state.set_position(c.b, pb - correction);
        }
    }
}

/// Runs `passes` relaxation sweeps over the same list.
///
/// More passes increase stiffness and accuracy at higher cost; fewer
/// passes yield visibly elastic, under-constrained cloth.
pub fn relax(state: &mut ClothState, constraints: &ConstraintSet, passes: u32) {
    for _ in 0..passes {
        relax_pass(state, constraints);
    }
}

/// Current length of a constraint's particle segment. Diagnostic
/// helper for tests and telemetry.
pub fn current_length(
    state: &ClothState,
    c: &crate::constraint::DistanceConstraint,
) -> Scalar {
    (state.position(c.b) - state.position(c.a)).length()
}
