//! The per-tick pipeline.
//!
//! Stage order is load-bearing: changing it changes simulated
//! behavior. Each stage is a whole-collection transform over the SoA
//! buffers, so the stages stay independently testable.

use weft_types::Vec2;

use crate::config::SolverConfig;
use crate::constraint::ConstraintSet;
use crate::relax::relax;
use crate::state::ClothState;

/// Runs exactly one physics tick:
///
/// 1. apply gravity to every non-pinned particle
/// 2. Verlet-integrate over the fixed step
/// 3. damp implied velocities
/// 4. resolve ground collisions
/// 5. relax all active constraints, N sequential passes
pub fn run_tick(state: &mut ClothState, constraints: &ConstraintSet, config: &SolverConfig) {
    state.apply_force(Vec2::new(config.gravity[0], config.gravity[1]));
    state.integrate(config.time_step);
    state.damp(config.damping);
    state.resolve_ground(config.restitution);
    relax(state, constraints, config.relaxation_passes);
}
