//! Cloth state — SoA buffers for all per-particle data.
//!
//! This is the primary mutable data structure during simulation.
//! Each tick stage reads and writes these buffers as a whole-collection
//! transform, in a fixed order the pipeline preserves.

use weft_lattice::Lattice;
use weft_types::{ParticleId, Scalar, Vec2};

/// SoA particle state buffers.
///
/// All arrays have length `particle_count` and are never reallocated
/// mid-run; particles are addressed by stable row-major index. Only a
/// full reset replaces the buffers wholesale.
///
/// A particle carries no stored velocity. Its implied velocity at any
/// instant is `position − previousPosition`, the displacement over the
/// last tick.
///
/// # Layout
///
/// ```text
/// pos_x:  [x0, x1, x2, ...]
/// pos_y:  [y0, y1, y2, ...]
/// prev_x: [px0, px1, ...]
/// ...
/// ```
#[derive(Debug, Clone)]
pub struct ClothState {
    /// Number of particles.
    pub particle_count: usize,

    // ─── Position (current) ───
    pub pos_x: Vec<Scalar>,
    pub pos_y: Vec<Scalar>,

    // ─── Previous position (implied velocity) ───
    pub prev_x: Vec<Scalar>,
    pub prev_y: Vec<Scalar>,

    // ─── Accumulated acceleration (reset every tick) ───
    pub acc_x: Vec<Scalar>,
    pub acc_y: Vec<Scalar>,

    /// Pinned flags. A pinned particle ignores forces and integration;
    /// its previous position is forced equal to its position every tick,
    /// so its implied velocity is always zero.
    pub pinned: Vec<bool>,

    /// Optional ground plane (Y coordinate, +Y is down in screen space).
    /// When set, the tick pipeline clamps particles to it and reflects
    /// their vertical implied velocity.
    pub ground_y: Option<Scalar>,
}

impl ClothState {
    /// Initializes state from a built lattice. Particles start at rest
    /// (previous position equals position, zero acceleration).
    pub fn from_lattice(lattice: &Lattice) -> Self {
        let n = lattice.particle_count();
        Self {
            particle_count: n,
            pos_x: lattice.pos_x.clone(),
            pos_y: lattice.pos_y.clone(),
            prev_x: lattice.pos_x.clone(),
            prev_y: lattice.pos_y.clone(),
            acc_x: vec![0.0; n],
            acc_y: vec![0.0; n],
            pinned: lattice.pinned.clone(),
            ground_y: None,
        }
    }

    /// Position of particle `id`.
    #[inline]
    pub fn position(&self, id: ParticleId) -> Vec2 {
        Vec2::new(self.pos_x[id.index()], self.pos_y[id.index()])
    }

    /// Overwrites the position of particle `id` (previous position is
    /// untouched, so this changes the implied velocity).
    #[inline]
    pub fn set_position(&mut self, id: ParticleId, p: Vec2) {
        self.pos_x[id.index()] = p.x;
        self.pos_y[id.index()] = p.y;
    }

    /// Implied velocity of particle `id`: `position − previousPosition`.
    #[inline]
    pub fn implied_velocity(&self, id: ParticleId) -> Vec2 {
        let i = id.index();
        Vec2::new(
            self.pos_x[i] - self.prev_x[i],
            self.pos_y[i] - self.prev_y[i],
        )
    }

    /// Toggles the pinned flag of particle `id`, returning the new state.
    pub fn toggle_pin(&mut self, id: ParticleId) -> bool {
        let i = id.index();
        self.pinned[i] = !self.pinned[i];
        self.pinned[i]
    }

    /// Adds `f` to the accumulated acceleration of every non-pinned
    /// particle (unit mass, so force and acceleration coincide).
    pub fn apply_force(&mut self, f: Vec2) {
        for i in 0..self.particle_count {
            if !self.pinned[i] {
                self.acc_x[i] += f.x;
                self.acc_y[i] += f.y;
            }
        }
    }

    /// Verlet position update.
    ///
    /// Non-pinned: `v = pos − prev; prev = pos; pos += v + acc·dt²`.
    /// Pinned: `prev = pos` (implied velocity stays zero), acceleration
    /// ignored. Accumulated acceleration is reset for every particle.
    pub fn integrate(&mut self, dt: Scalar) {
        let dt2 = dt * dt;
        for i in 0..self.particle_count {
            if self.pinned[i] {
                self.prev_x[i] = self.pos_x[i];
                self.prev_y[i] = self.pos_y[i];
            } else {
                let vx = self.pos_x[i] - self.prev_x[i];
                let vy = self.pos_y[i] - self.prev_y[i];
                self.prev_x[i] = self.pos_x[i];
                self.prev_y[i] = self.pos_y[i];
                self.pos_x[i] += vx + self.acc_x[i] * dt2;
                self.pos_y[i] += vy + self.acc_y[i] * dt2;
            }
            self.acc_x[i] = 0.0;
            self.acc_y[i] = 0.0;
        }
    }

    /// Scales the implied velocity of every non-pinned particle by `k`,
    /// rewriting the previous position: `prev = pos − k·(pos − prev)`.
    pub fn damp(&mut self, k: Scalar) {
        for i in 0..self.particle_count {
            if self.pinned[i] {
                continue;
            }
            let vx = (self.pos_x[i] - self.prev_x[i]) * k;
            let vy = (self.pos_y[i] - self.prev_y[i]) * k;
            self.prev_x[i] = self.pos_x[i] - vx;
            self.prev_y[i] = self.pos_y[i] - vy;
        }
    }

    /// Clamps particles to the ground plane (if one is set) and reflects
    /// the vertical implied velocity of non-pinned particles, scaled by
    /// `restitution`. The horizontal implied velocity is untouched.
    pub fn resolve_ground(&mut self, restitution: Scalar) {
        let Some(ground_y) = self.ground_y else {
            return;
        };
        for i in 0..self.particle_count {
            if self.pos_y[i] > ground_y {
                self.pos_y[i] = ground_y;
                if !self.pinned[i] {
                    let mut vy = self.pos_y[i] - self.prev_y[i];
                    vy *= -restitution;
                    self.prev_y[i] = self.pos_y[i] - vy;
                }
            }
        }
    }

    /// Clamps every particle into the window rectangle
    /// (`x ∈ [0, width]`, `y ∈ [0, height − 1]`).
    pub fn constrain_to_bounds(&mut self, width: Scalar, height: Scalar) {
        for i in 0..self.particle_count {
            self.pos_x[i] = self.pos_x[i].clamp(0.0, width);
            self.pos_y[i] = self.pos_y[i].clamp(0.0, height - 1.0);
        }
    }
}
