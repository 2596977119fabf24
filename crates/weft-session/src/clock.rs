//! Fixed-step accumulator clock.
//!
//! Decouples the simulation's numerical behavior from variable frame
//! rate: identical total elapsed time always produces the same number
//! of physics ticks regardless of how it was chunked across frames,
//! at the cost of up to one step's worth of unconsumed time per frame
//! (no sub-step interpolation).

use weft_types::Scalar;

/// Accumulator of unsimulated wall-clock time.
#[derive(Debug, Clone)]
pub struct StepClock {
    step: Scalar,
    accumulator: Scalar,
}

impl StepClock {
    /// Creates a clock with the given fixed step duration (seconds).
    pub fn new(step: Scalar) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// The fixed step duration.
    #[inline]
    pub fn step(&self) -> Scalar {
        self.step
    }

    /// Unconsumed time currently in the accumulator.
    #[inline]
    pub fn pending(&self) -> Scalar {
        self.accumulator
    }

    /// Adds `elapsed` seconds and consumes whole steps, returning how
    /// many fixed ticks the caller should run.
    pub fn advance(&mut self, elapsed: Scalar) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }
}
