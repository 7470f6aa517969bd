//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Because every draw an agent makes (habits, mobility, contagion, tests)
//! comes from its own stream, the order in which the scheduler interleaves
//! processes never perturbs another agent's randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Round a Gaussian draw to a non-negative integer.
///
/// A non-positive or non-finite `scale` degenerates to the rounded mean.
fn discrete_gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, scale: f64) -> u32 {
    let value = match Normal::new(mean, scale) {
        Ok(normal) if scale > 0.0 => normal.sample(rng),
        _ => mean,
    };
    if value.is_finite() {
        value.round().clamp(0.0, u32::MAX as f64) as u32
    } else {
        0
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent at population assembly; stored in a parallel
/// `Vec<AgentRng>` alongside the other SoA arrays.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Gaussian draw rounded to a non-negative integer (durations, habit
    /// parameters).
    #[inline]
    pub fn discrete_gaussian(&mut self, mean: f64, scale: f64) -> u32 {
        discrete_gaussian(&mut self.0, mean, scale)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// RNG for draws that belong to no agent, such as laying out a synthetic
/// town before any `AgentId` exists.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        // Offset so a town built from `seed` does not replay agent 0's stream.
        SimRng(SmallRng::seed_from_u64(seed.wrapping_add(MIXING_CONSTANT)))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
