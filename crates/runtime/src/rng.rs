//! Injectable randomness for stochastic tie-breaking.
//!
//! Every random draw the engine makes goes through [`DecisionRng`]. Callers
//! own the generator and pass it in per tick; the provider forks a child
//! stream for the evaluation so the tree itself can own its generator.
//!
//! # Determinism
//!
//! [`SeededRng`] seeds a `SmallRng` from the run seed mixed with the agent
//! id, so two agents never share a stream and a run replays exactly from the
//! same seed. [`FixedRng`] and [`ScriptedRng`] pin draws for tests.

use agent_core::AgentId;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Source of uniform draws in `[0, 1)`.
pub trait DecisionRng {
    /// Next uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Derives an independent child stream. Deterministic for a given parent
    /// state.
    fn fork(&mut self) -> Box<dyn DecisionRng>;

    /// `true` with probability `probability`. Non-positive (or NaN)
    /// probabilities never succeed and consume no draw.
    fn chance(&mut self, probability: f32) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        self.unit() < probability.min(1.0)
    }

    /// Uniform index into a collection of `len` elements.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.unit() * len as f32) as usize;
        Some(index.min(len - 1))
    }
}

/// `SmallRng`-backed generator for live play.
#[derive(Debug, Clone)]
pub struct SeededRng(SmallRng);

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng(SmallRng::seed_from_u64(seed))
    }

    /// Seeds deterministically from the run seed and an agent id.
    pub fn for_agent(global_seed: u64, agent: AgentId) -> Self {
        Self::new(global_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT))
    }
}

impl DecisionRng for SeededRng {
    fn unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }

    fn fork(&mut self) -> Box<dyn DecisionRng> {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ MIXING_CONSTANT;
        Box::new(SeededRng::new(child_seed))
    }
}

/// Returns the same draw forever.
///
/// `FixedRng(0.0)` passes every positive chance roll and always picks the
/// first candidate; `FixedRng(0.99)` fails nearly every roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRng(pub f32);

impl DecisionRng for FixedRng {
    fn unit(&mut self) -> f32 {
        if self.0.is_nan() {
            0.0
        } else {
            self.0.clamp(0.0, 0.999_999)
        }
    }

    fn fork(&mut self) -> Box<dyn DecisionRng> {
        Box::new(*self)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedRng {
    draws: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<f32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }
}

impl DecisionRng for ScriptedRng {
    fn unit(&mut self) -> f32 {
        let Some(draw) = self.draws.get(self.cursor % self.draws.len().max(1)).copied() else {
            return 0.0;
        };
        self.cursor += 1;
        draw.clamp(0.0, 0.999_999)
    }

    /// The child replays the script from the parent's current position; the
    /// parent then skips one draw so successive forks start one step apart.
    fn fork(&mut self) -> Box<dyn DecisionRng> {
        let child = self.clone();
        self.cursor += 1;
        Box::new(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_replay() {
        let mut a = SeededRng::for_agent(42, AgentId(7));
        let mut b = SeededRng::for_agent(42, AgentId(7));
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
        assert_eq!(a.fork().unit(), b.fork().unit());
    }

    #[test]
    fn agents_get_distinct_streams() {
        let mut a = SeededRng::for_agent(42, AgentId(1));
        let mut b = SeededRng::for_agent(42, AgentId(2));
        let draws_a: Vec<f32> = (0..8).map(|_| a.unit()).collect();
        let draws_b: Vec<f32> = (0..8).map(|_| b.unit()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn fixed_rng_thresholds() {
        let mut low = FixedRng(0.0);
        assert!(low.chance(0.6));
        assert!(!low.chance(0.0));
        assert_eq!(low.pick(4), Some(0));

        let mut high = FixedRng(1.0);
        assert!(!high.chance(0.6));
        assert_eq!(high.pick(4), Some(3));
        assert_eq!(high.pick(0), None);
    }

    #[test]
    fn scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.9]);
        assert!(rng.chance(0.5));
        assert!(!rng.chance(0.5));
        assert!(rng.chance(0.5));
    }

    #[test]
    fn scripted_forks_advance_the_parent() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.5, 0.9]);
        let firsts: Vec<f32> = (0..3).map(|_| rng.fork().unit()).collect();
        assert_eq!(firsts, vec![0.1, 0.5, 0.9]);
        assert_eq!(rng.unit(), 0.1);
    }

    #[test]
    fn empty_script_draws_zero() {
        let mut rng = ScriptedRng::new(Vec::new());
        assert_eq!(rng.unit(), 0.0);
    }
}
