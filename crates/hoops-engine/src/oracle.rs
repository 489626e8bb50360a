use hoops_core::ShootingCapability;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Decides whether a single shot goes in.
pub trait ShotSource {
    fn attempt(&mut self, capability: ShootingCapability) -> bool;
}

/// Random oracle: draws uniformly from 0..100 and makes the shot when the
/// draw is below the capability.
pub struct ShotOracle<R = StdRng> {
    rng: R,
}

impl ShotOracle<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShotOracle<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ShotSource for ShotOracle<R> {
    fn attempt(&mut self, capability: ShootingCapability) -> bool {
        let draw: u8 = self.rng.gen_range(0..100);
        draw < capability.percent()
    }
}

/// Replays a fixed make/miss sequence, ignoring capability. Once the
/// script runs out every further shot misses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedShots {
    outcomes: VecDeque<bool>,
    taken: usize,
}

impl ScriptedShots {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            taken: 0,
        }
    }

    pub fn all_made(count: usize) -> Self {
        Self::new(std::iter::repeat(true).take(count))
    }

    /// Number of shots drawn so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl ShotSource for ScriptedShots {
    fn attempt(&mut self, _capability: ShootingCapability) -> bool {
        self.taken += 1;
        self.outcomes.pop_front().unwrap_or(false)
    }
}
