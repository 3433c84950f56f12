use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform randomness for the game draws.
pub trait RandomSource: Send {
    /// Uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded when a seed is given, otherwise seeded from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl RandomSource for StdRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays fixed values, cycling when exhausted.
#[cfg(test)]
pub struct ScriptedRandom {
    ints: Vec<u32>,
    units: Vec<f64>,
    int_pos: usize,
    unit_pos: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(ints: Vec<u32>, units: Vec<f64>) -> Self {
        Self {
            ints,
            units,
            int_pos: 0,
            unit_pos: 0,
        }
    }

    /// Integer script. Winning numbers are rejection sampled, so a script
    /// that drives a jackpot draw needs at least six distinct values in
    /// 1..=49 or the draw never finishes.
    pub fn ints(ints: Vec<u32>) -> Self {
        Self::new(ints, vec![0.0])
    }

    pub fn units(units: Vec<f64>) -> Self {
        Self::new(vec![1], units)
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        let value = self.ints[self.int_pos % self.ints.len()];
        self.int_pos += 1;
        value.clamp(low, high)
    }

    fn next_unit(&mut self) -> f64 {
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value
    }
}
