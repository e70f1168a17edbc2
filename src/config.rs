use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Generation;

/// Grid height
pub const ROWS: usize = 24;

/// Grid width
pub const COLS: usize = 80;

/// Pause between two frames
pub const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Chance of any cell starting alive on a random grid. (1 in 5)
pub const ALIVE_PROBABILITY: f64 = 0.2;

/// Settings of a run. Fixed once the simulation starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub frame_delay: Duration,
    pub alive_probability: f64,

    /// Stop after this many generations. Runs until interrupted when `None`.
    pub max_generations: Option<Generation>,

    /// Seed of the random source. Taken from OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            frame_delay: FRAME_DELAY,
            alive_probability: ALIVE_PROBABILITY,
            max_generations: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    pub fn with_max_generations(mut self, max_generations: Generation) -> Self {
        self.max_generations = Some(max_generations);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The random source of the run. Seeded once, here.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
