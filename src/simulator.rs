use rand::Rng;
use tracing::info;
use tracing::trace;

use crate::Generation;
use crate::config::Config;
use crate::grid::Grid;
use crate::pattern::InitialState;
use crate::rule_set::RuleSet;

/// Owns the rules and both grid buffers of a run.
///
/// Every generation is computed from a frozen copy of the previous one: `step` writes to `next`
/// while only reading `current`, then swaps the two buffers.
pub struct Simulator {
    rules: RuleSet,

    current: Grid,

    /// Back buffer. Its contents are stale outside of [`Simulator::step`].
    next: Grid,

    generation: Generation,
}

impl Simulator {
    pub fn new(rules: RuleSet, grid: Grid) -> Self {
        let next = Grid::new(grid.rows(), grid.cols());

        Self {
            rules,
            current: grid,
            next,
            generation: 0,
        }
    }

    /// Start a run from a grid of the configured size, filled according to `state`
    pub fn with_initial_state<R>(
        rules: RuleSet,
        state: InitialState,
        config: &Config,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut grid = Grid::new(config.rows, config.cols);

        match state {
            InitialState::Random => grid.fill_random(config.alive_probability, rng),
            InitialState::Pattern(pattern) => grid.load_pattern(pattern.cells()),
        }

        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            population = grid.population(),
            "Grid initialized"
        );

        Self::new(rules, grid)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Advance the world by one generation
    pub fn step(&mut self) {
        for r in 0..self.current.rows() {
            for c in 0..self.current.cols() {
                let count = self.current.count_alive_neighbors(r, c);
                let alive = self.current.get(r, c);

                self.next.set(r, c, self.rules.next(alive, count));
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.current.population(),
            "step"
        );
    }

    /// Advance the world by `n` generations
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}
