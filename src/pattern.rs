/// A named set of live cells, as `(row, column)` offsets from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Moves one cell down and one cell right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
};

/// Period 2 oscillator.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(2, 1), (2, 2), (2, 3)],
};

/// Period 2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(2, 2), (2, 3), (2, 4), (3, 1), (3, 2), (3, 3)],
};

/// Period 2 oscillator.
pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(1, 1), (1, 2), (2, 1), (2, 2), (3, 3), (3, 4), (4, 3), (4, 4)],
};

/// Methuselah that keeps changing for over a thousand generations.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(10, 39), (10, 40), (11, 38), (11, 39), (12, 39)],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, TOAD, BEACON, R_PENTOMINO];

/// What the grid starts out as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialState {
    /// Every cell alive with the configured probability
    Random,

    Pattern(Pattern),
}

impl Pattern {
    /// The cells of the pattern moved by `(dr, dc)`
    pub fn offset(&self, dr: usize, dc: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().map(move |&(r, c)| (r + dr, c + dc))
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.offset(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_every_cell() {
        let moved: Vec<_> = GLIDER.offset(1, 1).collect();

        assert_eq!(moved, [(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
