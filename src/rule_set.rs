use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// Largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBORS: u8 = 8;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Neighbor count {count} is outside of 0..=8")]
    NeighborCount { count: u8 },

    #[error("Unknown rule preset \"{name}\"")]
    UnknownPreset { name: String },
}

/// Named rule families.
///
/// See: https://conwaylife.com/wiki/List_of_Life-like_rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// B3/S23
    Conway,
    /// B36/S23
    HighLife,
    /// B3678/S34678
    DayAndNight,
    /// B2/S
    Seeds,
    /// B3/S012345678
    LifeWithoutDeath,
}

impl Preset {
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Conway => "Standard Conway",
            Preset::HighLife => "HighLife",
            Preset::DayAndNight => "Day & Night",
            Preset::Seeds => "Seeds",
            Preset::LifeWithoutDeath => "Life without Death",
        }
    }

    /// Birth and survival bitmasks, in the format taken by [`RuleSet::new`].
    const fn masks(&self) -> (u16, u16) {
        match self {
            Preset::Conway => (0b1000, 0b1100),
            Preset::HighLife => (0b100_1000, 0b1100),
            Preset::DayAndNight => (0b1_1100_1000, 0b1_1101_1000),
            Preset::Seeds => (0b100, 0),
            Preset::LifeWithoutDeath => (0b1000, 0b1_1111_1111),
        }
    }
}

impl FromStr for Preset {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match name.as_str() {
            "conway" | "life" | "standard" | "b3s23" => Ok(Preset::Conway),
            "highlife" | "b36s23" => Ok(Preset::HighLife),
            "dayandnight" | "daynight" | "b3678s34678" => Ok(Preset::DayAndNight),
            "seeds" | "b2s" => Ok(Preset::Seeds),
            "lifewithoutdeath" | "b3s012345678" => Ok(Preset::LifeWithoutDeath),
            _ => Err(RuleError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}

/// Birth and survival tables, indexed by the number of live neighbors.
///
/// A dead cell with `n` live neighbors is born when `born[n]` holds, and a live cell with `n`
/// live neighbors survives when `survive[n]` holds. Index `0` is allowed but rarely used.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    born: [bool; 9],
    survive: [bool; 9],
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let mut born = [false; 9];
        let mut survive = [false; 9];

        let mut i = 0;
        while i < born.len() {
            born[i] = b & (1 << i) != 0;
            survive[i] = s & (1 << i) != 0;
            i += 1;
        }

        Self { born, survive }
    }

    /// A rule set where nothing is ever born and nothing survives.
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    pub fn from_preset(preset: Preset) -> Self {
        let mut rules = Self::empty();
        rules.set_preset(preset);
        rules
    }

    pub fn from_spec(born: &str, survive: &str) -> Self {
        let mut rules = Self::empty();
        rules.set_from_spec(born, survive);
        rules
    }

    pub fn reset(&mut self) {
        self.born = [false; 9];
        self.survive = [false; 9];
    }

    /// Replace both tables with the ones of `preset`.
    pub fn set_preset(&mut self, preset: Preset) {
        let (b, s) = preset.masks();
        *self = Self::new(b, s);
    }

    /// Reset both tables, then turn on every neighbor count listed as a digit in `born` and
    /// `survive`. Anything that isn't a digit in `0..=8` is skipped, so free-form input with
    /// trailing whitespace or newlines parses as expected.
    pub fn set_from_spec(&mut self, born: &str, survive: &str) {
        self.reset();

        Self::fill_table(&mut self.born, born);
        Self::fill_table(&mut self.survive, survive);
    }

    fn fill_table(table: &mut [bool; 9], digits: &str) {
        for c in digits.chars() {
            match c.to_digit(10) {
                Some(n) if n <= MAX_NEIGHBORS as u32 => table[n as usize] = true,
                _ if c.is_whitespace() => {}
                _ => debug!("Ignoring rule character {c:?}"),
            }
        }
    }

    pub fn is_born(&self, count: u8) -> Result<bool, RuleError> {
        Self::lookup(&self.born, count)
    }

    pub fn is_survive(&self, count: u8) -> Result<bool, RuleError> {
        Self::lookup(&self.survive, count)
    }

    fn lookup(table: &[bool; 9], count: u8) -> Result<bool, RuleError> {
        table
            .get(count as usize)
            .copied()
            .ok_or(RuleError::NeighborCount { count })
    }

    /// State of a cell in the next generation.
    ///
    /// `count` comes from [`crate::grid::Grid::count_alive_neighbors`], which never exceeds
    /// [`MAX_NEIGHBORS`].
    pub(crate) fn next(&self, alive: bool, count: u8) -> bool {
        debug_assert!(count <= MAX_NEIGHBORS);

        if alive {
            self.survive[count as usize]
        } else {
            self.born[count as usize]
        }
    }

    pub fn births(&self) -> impl Iterator<Item = u8> + '_ {
        Self::counts(&self.born)
    }

    pub fn survivals(&self) -> impl Iterator<Item = u8> + '_ {
        Self::counts(&self.survive)
    }

    fn counts(table: &[bool; 9]) -> impl Iterator<Item = u8> + '_ {
        (0..=MAX_NEIGHBORS).filter(|&n| table[n as usize])
    }
}

impl fmt::Display for RuleSet {
    /// Formats as a rulestring, e.g. `B3/S23`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.births() {
            write!(f, "{n}")?;
        }

        write!(f, "/S")?;
        for n in self.survivals() {
            write!(f, "{n}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_preset() {
        let rules = RuleSet::from_preset(Preset::Conway);

        assert_eq!(rules.births().collect::<Vec<_>>(), [3]);
        assert_eq!(rules.survivals().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(rules, B3S23);
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn set_preset_resets_tables() {
        let mut rules = RuleSet::from_spec("012345678", "012345678");
        rules.set_preset(Preset::Seeds);

        assert_eq!(rules.births().collect::<Vec<_>>(), [2]);
        assert_eq!(rules.survivals().count(), 0);
    }

    #[test]
    fn custom_digits() {
        let rules = RuleSet::from_spec("36", "23");

        assert_eq!(rules.births().collect::<Vec<_>>(), [3, 6]);
        assert_eq!(rules.survivals().collect::<Vec<_>>(), [2, 3]);
        assert_eq!(rules, RuleSet::from_preset(Preset::HighLife));
    }

    #[test]
    fn custom_digits_skip_junk() {
        let rules = RuleSet::from_spec("3x6", "");

        assert_eq!(rules.births().collect::<Vec<_>>(), [3, 6]);
        assert_eq!(rules.survivals().count(), 0);

        // 9 is a digit, but not a valid neighbor count
        let rules = RuleSet::from_spec("39\n", " 2 3\r\n");
        assert_eq!(rules.births().collect::<Vec<_>>(), [3]);
        assert_eq!(rules.survivals().collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn set_from_spec_resets_tables() {
        let mut rules = B3S23;
        rules.set_from_spec("1", "");

        assert_eq!(rules.to_string(), "B1/S");
    }

    #[test]
    fn lookup_bounds() {
        let rules = B3S23;

        assert_eq!(rules.is_born(3), Ok(true));
        assert_eq!(rules.is_born(2), Ok(false));
        assert_eq!(rules.is_survive(2), Ok(true));
        assert_eq!(rules.is_survive(0), Ok(false));
        assert_eq!(rules.is_survive(8), Ok(false));

        assert_eq!(rules.is_born(9), Err(RuleError::NeighborCount { count: 9 }));
        assert_eq!(
            rules.is_survive(u8::MAX),
            Err(RuleError::NeighborCount { count: u8::MAX })
        );
    }

    #[test]
    fn high_bits_ignored() {
        assert_eq!(RuleSet::new(0b1110_0000_0000_1000, 0b1100), B3S23);
    }

    #[test]
    fn display_rulestring() {
        assert_eq!(B3S23.to_string(), "B3/S23");
        assert_eq!(
            RuleSet::from_preset(Preset::DayAndNight).to_string(),
            "B3678/S34678"
        );
        assert_eq!(
            RuleSet::from_preset(Preset::LifeWithoutDeath).to_string(),
            "B3/S012345678"
        );
        assert_eq!(RuleSet::empty().to_string(), "B/S");
    }

    #[test]
    fn preset_names() {
        assert_eq!("Conway".parse::<Preset>(), Ok(Preset::Conway));
        assert_eq!("day-and-night".parse::<Preset>(), Ok(Preset::DayAndNight));
        assert_eq!(" HighLife\n".parse::<Preset>(), Ok(Preset::HighLife));
        assert_eq!("B2/S".parse::<Preset>(), Ok(Preset::Seeds));
        assert_eq!(
            "brian".parse::<Preset>(),
            Err(RuleError::UnknownPreset {
                name: "brian".into()
            })
        );
    }
}
