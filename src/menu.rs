use std::io;
use std::io::BufRead;
use std::io::Write;

use thiserror::Error;
use tracing::info;
use tracing::warn;

use crate::pattern::InitialState;
use crate::pattern::PATTERNS;
use crate::rule_set::Preset;
use crate::rule_set::RuleSet;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("\"{input}\" is not a number")]
    InvalidInput { input: String },

    #[error("{choice} is not an option, pick one of 1-{max}")]
    OutOfRange { choice: usize, max: usize },

    #[error("Input closed before a choice was made")]
    Closed,

    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy)]
enum RuleChoice {
    Preset(Preset),
    Custom,
}

const RULE_MENU: &[(&str, RuleChoice)] = &[
    (
        "Standard Rules (Conway B3/S23)",
        RuleChoice::Preset(Preset::Conway),
    ),
    ("Custom Rules", RuleChoice::Custom),
    ("HighLife (B36/S23)", RuleChoice::Preset(Preset::HighLife)),
    (
        "Day & Night (B3678/S34678)",
        RuleChoice::Preset(Preset::DayAndNight),
    ),
    ("Seeds (B2/S)", RuleChoice::Preset(Preset::Seeds)),
];

/// Sequential prompts asking for the rules and the initial state of a run.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn choose_rules(&mut self) -> Result<RuleSet, MenuError> {
        writeln!(self.output, "=== GAME OF LIFE SIMULATION ===")?;
        let labels: Vec<_> = RULE_MENU.iter().map(|(label, _)| *label).collect();
        let choice = self.choose(&labels)?;

        let rules = match RULE_MENU[choice].1 {
            RuleChoice::Preset(preset) => {
                let rules = RuleSet::from_preset(preset);
                writeln!(self.output, ">> Rules set to {} ({rules})", preset.name())?;
                rules
            }
            RuleChoice::Custom => {
                writeln!(self.output)?;
                writeln!(self.output, "--- Custom Rules Setup ---")?;

                let born =
                    self.prompt("Enter neighbors count for BIRTH (e.g. for B36 enter '36'): ")?;
                let survive =
                    self.prompt("Enter neighbors count for SURVIVAL (e.g. for S23 enter '23'): ")?;

                let rules = RuleSet::from_spec(&born, &survive);
                writeln!(self.output, ">> Rules set to Custom ({rules})")?;
                rules
            }
        };

        info!(%rules, "Rules chosen");

        Ok(rules)
    }

    pub fn choose_initial_state(&mut self) -> Result<InitialState, MenuError> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Initial State ---")?;

        let labels: Vec<String> = std::iter::once("Random Chaos".to_string())
            .chain(PATTERNS.iter().map(|p| format!("{} (Test Pattern)", p.name)))
            .collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();

        let state = match self.choose(&labels)? {
            0 => InitialState::Random,
            n => InitialState::Pattern(PATTERNS[n - 1]),
        };

        info!(?state, "Initial state chosen");

        Ok(state)
    }

    /// Prints `labels` as a numbered list and returns the index of the one picked. Asks again
    /// until the answer is one of the listed numbers.
    fn choose(&mut self, labels: &[&str]) -> Result<usize, MenuError> {
        for (i, label) in labels.iter().enumerate() {
            writeln!(self.output, "{}. {label}", i + 1)?;
        }

        let prompt = format!("Select option (1-{}): ", labels.len());

        loop {
            let line = self.prompt(&prompt)?;

            match parse_choice(&line, labels.len()) {
                Ok(choice) => return Ok(choice - 1),
                Err(e) => {
                    warn!("Rejected menu input: {e}");
                    writeln!(self.output, "{e}. Try again.")?;
                }
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, MenuError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Closed);
        }

        Ok(line)
    }
}

/// Parse a 1-based menu choice out of `line`
pub fn parse_choice(line: &str, max: usize) -> Result<usize, MenuError> {
    let input = line.trim();

    let choice: usize = input.parse().map_err(|_| MenuError::InvalidInput {
        input: input.to_string(),
    })?;

    if !(1..=max).contains(&choice) {
        return Err(MenuError::OutOfRange { choice, max });
    }

    Ok(choice)
}
