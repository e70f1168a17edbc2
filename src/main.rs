use std::io;

use anyhow::Context;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal;
use tracing_subscriber::EnvFilter;

use lifelike::config::Config;
use lifelike::driver;
use lifelike::driver::KeyPoll;
use lifelike::driver::RawMode;
use lifelike::menu::Menu;
use lifelike::simulator::Simulator;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, frames to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let mut stdout = io::stdout();

    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::All)
    )
    .context("Failed to clear the terminal")?;

    let mut menu = Menu::new(io::stdin().lock(), &mut stdout);
    let rules = menu.choose_rules().context("Failed to choose rules")?;
    let state = menu
        .choose_initial_state()
        .context("Failed to choose an initial state")?;
    drop(menu);

    let mut rng = config.rng();
    let mut sim = Simulator::with_initial_state(rules, state, &config, &mut rng);

    let raw_mode = RawMode::enable().context("Failed to enable raw mode")?;
    let summary = driver::run(&mut sim, &mut stdout, &mut KeyPoll, &config)
        .context("Failed to draw to the terminal")?;
    drop(raw_mode);

    println!("Stopped after {} generations", summary.generations);

    Ok(())
}
