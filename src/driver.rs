use std::io;
use std::io::Write;
use std::thread;
use std::time::Duration;
use std::time::Instant;

use crossterm::cursor;
use crossterm::event;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;

use crate::Generation;
use crate::config::Config;
use crate::events::Event;
use crate::events::StopReason;
use crate::io::convert_event;
use crate::render::Renderer;
use crate::simulator::Simulator;

/// The pause between two frames.
pub trait Pacer {
    /// Block for `delay`. Returning an event ends the pause early.
    fn pause(&mut self, delay: Duration) -> io::Result<Option<Event>>;
}

/// Plain blocking sleep. The loop can only be stopped from outside the process, or by the
/// generation bound.
pub struct Sleep;

impl Pacer for Sleep {
    fn pause(&mut self, delay: Duration) -> io::Result<Option<Event>> {
        thread::sleep(delay);
        Ok(None)
    }
}

/// Waits on terminal input for the length of the pause, so that an exit key ends the run.
/// Needs the terminal in raw mode, see [`RawMode`].
pub struct KeyPoll;

impl Pacer for KeyPoll {
    fn pause(&mut self, delay: Duration) -> io::Result<Option<Event>> {
        let start = Instant::now();

        loop {
            let time_left = delay.saturating_sub(start.elapsed());

            if !event::poll(time_left)? {
                return Ok(None);
            }

            if let Some(event) = convert_event(event::read()?) {
                return Ok(Some(event));
            }
        }
    }
}

/// Keeps the terminal in raw mode while alive.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations computed during the run
    pub generations: Generation,

    pub reason: StopReason,
}

/// Render, step, pause, and repeat, until the pacer reports an exit or the generation bound of
/// `config` is reached. The last frame drawn is the one of the final generation.
pub fn run<W, P>(
    sim: &mut Simulator,
    out: &mut W,
    pacer: &mut P,
    config: &Config,
) -> io::Result<RunSummary>
where
    W: Write,
    P: Pacer,
{
    let mut renderer = Renderer::new();
    let start = sim.generation();

    let reason = loop {
        let frame = renderer.render(sim.grid(), sim.generation());
        draw_frame(out, frame)?;

        if let Some(max) = config.max_generations {
            if sim.generation() >= max {
                break StopReason::MaxGenerations;
            }
        }

        sim.step();

        match pacer.pause(config.frame_delay)? {
            Some(Event::Exit) => break StopReason::Exit,
            None => {}
        }
    };

    let summary = RunSummary {
        generations: sim.generation() - start,
        reason,
    };

    info!(
        generations = summary.generations,
        reason = ?summary.reason,
        "Simulation stopped"
    );

    Ok(summary)
}

/// Clears the screen, then prints `frame` from the top left corner. Lines end with `\r\n`, so
/// the frame prints the same with raw mode on or off.
fn draw_frame<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::FromCursorDown),
    )?;

    for line in frame.lines() {
        queue!(out, style::Print(line), style::Print("\r\n"))?;
    }

    out.flush()
}
