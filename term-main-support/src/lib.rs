#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use world_grid::{GridCell, World};

pub const DEFAULT_TIME_STEP_MILLIS: u64 = 1000;
pub const DEFAULT_GENERATIONS: u64 = 100;

/// Pacing for [`animate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimateSettings {
    pub generations: u64,
    pub time_step: Duration,
}

impl Default for AnimateSettings {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            time_step: Duration::from_millis(DEFAULT_TIME_STEP_MILLIS),
        }
    }
}

/// Runs `settings.generations` time steps, drawing the world after each one.
/// Blocks the calling thread for `settings.time_step` before every step.
pub fn animate<W, O>(world: &mut W, settings: &AnimateSettings, out: &mut O) -> io::Result<()>
where
    W: World,
    O: Write,
{
    log::info!(
        "animating {}x{} world for {} generations, {:?} apart",
        world.width(),
        world.height(),
        settings.generations,
        settings.time_step
    );
    for generation in 0..settings.generations {
        if !settings.time_step.is_zero() {
            thread::sleep(settings.time_step);
        }
        world.update();
        draw(world, out)?;
        log::debug!("drew generation {}", generation + 1);
    }
    Ok(())
}

/// Clears the screen, homes the cursor, and writes one frame of the world.
pub fn draw<W, O>(world: &W, out: &mut O) -> io::Result<()>
where
    W: World,
    O: Write,
{
    queue!(out, MoveTo(0, 0), Clear(ClearType::All), Print(frame(world)))?;
    out.flush()
}

/// One character per cell, row by row, each row ending in a newline.
pub fn frame<W: World>(world: &W) -> String {
    let width = world.width() as usize;
    let mut result = String::with_capacity(world.num_cells() + world.height() as usize);
    for (index, cell) in world.cells_iter().enumerate() {
        result.push(cell.glyph());
        if (index + 1) % width == 0 {
            result.push('\n');
        }
    }
    result
}
