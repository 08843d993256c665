//! Live rendering of the solver between propagation steps.
//!
//! The solve loop is the same as [`Seeker::solve`], with the board redrawn
//! in an alternate terminal screen at a fixed frame rate. The step
//! boundary is the only point where the grid is in a consistent state, so
//! that is where the frames are taken.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use mineseeker_core::{HintOracle, Seeker};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Runs the solve loop, re-rendering the board between steps. Returns the
/// same result as [`Seeker::solve`].
pub fn solve_watched(seeker: &mut Seeker<'_>, hints: &mut dyn HintOracle) -> Result<bool> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let result = run_loop(&mut stdout, seeker, hints);
    execute!(stdout, Show, LeaveAlternateScreen)?;
    result
}

fn run_loop(
    stdout: &mut io::Stdout,
    seeker: &mut Seeker<'_>,
    hints: &mut dyn HintOracle,
) -> Result<bool> {
    let Some(seed) = seeker.request_safe_hint(hints) else {
        return Ok(false);
    };
    seeker.uncover_field(seed.x, seed.y);
    draw(stdout, seeker)?;

    let mut last_frame = Instant::now();
    while !seeker.is_solved() {
        if !seeker.solve_step(hints) {
            break;
        }
        if last_frame.elapsed() >= FRAME_INTERVAL {
            draw(stdout, seeker)?;
            last_frame = Instant::now();
        }
    }
    draw(stdout, seeker)?;

    Ok(seeker.is_solved() && !seeker.is_dead())
}

fn draw(stdout: &mut io::Stdout, seeker: &Seeker<'_>) -> Result<()> {
    execute!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;
    write!(stdout, "{seeker}")?;
    writeln!(stdout, "safe-field requests: {}", seeker.safe_field_requests())?;
    stdout.flush()?;
    Ok(())
}
