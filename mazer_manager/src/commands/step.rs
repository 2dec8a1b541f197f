use super::MazeArgs;
use crate::render::{legend, Renderer};
use crate::session::{MazeSession, Trigger, TriggerOutcome};
use anyhow::Result;
use colored::*;
use mazer_core::MazeError;
use mazer_library::algorithms::astar::path_cost;
use std::io::{self, BufRead, Write};

const HELP: &str = "keys: p = begin search, c = step, m = show path, g = new maze, q = quit";

/// Interactive stepping on stdin/stdout
pub fn step_maze(args: &MazeArgs) -> Result<()> {
    let mut session = MazeSession::new(args.resolve()?)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_interactive(&mut session, stdin.lock(), &mut stdout)
}

/// Read keys line by line; every character on a line is one trigger
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut MazeSession,
    input: R,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", Renderer::new(session.grid()).painted())?;
    writeln!(out, "{}", HELP.dimmed())?;
    out.flush()?;

    for line in input.lines() {
        for key in line?.chars().filter(|c| !c.is_whitespace()) {
            let Some(trigger) = Trigger::from_key(key) else {
                writeln!(out, "{} '{}'. {}", "Unknown key".yellow(), key, HELP)?;
                continue;
            };

            match session.handle(trigger) {
                Ok(TriggerOutcome::Quit) => return Ok(()),
                Ok(outcome) => report(session, &outcome, out)?,
                Err(e) if e.is_no_path() => {
                    writeln!(out, "{} {}", "No path:".yellow().bold(), e)?;
                    draw(session, None, out)?;
                }
                Err(e @ MazeError::NotEnoughOpenCells { .. }) => {
                    writeln!(out, "{} {} (press g for a new maze)", "Warning:".yellow(), e)?;
                }
                Err(e) if e.is_usage_error() => {
                    writeln!(out, "{} {}", "Warning:".yellow(), e)?;
                }
                Err(e) => return Err(e.into()),
            }
            out.flush()?;
        }
    }
    Ok(())
}

fn report<W: Write>(session: &MazeSession, outcome: &TriggerOutcome, out: &mut W) -> Result<()> {
    match outcome {
        TriggerOutcome::Began { start, goal } => {
            writeln!(out, "{} {} -> {}", "Searching".cyan().bold(), start, goal)?;
            draw(session, None, out)?;
        }
        TriggerOutcome::Stepped(expansion) => {
            let steps = session.search().steps();
            if expansion.reached_goal {
                writeln!(
                    out,
                    "{} after {} steps",
                    "Goal reached".green().bold(),
                    steps
                )?;
            } else if let Some(closed) = &expansion.closed {
                writeln!(
                    out,
                    "step {}: closed {} g={:.2} h={:.2} f={:.2} (+{} open, {} updated)",
                    steps,
                    closed.location,
                    closed.g,
                    closed.h,
                    closed.f,
                    expansion.inserted.len(),
                    expansion.updated.len()
                )?;
            }
            draw(session, None, out)?;
        }
        TriggerOutcome::Path(path) => {
            writeln!(
                out,
                "{} {} cells, cost {:.2}",
                "Path".green().bold(),
                path.len(),
                path_cost(path)
            )?;
            draw(session, Some(path), out)?;
        }
        TriggerOutcome::Regenerated => {
            writeln!(out, "{}", "New maze".cyan().bold())?;
            draw(session, None, out)?;
        }
        TriggerOutcome::Quit => {}
    }
    Ok(())
}

fn draw<W: Write>(
    session: &MazeSession,
    path: Option<&[mazer_core::Location]>,
    out: &mut W,
) -> Result<()> {
    let mut renderer = Renderer::new(session.grid()).with_search(session.search());
    if let Some(path) = path {
        renderer = renderer.with_path(path);
    }
    write!(out, "{}", renderer.painted())?;
    writeln!(out, "{}", legend())?;
    Ok(())
}
