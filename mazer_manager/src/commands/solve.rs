use super::MazeArgs;
use crate::render::{legend, Renderer};
use crate::session::{MazeSession, SolveOutcome};
use anyhow::Result;
use colored::*;
use mazer_library::algorithms::astar::path_cost;
use std::io::Write;

/// Pick endpoints, run the search to the end and print the verdict
pub fn solve_maze<W: Write>(args: &MazeArgs, out: &mut W) -> Result<SolveOutcome> {
    let mut session = MazeSession::new(args.resolve()?)?;
    let outcome = session.solve()?;

    let renderer = Renderer::new(session.grid()).with_search(session.search());
    match &outcome {
        SolveOutcome::Found { path, steps } => {
            write!(out, "{}", renderer.with_path(path).painted())?;
            writeln!(out, "{}", legend())?;
            writeln!(
                out,
                "{} {} cells, cost {:.2}, {} steps",
                "Path found:".green().bold(),
                path.len(),
                path_cost(path),
                steps
            )?;
        }
        SolveOutcome::NoPath { steps } => {
            write!(out, "{}", renderer.painted())?;
            writeln!(out, "{}", legend())?;
            writeln!(
                out,
                "{} open set exhausted after {} steps",
                "No path:".yellow().bold(),
                steps
            )?;
        }
    }

    let search = session.search();
    if let (Some(start), Some(goal)) = (search.start_location(), search.goal()) {
        let (sx, sz) = session.world_position(start);
        let (gx, gz) = session.world_position(goal);
        writeln!(
            out,
            "  start {} at ({:.1}, {:.1}), goal {} at ({:.1}, {:.1})",
            start, sx, sz, goal, gx, gz
        )?;
    }
    Ok(outcome)
}
