use super::MazeArgs;
use crate::render::Renderer;
use crate::session::MazeSession;
use anyhow::Result;
use colored::*;
use std::io::Write;

/// Carve a maze and print it
pub fn generate_maze<W: Write>(args: &MazeArgs, out: &mut W) -> Result<()> {
    let session = MazeSession::new(args.resolve()?)?;
    let grid = session.grid();

    write!(out, "{}", Renderer::new(grid).painted())?;
    writeln!(
        out,
        "{} {}x{}, {} open cells",
        "Maze".green().bold(),
        grid.width(),
        grid.depth(),
        grid.open_cells().len()
    )?;
    Ok(())
}
