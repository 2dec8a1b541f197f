//! Terminal rendering of a maze and the search state on top of it

use colored::*;
use mazer_core::Location;
use mazer_library::{AStarSearch, Cell, Grid};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Floor,
    Open,
    Closed,
    Path,
    Start,
    Goal,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Floor => '.',
            Glyph::Open => 'o',
            Glyph::Closed => 'x',
            Glyph::Path => '*',
            Glyph::Start => 'S',
            Glyph::Goal => 'G',
        }
    }

    fn painted(self) -> ColoredString {
        let symbol = self.symbol().to_string();
        match self {
            Glyph::Wall => symbol.dimmed(),
            Glyph::Floor => symbol.normal(),
            Glyph::Open => symbol.cyan(),
            Glyph::Closed => symbol.blue(),
            Glyph::Path => symbol.yellow().bold(),
            Glyph::Start => symbol.green().bold(),
            Glyph::Goal => symbol.red().bold(),
        }
    }
}

/// Layers the search over the grid. Endpoints win over the path, the path
/// over the closed set, the closed set over the open set.
pub struct Renderer<'a> {
    grid: &'a Grid,
    search: Option<&'a AStarSearch>,
    path: HashSet<Location>,
}

impl<'a> Renderer<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            search: None,
            path: HashSet::new(),
        }
    }

    pub fn with_search(mut self, search: &'a AStarSearch) -> Self {
        self.search = Some(search);
        self
    }

    pub fn with_path(mut self, path: &[Location]) -> Self {
        self.path = path.iter().copied().collect();
        self
    }

    pub fn glyph_at(&self, location: Location) -> Glyph {
        if let Some(search) = self.search {
            if search.start_location() == Some(location) {
                return Glyph::Start;
            }
            if search.goal() == Some(location) {
                return Glyph::Goal;
            }
        }
        if self.path.contains(&location) {
            return Glyph::Path;
        }
        if let Some(search) = self.search {
            if search.is_closed(location) {
                return Glyph::Closed;
            }
            if search.is_open(location) {
                return Glyph::Open;
            }
        }
        match self.grid.get(location) {
            Some(Cell::Open) if self.grid.is_interior(location) => Glyph::Floor,
            _ => Glyph::Wall,
        }
    }

    fn rows(&self) -> impl Iterator<Item = Vec<Glyph>> + '_ {
        (0..self.grid.depth()).map(move |z| {
            (0..self.grid.width())
                .map(|x| self.glyph_at(Location::new(x as i32, z as i32)))
                .collect()
        })
    }

    /// Uncoloured rows, one string per z
    pub fn plain(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.into_iter().map(Glyph::symbol).collect())
            .collect()
    }

    /// Coloured block ready for the terminal
    pub fn painted(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            for glyph in row {
                out.push_str(&glyph.painted().to_string());
            }
            out.push('\n');
        }
        out
    }
}

pub fn legend() -> String {
    [
        Glyph::Start,
        Glyph::Goal,
        Glyph::Path,
        Glyph::Closed,
        Glyph::Open,
        Glyph::Wall,
    ]
    .iter()
    .map(|glyph| {
        let name = match glyph {
            Glyph::Start => "start",
            Glyph::Goal => "goal",
            Glyph::Path => "path",
            Glyph::Closed => "closed",
            Glyph::Open => "open",
            _ => "wall",
        };
        format!("{} {}", glyph.painted(), name)
    })
    .collect::<Vec<_>>()
    .join("  ")
}
