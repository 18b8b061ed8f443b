//! Event-driven board model shared by the terminal demo.
//!
//! A [`Board`] folds [`SearchEvent`]s into per-tile markers and renders the
//! grid as ASCII frames, so the pacing of an animation is entirely up to the
//! caller.

use std::fmt::Write;

use tilesearch_core::{Grid, Position};
use tilesearch_paths::SearchEvent;

const WALL: char = '#';
const START: char = 'S';
const GOAL: char = 'G';
const FRONTIER: char = '+';
const VISITED: char = 'x';
const ROUTE: char = '*';

/// How a tile is currently drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Untouched,
    Frontier,
    Visited,
    Route,
}

/// Display state of one search over one grid.
pub struct Board<'g> {
    grid: &'g Grid,
    start: Position,
    goal: Option<Position>,
    markers: Vec<Marker>,
    visited: usize,
    message: Option<String>,
}

impl<'g> Board<'g> {
    pub fn new(grid: &'g Grid, start: Position, goal: Option<Position>) -> Self {
        Self {
            grid,
            start,
            goal,
            markers: vec![Marker::Untouched; grid.len()],
            visited: 0,
            message: None,
        }
    }

    pub fn marker(&self, p: Position) -> Option<Marker> {
        self.grid.index_of(p).map(|i| self.markers[i])
    }

    /// Number of expansions seen so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Final status line, once the search has ended.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn apply(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::Visited(p) => {
                self.visited += 1;
                self.mark(*p, Marker::Visited);
            }
            SearchEvent::FrontierEntered(p) => self.mark(*p, Marker::Frontier),
            SearchEvent::CostUpdated { .. } => {}
            SearchEvent::Succeeded(path) => {
                for &p in path.interior() {
                    self.mark(p, Marker::Route);
                }
                self.message = Some(format!(
                    "found a route of {} moves costing {} after {} expansions",
                    path.edges(),
                    path.cost(),
                    self.visited
                ));
            }
            SearchEvent::Failed(e) => {
                self.message = Some(format!("{e} after {} expansions", self.visited));
            }
            SearchEvent::TraversalCompleted { visited } => {
                self.message = Some(format!("traversal reached {visited} tiles"));
            }
        }
    }

    fn mark(&mut self, p: Position, marker: Marker) {
        if let Some(i) = self.grid.index_of(p) {
            self.markers[i] = marker;
        }
    }

    /// Draw the current frame, one text line per grid row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.grid.len() + self.grid.rows());
        for (i, tile) in self.grid.iter().enumerate() {
            if i > 0 && i % self.grid.cols() == 0 {
                out.push('\n');
            }
            let p = tile.pos();
            let ch = if p == self.start {
                START
            } else if Some(p) == self.goal {
                GOAL
            } else if !tile.is_passable() {
                WALL
            } else {
                match self.markers[i] {
                    Marker::Route => ROUTE,
                    Marker::Visited => VISITED,
                    Marker::Frontier => FRONTIER,
                    Marker::Untouched => tile.layout_char(),
                }
            };
            out.push(ch);
        }
        if let Some(msg) = &self.message {
            let _ = write!(out, "\n{msg}");
        }
        out
    }
}
