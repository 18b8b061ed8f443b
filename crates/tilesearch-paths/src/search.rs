use std::collections::VecDeque;

use log::{debug, trace};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tilesearch_core::{Error, Grid, Position, Result, Tile};

use crate::config::Algorithm;
use crate::distance::Heuristic;
use crate::events::{Outcome, SearchEvent, Status};
use crate::frontier::Frontier;
use crate::maps::{CostMap, PredecessorMap};
use crate::path::{Path, reconstruct};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// One run of a frontier-exploration algorithm over a borrowed [`Grid`].
///
/// A search is a steppable process: [`step`](Self::step) removes one tile
/// from the frontier, expands it and returns the events that produced.
/// [`run`](Self::run) steps until the search is over and
/// [`events`](Self::events) exposes the same process as a lazy iterator.
/// Nothing happens between calls, so cancelling is just dropping the value.
///
/// The grid stays borrowed for the lifetime of the search, which keeps tile
/// weights and passability fixed while it runs.
///
/// `R` is the random source used to shuffle neighbours in depth-first
/// searches; the other algorithms never touch it.
pub struct Search<'g, R = StdRng> {
    grid: &'g Grid,
    algorithm: Algorithm,
    start: Position,
    goal: Option<Position>,
    heuristic: Option<Box<dyn Heuristic + 'g>>,
    rng: Option<R>,
    frontier: Frontier,
    predecessors: PredecessorMap,
    costs: CostMap,
    expanded: Vec<bool>,
    visit_order: Vec<Position>,
    path: Option<Path>,
    error: Option<Error>,
    status: Status,
    expansions: usize,
    // events of the last step; seeding events survive until the first step
    events: Vec<SearchEvent>,
    fresh: bool,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Tile>,
}

impl<'g, R: Rng> Search<'g, R> {
    pub(crate) fn with_parts(
        grid: &'g Grid,
        algorithm: Algorithm,
        start: Position,
        goal: Option<Position>,
        heuristic: Option<Box<dyn Heuristic + 'g>>,
        rng: Option<R>,
    ) -> Result<Self> {
        grid.tile_at(start)?;
        if let Some(goal) = goal {
            grid.tile_at(goal)?;
        }
        if algorithm.uses_heuristic() && (goal.is_none() || heuristic.is_none()) {
            return Err(Error::InvalidConstruction(format!(
                "{algorithm} search needs a goal and a heuristic"
            )));
        }
        if algorithm == Algorithm::DepthFirst && rng.is_none() {
            return Err(Error::InvalidConstruction(
                "depth-first search needs a random source".into(),
            ));
        }

        let mut search = Self {
            grid,
            algorithm,
            start,
            goal,
            heuristic,
            rng,
            frontier: Frontier::for_algorithm(algorithm),
            predecessors: PredecessorMap::for_grid(grid),
            costs: CostMap::for_grid(grid),
            expanded: vec![false; grid.len()],
            visit_order: Vec::new(),
            path: None,
            error: None,
            status: Status::Running,
            expansions: 0,
            events: Vec::new(),
            fresh: true,
            nbuf: Vec::with_capacity(4),
        };
        search.seed();
        Ok(search)
    }

    fn seed(&mut self) {
        debug!(
            "{} search from {} to {}",
            self.algorithm,
            self.start,
            self.goal.map_or_else(|| "(traversal)".to_string(), |g| g.to_string())
        );
        self.predecessors.insert_root(self.start);
        let priority = self.priority(self.start, 0.0);
        self.frontier.push(self.start, priority);
        self.events.push(SearchEvent::FrontierEntered(self.start));
        if self.algorithm.is_weighted() {
            self.costs.set(self.start, 0.0);
            self.events.push(SearchEvent::CostUpdated {
                pos: self.start,
                cost: 0.0,
            });
        }
    }

    /// Throw away all progress and start over from the seeded state.
    ///
    /// Depth-first searches keep drawing from the same random source, so a
    /// restarted run generally explores in a different order.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.predecessors.clear();
        self.costs.clear();
        self.expanded.fill(false);
        self.visit_order.clear();
        self.path = None;
        self.error = None;
        self.status = Status::Running;
        self.expansions = 0;
        self.events.clear();
        self.fresh = true;
        self.seed();
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Perform one removal-and-expansion cycle.
    ///
    /// Returns the events it produced; the first call also carries the
    /// seeding events for the start tile. Once the search is finished this
    /// returns an empty slice.
    pub fn step(&mut self) -> &[SearchEvent] {
        if self.fresh {
            self.fresh = false;
        } else {
            self.events.clear();
        }
        if self.status != Status::Running {
            return &self.events;
        }

        match self.next_open() {
            Some(current) => {
                self.visit(current);
                if self.goal == Some(current) {
                    self.succeed(current);
                } else {
                    self.expand(current);
                    if self.frontier.is_empty() {
                        self.exhaust();
                    }
                }
            }
            None => self.exhaust(),
        }
        &self.events
    }

    /// Step until the search is over.
    ///
    /// Returns the route for searches, the expansion order for goal-less
    /// traversals, or [`Error::Unreachable`] when the frontier empties first.
    pub fn run(&mut self) -> Result<Outcome> {
        while self.status == Status::Running {
            self.step();
        }
        match self.status {
            Status::Succeeded => self
                .path
                .clone()
                .map(Outcome::Found)
                .ok_or(Error::Unreachable),
            Status::Completed => Ok(Outcome::Traversed(self.visit_order.clone())),
            Status::Failed | Status::Running => {
                Err(self.error.clone().unwrap_or(Error::Unreachable))
            }
        }
    }

    /// Lazy sequence of every remaining event, stepping on demand.
    pub fn events(&mut self) -> Events<'_, 'g, R> {
        Events {
            search: self,
            pending: VecDeque::new(),
        }
    }

    /// Pop frontier entries until one that is not already expanded.
    fn next_open(&mut self) -> Option<Position> {
        while let Some(p) = self.frontier.pop() {
            match self.grid.index_of(p) {
                Some(i) if !self.expanded[i] => return Some(p),
                _ => trace!("skipping stale frontier entry {p}"),
            }
        }
        None
    }

    fn visit(&mut self, current: Position) {
        if let Some(i) = self.grid.index_of(current) {
            self.expanded[i] = true;
        }
        self.expansions += 1;
        self.visit_order.push(current);
        self.events.push(SearchEvent::Visited(current));
        trace!("expanding {current}");
    }

    fn expand(&mut self, current: Position) {
        let grid = self.grid;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend(grid.neighbors(current).filter(|t| t.is_passable()).copied());

        if self.algorithm == Algorithm::DepthFirst {
            if let Some(rng) = self.rng.as_mut() {
                nbuf.shuffle(rng);
            }
        }

        if self.algorithm.is_weighted() {
            self.relax(current, &nbuf);
        } else {
            self.discover(current, &nbuf);
        }
        self.nbuf = nbuf;
    }

    /// Unweighted expansion: queue every neighbour not seen before.
    fn discover(&mut self, current: Position, neighbors: &[Tile]) {
        for n in neighbors.iter().map(Tile::pos) {
            if self.predecessors.contains(n) {
                continue;
            }
            self.predecessors.insert(n, current);
            self.frontier.push(n, 0.0);
            self.events.push(SearchEvent::FrontierEntered(n));
        }
    }

    /// Weighted expansion: record cheaper routes and queue new tiles.
    fn relax(&mut self, current: Position, neighbors: &[Tile]) {
        let base = self.costs.get(current);
        for tile in neighbors {
            let n = tile.pos();
            let cost = base + tile.weight();
            if cost >= self.costs.get(n) {
                continue;
            }
            let discovered = self.predecessors.contains(n);
            self.costs.set(n, cost);
            self.predecessors.insert(n, current);
            self.events.push(SearchEvent::CostUpdated { pos: n, cost });
            trace!("relaxed {n} to {cost} via {current}");

            let priority = self.priority(n, cost);
            if !discovered {
                self.frontier.push(n, priority);
                self.events.push(SearchEvent::FrontierEntered(n));
            } else if self.algorithm.reprioritizes() {
                // The old entry goes stale; the cheaper one pops first.
                if let Some(i) = self.grid.index_of(n) {
                    self.expanded[i] = false;
                }
                self.frontier.push(n, priority);
            }
        }
    }

    fn succeed(&mut self, goal: Position) {
        let found = reconstruct(goal, &self.predecessors)
            .and_then(|route| Path::from_route(self.grid, route));
        match found {
            Ok(path) => {
                debug!(
                    "{} reached {goal} after {} expansions: {} moves, cost {}",
                    self.algorithm,
                    self.expansions,
                    path.edges(),
                    path.cost()
                );
                self.status = Status::Succeeded;
                self.events.push(SearchEvent::Succeeded(path.clone()));
                self.path = Some(path);
            }
            Err(e) => self.fail(e),
        }
    }

    fn exhaust(&mut self) {
        if self.goal.is_some() {
            self.fail(Error::Unreachable);
        } else {
            debug!(
                "{} traversal from {} expanded {} tiles",
                self.algorithm,
                self.start,
                self.visit_order.len()
            );
            self.status = Status::Completed;
            self.events.push(SearchEvent::TraversalCompleted {
                visited: self.visit_order.len(),
            });
        }
    }

    fn fail(&mut self, e: Error) {
        debug!(
            "{} search from {} failed after {} expansions: {e}",
            self.algorithm, self.start, self.expansions
        );
        self.status = Status::Failed;
        self.events.push(SearchEvent::Failed(e.clone()));
        self.error = Some(e);
    }
}

impl<'g, R> Search<'g, R> {
    /// Frontier priority of `p` reached at `cost`. Lower pops first.
    fn priority(&self, p: Position, cost: f64) -> f64 {
        match self.algorithm {
            Algorithm::BreadthFirst | Algorithm::DepthFirst => 0.0,
            Algorithm::UniformCost => cost,
            Algorithm::BestFirst => self.estimate(p),
            Algorithm::AStar => cost + self.estimate(p),
        }
    }

    fn estimate(&self, p: Position) -> f64 {
        match (&self.heuristic, self.goal) {
            (Some(h), Some(goal)) => h.estimate(p, goal),
            _ => 0.0,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status != Status::Running
    }

    /// Number of removal-and-expansion cycles so far.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Tiles in the order they were removed from the frontier.
    #[inline]
    pub fn visit_order(&self) -> &[Position] {
        &self.visit_order
    }

    #[inline]
    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Best known cost of `p`. Always `+∞` for unweighted searches.
    #[inline]
    pub fn cost_at(&self, p: Position) -> f64 {
        self.costs.get(p)
    }

    /// Entries currently queued, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The route, once the search has succeeded.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Iterator returned by [`Search::events`].
pub struct Events<'s, 'g, R> {
    search: &'s mut Search<'g, R>,
    pending: VecDeque<SearchEvent>,
}

impl<R: Rng> Iterator for Events<'_, '_, R> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.pending.pop_front() {
                return Some(e);
            }
            if self.search.is_finished() {
                return None;
            }
            let produced = self.search.step();
            self.pending.extend(produced.iter().cloned());
        }
    }
}
