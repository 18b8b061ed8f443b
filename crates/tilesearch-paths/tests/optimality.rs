//! Cross-checks every search against exhaustive enumeration on small grids.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tilesearch_core::{Error, Grid, Position};
use tilesearch_paths::{HeuristicKind, Path, Search};

/// One tile of a generated grid: `None` is a wall, `Some(w)` floor of weight `w`.
type Cell = Option<u8>;

fn build(rows: usize, cols: usize, cells: &[Cell], start: Position, goal: Position) -> Grid {
    let mut grid = Grid::new(rows, cols).unwrap();
    for (i, cell) in cells.iter().enumerate() {
        let p = grid.position_of(i);
        match cell {
            Some(w) => grid.set_weight(p, f64::from(*w)).unwrap(),
            None => grid.set_passable(p, false).unwrap(),
        }
    }
    grid.set_passable(start, true).unwrap();
    grid.set_passable(goal, true).unwrap();
    grid
}

/// Number of moves on a shortest route, by expanding breadth levels.
fn level_distance(grid: &Grid, start: Position, goal: Position) -> Option<usize> {
    let mut seen = HashSet::from([start]);
    let mut level = vec![start];
    let mut depth = 0;
    while !level.is_empty() {
        if level.contains(&goal) {
            return Some(depth);
        }
        let mut next = Vec::new();
        for &p in &level {
            for t in grid.neighbors(p).filter(|t| t.is_passable()) {
                if seen.insert(t.pos()) {
                    next.push(t.pos());
                }
            }
        }
        level = next;
        depth += 1;
    }
    None
}

/// Cheapest cost over all simple paths from `start` to `goal`.
fn brute_force_cost(grid: &Grid, start: Position, goal: Position) -> Option<f64> {
    fn walk(
        grid: &Grid,
        at: Position,
        goal: Position,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if at == goal {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for t in grid.neighbors(at).filter(|t| t.is_passable()) {
            let i = grid.index_of(t.pos()).unwrap();
            if on_path[i] {
                continue;
            }
            on_path[i] = true;
            walk(grid, t.pos(), goal, cost + t.weight(), on_path, best);
            on_path[i] = false;
        }
    }

    let mut on_path = vec![false; grid.len()];
    on_path[grid.index_of(start).unwrap()] = true;
    let mut best = None;
    walk(grid, start, goal, 0.0, &mut on_path, &mut best);
    best
}

fn assert_walk(grid: &Grid, path: &Path, start: Position, goal: Position) {
    assert_eq!(path.start(), start);
    assert_eq!(path.goal(), goal);
    for w in path.positions().windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
    }
    for &p in path.positions() {
        assert!(grid.tile_at(p).unwrap().is_passable(), "{p} is a wall");
    }
}

fn searches(grid: &Grid, start: Position, goal: Position) -> Vec<(&'static str, Search<'_>)> {
    vec![
        ("bfs", Search::breadth_first(grid, start, Some(goal)).unwrap()),
        (
            "dfs",
            Search::depth_first(grid, start, Some(goal), StdRng::seed_from_u64(9)).unwrap(),
        ),
        ("ucs", Search::uniform_cost(grid, start, Some(goal)).unwrap()),
        (
            "best-first",
            Search::best_first(grid, start, goal, HeuristicKind::Manhattan).unwrap(),
        ),
        (
            "astar",
            Search::astar(grid, start, goal, HeuristicKind::Euclidean).unwrap(),
        ),
    ]
}

fn scenario() -> impl Strategy<Value = (usize, usize, Vec<Cell>, usize, usize)> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        let len = rows * cols;
        let cell = prop_oneof![1 => Just(None), 4 => (1u8..=9).prop_map(Some)];
        (
            Just(rows),
            Just(cols),
            proptest::collection::vec(cell, len),
            0..len,
            0..len,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn bfs_hop_count_matches_level_enumeration((rows, cols, cells, s, g) in scenario()) {
        let probe = Grid::new(rows, cols).unwrap();
        let (start, goal) = (probe.position_of(s), probe.position_of(g));
        let grid = build(rows, cols, &cells, start, goal);

        let result = Search::breadth_first(&grid, start, Some(goal)).unwrap().run();
        match level_distance(&grid, start, goal) {
            Some(hops) => {
                let path = result.unwrap().path().cloned().unwrap();
                prop_assert_eq!(path.edges(), hops);
            }
            None => prop_assert_eq!(result, Err(Error::Unreachable)),
        }
    }

    #[test]
    fn weighted_searches_match_brute_force((rows, cols, cells, s, g) in scenario()) {
        let probe = Grid::new(rows, cols).unwrap();
        let (start, goal) = (probe.position_of(s), probe.position_of(g));
        let grid = build(rows, cols, &cells, start, goal);
        let best = brute_force_cost(&grid, start, goal);

        let cost_of = |result: tilesearch_core::Result<tilesearch_paths::Outcome>| {
            result.map(|outcome| outcome.path().map(Path::cost))
        };

        let ucs = cost_of(Search::uniform_cost(&grid, start, Some(goal)).unwrap().run());
        prop_assert_eq!(&ucs, &best.map(Some).ok_or(Error::Unreachable));
        for kind in [HeuristicKind::Manhattan, HeuristicKind::Euclidean] {
            let astar = cost_of(Search::astar(&grid, start, goal, kind).unwrap().run());
            prop_assert_eq!(&astar, &ucs, "{}", kind);
        }
    }

    #[test]
    fn every_search_agrees_on_reachability((rows, cols, cells, s, g) in scenario()) {
        let probe = Grid::new(rows, cols).unwrap();
        let (start, goal) = (probe.position_of(s), probe.position_of(g));
        let grid = build(rows, cols, &cells, start, goal);
        let reachable = level_distance(&grid, start, goal).is_some();

        for (name, mut search) in searches(&grid, start, goal) {
            match search.run() {
                Ok(outcome) => {
                    prop_assert!(reachable, "{} found a route to a sealed goal", name);
                    assert_walk(&grid, outcome.path().unwrap(), start, goal);
                }
                Err(e) => {
                    prop_assert!(!reachable, "{} missed a reachable goal", name);
                    prop_assert_eq!(e, Error::Unreachable);
                }
            }
            prop_assert!(search.expansions() <= grid.passable_count() * 4);
        }
    }
}

#[test]
fn open_three_by_three_takes_four_moves() {
    let grid = Grid::new(3, 3).unwrap();
    let (start, goal) = (Position::new(0, 0), Position::new(2, 2));
    let path = Search::breadth_first(&grid, start, Some(goal))
        .unwrap()
        .run()
        .unwrap()
        .path()
        .cloned()
        .unwrap();
    assert_eq!(path.edges(), 4);
    assert_walk(&grid, &path, start, goal);
}

#[test]
fn uniform_cost_detours_around_heavy_center() {
    let mut heavy = Grid::new(3, 3).unwrap();
    heavy.set_weight(Position::new(1, 1), 10.0).unwrap();
    let (start, goal) = (Position::new(0, 0), Position::new(2, 2));

    let path = tilesearch_paths::find_path(
        &heavy,
        start,
        goal,
        &tilesearch_paths::SearchConfig {
            algorithm: tilesearch_paths::Algorithm::UniformCost,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(path.cost(), 4.0);
    assert!(!path.contains(Position::new(1, 1)));

    let through = Path::from_route(
        &heavy,
        vec![
            start,
            Position::new(0, 1),
            Position::new(1, 1),
            Position::new(2, 1),
            goal,
        ],
    )
    .unwrap();
    assert_eq!(through.cost(), 13.0);
}

#[test]
fn sealed_goal_fails_for_every_algorithm() {
    let grid: Grid = "
.....
..#..
.#.#.
..#..
....."
        .trim()
        .parse()
        .unwrap();
    let (start, goal) = (Position::new(0, 0), Position::new(2, 2));
    for (name, mut search) in searches(&grid, start, goal) {
        assert_eq!(search.run(), Err(Error::Unreachable), "{name}");
        assert!(search.is_finished(), "{name}");
    }
}

#[test]
fn astar_matches_uniform_cost_on_weighted_ten_by_ten() {
    let grid: Grid = "
..........
..........
..........
...5555...
...5555...
...5555...
...5555...
..........
..........
.........."
        .trim()
        .parse()
        .unwrap();
    let (start, goal) = (Position::new(4, 0), Position::new(5, 9));
    let ucs = Search::uniform_cost(&grid, start, Some(goal))
        .unwrap()
        .run()
        .unwrap();
    let astar = Search::astar(&grid, start, goal, HeuristicKind::Euclidean)
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(astar.path().unwrap().cost(), ucs.path().unwrap().cost());
    assert_walk(&grid, astar.path().unwrap(), start, goal);
}

#[test]
fn six_by_six_maze_matches_brute_force() {
    let grid: Grid = "
..3...
.#.#9.
.#2#..
...#1.
#9.#.#
...7.."
        .trim()
        .parse()
        .unwrap();
    let (start, goal) = (Position::new(0, 0), Position::new(5, 5));
    let best = brute_force_cost(&grid, start, goal).unwrap();
    for (name, mut search) in searches(&grid, start, goal) {
        let outcome = search.run().unwrap();
        let path = outcome.path().unwrap();
        assert_walk(&grid, path, start, goal);
        if name == "ucs" || name == "astar" {
            assert_eq!(path.cost(), best, "{name}");
        } else {
            assert!(path.cost() >= best, "{name}");
        }
    }
}
