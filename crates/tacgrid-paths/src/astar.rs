use tacgrid_core::{Grid, GridError, Point};

use crate::node::PathNode;
use crate::open::OpenSet;
use crate::path::Path;
use crate::traits::Topology;

/// Open/closed membership of a node during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    /// In the open set; the payload is the node's place in line.
    Open(u64),
    Closed,
}

/// Reusable A* scratch space. One search at a time.
#[derive(Debug, Default)]
pub(crate) struct Search {
    visits: Vec<Visit>,
    open: OpenSet,
    nbuf: Vec<Point>,
    expanded: usize,
}

impl Search {
    /// Nodes expanded by the most recent search.
    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }

    /// Find the cheapest path from `start` to `goal` under `topology`.
    ///
    /// Every node's scratch state is reset first. Unwalkable neighbors are
    /// closed as soon as they are seen. The start cell is expanded whether or
    /// not it is walkable. Returns `Ok(None)` when the goal cannot be reached.
    pub(crate) fn astar<T: Topology>(
        &mut self,
        grid: &mut Grid<PathNode>,
        topology: &T,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, GridError> {
        let start_idx = grid.index(start).ok_or(GridError::OutOfBounds(start))?;
        let goal_idx = grid.index(goal).ok_or(GridError::OutOfBounds(goal))?;

        let bounds = grid.bounds();
        let width = bounds.width() as usize;
        let nodes = grid.cells_mut();
        for node in nodes.iter_mut() {
            node.reset_for_search();
        }
        self.visits.clear();
        self.visits.resize(nodes.len(), Visit::Unseen);
        self.open.clear();
        self.expanded = 0;

        {
            let node = &mut nodes[start_idx];
            node.g = 0;
            node.h = topology.estimate(start, goal);
            node.calculate_f_cost();
            let seq = self.open.insert(start_idx, node.f);
            self.visits[start_idx] = Visit::Open(seq);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(entry) = self.open.pop() else {
                break 'search false;
            };

            let ci = entry.idx;

            // Skip entries superseded by a cheaper push, and closed nodes.
            if self.visits[ci] != Visit::Open(entry.seq) || nodes[ci].f != entry.f {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.visits[ci] = Visit::Closed;
            self.expanded += 1;
            let current = nodes[ci].pos();
            let current_g = nodes[ci].g;

            nbuf.clear();
            topology.neighbors(current, bounds, &mut nbuf);

            for &np in nbuf.iter() {
                if !bounds.contains(np) {
                    continue;
                }
                let ni = np.y as usize * width + np.x as usize;
                if self.visits[ni] == Visit::Closed {
                    continue;
                }

                let n = &mut nodes[ni];
                if !n.is_walkable() {
                    self.visits[ni] = Visit::Closed;
                    continue;
                }

                let tentative_g = current_g.saturating_add(topology.cost(current, np));
                if tentative_g >= n.g {
                    continue;
                }

                n.came_from = Some(current);
                n.g = tentative_g;
                n.h = topology.estimate(np, goal);
                n.calculate_f_cost();

                match self.visits[ni] {
                    Visit::Unseen => {
                        let seq = self.open.insert(ni, n.f);
                        self.visits[ni] = Visit::Open(seq);
                    }
                    Visit::Open(seq) => self.open.decrease(ni, n.f, seq),
                    Visit::Closed => {}
                }
            }
        };

        self.nbuf = nbuf;

        if !found {
            log::debug!(
                "no path {start} -> {goal} ({} nodes expanded)",
                self.expanded
            );
            return Ok(None);
        }

        // Walk the predecessor links back from the goal.
        let mut points = Vec::new();
        let mut cursor = Some(goal);
        while let Some(p) = cursor {
            points.push(p);
            cursor = nodes[p.y as usize * width + p.x as usize].came_from;
        }
        points.reverse();

        let cost = nodes[goal_idx].g;
        log::debug!(
            "path {start} -> {goal}: {} cells, cost {cost} ({} nodes expanded)",
            points.len(),
            self.expanded
        );
        Ok(Some(Path::new(points, cost)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{HexMetric, HexTopology, SquareTopology};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;
    use tacgrid_core::{GridConfig, Range};

    fn grid_for<T: Topology>(topology: &T, width: i32, height: i32) -> Grid<PathNode> {
        let config = GridConfig::new(width, height, 1.0).with_layout(topology.layout());
        Grid::from_config(config, PathNode::new).unwrap()
    }

    fn random_grid<T: Topology>(topology: &T, rng: &mut StdRng) -> Grid<PathNode> {
        let width = rng.gen_range(1..=12);
        let height = rng.gen_range(1..=12);
        let density = rng.gen_range(0.0..0.45);
        let mut grid = grid_for(topology, width, height);
        for node in grid.cells_mut() {
            if rng.gen_bool(density) {
                node.set_walkable(false);
            }
        }
        grid
    }

    fn random_point(grid: &Grid<PathNode>, rng: &mut StdRng) -> Point {
        Point::new(rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()))
    }

    fn walkable(grid: &Grid<PathNode>, p: Point) -> bool {
        grid.get(p).map(|n| n.is_walkable()).unwrap_or(false)
    }

    /// Straightforward A* over an append-only open list, picking the first
    /// node with the lowest `f`.
    fn linear_scan<T: Topology>(
        topology: &T,
        grid: &Grid<PathNode>,
        start: Point,
        goal: Point,
    ) -> Option<(Vec<Point>, i32)> {
        let bounds = grid.bounds();
        let idx = |p: Point| grid.index(p).unwrap();
        let len = bounds.len();
        let mut g = vec![i32::MAX; len];
        let mut f = vec![i32::MAX; len];
        let mut parent: Vec<Option<Point>> = vec![None; len];
        let mut closed = vec![false; len];
        let mut open = vec![start];
        g[idx(start)] = 0;
        f[idx(start)] = topology.estimate(start, goal);
        let mut buf = Vec::new();

        while !open.is_empty() {
            let mut best = 0;
            for i in 1..open.len() {
                if f[idx(open[i])] < f[idx(open[best])] {
                    best = i;
                }
            }
            let cur = open[best];
            if cur == goal {
                let mut points = vec![goal];
                let mut p = goal;
                while let Some(prev) = parent[idx(p)] {
                    points.push(prev);
                    p = prev;
                }
                points.reverse();
                return Some((points, g[idx(goal)]));
            }
            open.remove(best);
            closed[idx(cur)] = true;

            buf.clear();
            topology.neighbors(cur, bounds, &mut buf);
            for &n in &buf {
                let ni = idx(n);
                if closed[ni] {
                    continue;
                }
                if !walkable(grid, n) {
                    closed[ni] = true;
                    continue;
                }
                let t = g[idx(cur)] + topology.cost(cur, n);
                if t < g[ni] {
                    parent[ni] = Some(cur);
                    g[ni] = t;
                    f[ni] = t + topology.estimate(n, goal);
                    if !open.contains(&n) {
                        open.push(n);
                    }
                }
            }
        }
        None
    }

    /// Uniform-cost search with no heuristic, for cost comparison.
    fn dijkstra_cost<T: Topology>(
        topology: &T,
        grid: &Grid<PathNode>,
        start: Point,
        goal: Point,
    ) -> Option<i32> {
        let bounds = grid.bounds();
        let mut dist = vec![i32::MAX; bounds.len()];
        let mut heap = BinaryHeap::new();
        dist[grid.index(start).unwrap()] = 0;
        heap.push(Reverse((0, start)));
        let mut buf = Vec::new();
        while let Some(Reverse((d, p))) = heap.pop() {
            if p == goal {
                return Some(d);
            }
            if d > dist[grid.index(p).unwrap()] {
                continue;
            }
            buf.clear();
            topology.neighbors(p, bounds, &mut buf);
            for &n in &buf {
                if !walkable(grid, n) {
                    continue;
                }
                let nd = d + topology.cost(p, n);
                let ni = grid.index(n).unwrap();
                if nd < dist[ni] {
                    dist[ni] = nd;
                    heap.push(Reverse((nd, n)));
                }
            }
        }
        None
    }

    fn check_path<T: Topology>(topology: &T, grid: &Grid<PathNode>, path: &Path) {
        let mut buf = Vec::new();
        let mut total = 0;
        for pair in path.points().windows(2) {
            buf.clear();
            topology.neighbors(pair[0], grid.bounds(), &mut buf);
            assert!(buf.contains(&pair[1]), "{} -> {} is not a step", pair[0], pair[1]);
            assert!(walkable(grid, pair[1]));
            total += topology.cost(pair[0], pair[1]);
        }
        assert_eq!(total, path.cost());
        assert_eq!(grid.get(path.goal()).unwrap().g_cost(), path.cost());
    }

    fn compare_against_references<T: Topology>(topology: T, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut search = Search::default();
        for _ in 0..150 {
            let mut grid = random_grid(&topology, &mut rng);
            let start = random_point(&grid, &mut rng);
            let goal = random_point(&grid, &mut rng);

            let found = search.astar(&mut grid, &topology, start, goal).unwrap();
            let reference = linear_scan(&topology, &grid, start, goal);
            let optimal = dijkstra_cost(&topology, &grid, start, goal);

            match &found {
                Some(path) => {
                    check_path(&topology, &grid, path);
                    assert_eq!(path.start(), start);
                    assert_eq!(path.goal(), goal);
                    assert_eq!(Some(path.cost()), optimal);
                }
                None => assert_eq!(optimal, None),
            }
            assert_eq!(found.map(|p| (p.points().to_vec(), p.cost())), reference);
        }
    }

    #[test]
    fn square_eight_matches_references() {
        compare_against_references(SquareTopology::eight(), 1);
    }

    #[test]
    fn square_four_matches_references() {
        compare_against_references(SquareTopology::four(), 2);
    }

    #[test]
    fn hex_octile_matches_references() {
        compare_against_references(HexTopology::default(), 3);
    }

    #[test]
    fn hex_chebyshev_matches_references() {
        compare_against_references(HexTopology::new(HexMetric::Chebyshev), 4);
    }

    #[test]
    fn out_of_bounds_endpoints_are_errors() {
        let topology = SquareTopology::eight();
        let mut grid = grid_for(&topology, 3, 3);
        let mut search = Search::default();
        let bad = Point::new(3, 0);
        assert_eq!(
            search.astar(&mut grid, &topology, Point::ZERO, bad),
            Err(GridError::OutOfBounds(bad))
        );
        assert_eq!(
            search.astar(&mut grid, &topology, bad, Point::ZERO),
            Err(GridError::OutOfBounds(bad))
        );
    }

    #[test]
    fn scratch_is_reset_between_searches() {
        let topology = SquareTopology::eight();
        let mut grid = grid_for(&topology, 6, 6);
        let mut search = Search::default();
        search
            .astar(&mut grid, &topology, Point::ZERO, Point::new(5, 5))
            .unwrap();
        // A trivial search leaves every other node untouched.
        search
            .astar(&mut grid, &topology, Point::new(2, 2), Point::new(2, 2))
            .unwrap();
        for (p, node) in grid.iter() {
            if p == Point::new(2, 2) {
                assert_eq!(node.g_cost(), 0);
            } else {
                assert_eq!(node.g_cost(), crate::node::UNREACHABLE);
                assert_eq!(node.came_from(), None);
            }
        }
        assert_eq!(search.expanded(), 0);
    }

    #[test]
    fn unwalkable_start_still_expands() {
        let topology = SquareTopology::eight();
        let mut grid = grid_for(&topology, 3, 1);
        grid.get_mut(Point::ZERO).unwrap().set_walkable(false);
        let mut search = Search::default();
        let path = search
            .astar(&mut grid, &topology, Point::ZERO, Point::new(2, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.points(), &[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
    }

    /// Square grid whose every step costs more than half of `i32::MAX`.
    struct Steep;

    impl Topology for Steep {
        fn layout(&self) -> tacgrid_core::Layout {
            tacgrid_core::Layout::Square
        }

        fn neighbors(&self, p: Point, bounds: Range, buf: &mut Vec<Point>) {
            crate::neighbors::square_4(p, bounds, buf);
        }

        fn cost(&self, _from: Point, _to: Point) -> i32 {
            i32::MAX / 2 + 1
        }

        fn estimate(&self, _from: Point, _to: Point) -> i32 {
            0
        }
    }

    #[test]
    fn overflowing_costs_saturate_to_unreachable() {
        let mut grid = grid_for(&Steep, 3, 1);
        let mut search = Search::default();
        let path = search
            .astar(&mut grid, &Steep, Point::ZERO, Point::new(1, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), i32::MAX / 2 + 1);
        assert_eq!(
            search.astar(&mut grid, &Steep, Point::ZERO, Point::new(2, 0)),
            Ok(None)
        );
    }

    #[test]
    fn unwalkable_goal_is_unreachable() {
        let topology = HexTopology::default();
        let mut grid = grid_for(&topology, 4, 4);
        grid.get_mut(Point::new(3, 3)).unwrap().set_walkable(false);
        let mut search = Search::default();
        assert_eq!(
            search.astar(&mut grid, &topology, Point::ZERO, Point::new(3, 3)),
            Ok(None)
        );
    }

    #[test]
    fn full_open_grid_expands_along_the_diagonal() {
        let topology = SquareTopology::eight();
        let mut grid = grid_for(&topology, 20, 20);
        let mut search = Search::default();
        let path = search
            .astar(&mut grid, &topology, Point::ZERO, Point::new(19, 19))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 20);
        assert!(search.expanded() < Range::sized(20, 20).len());
    }
}
