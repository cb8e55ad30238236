use std::collections::VecDeque;

use crate::graph::{Edge, Graph, Weight};

/// Visited flags for Prim-style frontier expansion, indexed by
/// vertex position.
#[derive(Default, Debug, Clone)]
pub struct SpanningState {
    pub visited: Vec<bool>,
}

impl SpanningState {
    pub fn initialize(graph: &Graph, start: usize) -> SpanningState {
        let mut visited = vec![false; graph.vertex_count()];
        visited[start] = true;
        SpanningState { visited }
    }

    /// Finds the lightest edge with exactly one visited endpoint,
    /// along with the position of its unvisited endpoint.
    ///
    /// Vertices are scanned in insertion order, and each vertex's
    /// edges in insertion order; an edge replaces the current
    /// candidate only if its weight is strictly smaller, so the
    /// first edge seen wins ties.
    pub fn min_frontier_edge(&self, graph: &Graph) -> Option<(usize, Edge)> {
        let mut min_edge: Option<(usize, Edge)> = None;

        for (ix, _) in self.visited.iter().enumerate().filter(|(_, v)| **v) {
            for (other, edge) in graph.incident_at(ix) {
                if self.visited[other] {
                    continue;
                }
                match min_edge {
                    Some((_, min)) if min.weight <= edge.weight => (),
                    _ => min_edge = Some((other, *edge)),
                }
            }
        }

        min_edge
    }

    pub fn visit(&mut self, ix: usize) {
        self.visited[ix] = true;
    }
}

/// Distance and predecessor arrays for array-scan Dijkstra,
/// indexed by vertex position. `None` in `dist` means no path has
/// been found yet.
#[derive(Default, Debug, Clone)]
pub struct PathState {
    pub dist: Vec<Option<Weight>>,
    pub prev: Vec<Option<usize>>,
    pub unvisited: Vec<bool>,
    pub remaining: usize,
}

impl PathState {
    pub fn initialize(graph: &Graph, start: usize) -> PathState {
        let num_nodes = graph.vertex_count();

        let mut dist = vec![None; num_nodes];
        dist[start] = Some(0);

        PathState {
            dist,
            prev: vec![None; num_nodes],
            unvisited: vec![true; num_nodes],
            remaining: num_nodes,
        }
    }

    /// The unvisited vertex with the smallest known distance, the
    /// earliest one on ties. Returns `None` once every remaining
    /// vertex is unreachable.
    pub fn closest_unvisited(&self) -> Option<usize> {
        let mut closest: Option<(usize, Weight)> = None;

        for (ix, dist) in self.dist.iter().enumerate() {
            if !self.unvisited[ix] {
                continue;
            }
            if let Some(d) = *dist {
                match closest {
                    Some((_, min)) if min <= d => (),
                    _ => closest = Some((ix, d)),
                }
            }
        }

        closest.map(|(ix, _)| ix)
    }

    pub fn settle(&mut self, ix: usize) {
        if self.unvisited[ix] {
            self.unvisited[ix] = false;
            self.remaining -= 1;
        }
    }

    /// Offers a path to `to` through `from`; keeps it if it is
    /// strictly shorter than the best known one. Returns `None` if
    /// the path length does not fit in a `Weight`.
    pub fn relax(&mut self, from: usize, to: usize, weight: Weight) -> Option<bool> {
        let candidate = match self.dist[from] {
            Some(d) => d.checked_add(weight)?,
            None => return Some(false),
        };

        match self.dist[to] {
            Some(current) if current <= candidate => Some(false),
            _ => {
                self.dist[to] = Some(candidate);
                self.prev[to] = Some(from);
                Some(true)
            }
        }
    }
}

/// Component label of a vertex that no traversal has reached yet.
pub const UNVISITED: usize = 0;

/// Component labels for BFS labeling, indexed by vertex position.
#[derive(Default, Debug, Clone)]
pub struct ComponentState {
    pub ids: Vec<usize>,
    pub count: usize,
    queue: VecDeque<usize>,
}

impl ComponentState {
    pub fn initialize(graph: &Graph) -> ComponentState {
        ComponentState {
            ids: vec![UNVISITED; graph.vertex_count()],
            count: 0,
            queue: VecDeque::new(),
        }
    }

    pub fn is_visited(&self, ix: usize) -> bool {
        self.ids[ix] != UNVISITED
    }

    /// Labels everything reachable from `root` with a fresh
    /// component id and returns the number of vertices labeled.
    pub fn label_from(&mut self, graph: &Graph, root: usize) -> usize {
        self.count += 1;
        let id = self.count;

        self.ids[root] = id;
        self.queue.push_back(root);
        let mut size = 1;

        while let Some(current) = self.queue.pop_front() {
            for (other, _) in graph.incident_at(current) {
                if !self.is_visited(other) {
                    self.ids[other] = id;
                    self.queue.push_back(other);
                    size += 1;
                }
            }
        }

        size
    }
}
