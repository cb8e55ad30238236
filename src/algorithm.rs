use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, Weight};
use crate::state::{ComponentState, PathState, SpanningState};

/// Grows a minimum spanning tree from `start` by repeatedly taking
/// the lightest frontier edge.
///
/// The returned graph contains every vertex of `graph`, in the same
/// order, but only the tree edges of the component containing
/// `start`; vertices in other components are left without edges.
pub fn minimum_spanning_tree(graph: &Graph, start: VertexId) -> Result<Graph> {
    let mut tree = Graph::new();
    for &v in graph.vertices() {
        tree.add_vertex(v);
    }

    if graph.is_empty() {
        return Ok(tree);
    }

    let start_ix = graph
        .index_of(start)
        .ok_or(Error::InvalidStartVertex(start))?;

    debug!(
        start,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "building minimum spanning tree"
    );

    let mut state = SpanningState::initialize(graph, start_ix);

    while let Some((reached, edge)) = state.min_frontier_edge(graph) {
        trace!(v1 = edge.v1, v2 = edge.v2, weight = edge.weight, "tree edge");
        tree.add_edge(edge.v1, edge.v2, edge.weight);
        state.visit(reached);
    }

    debug!(
        edges = tree.edge_count(),
        weight = tree.total_weight(),
        "minimum spanning tree done"
    );

    Ok(tree)
}

/// Single-source shortest path distances and predecessors. Both
/// arrays are indexed by vertex position in the source graph, which
/// is the vertex id itself when the ids are `0..n` inserted in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: Option<VertexId>,
    pub vertices: Vec<VertexId>,
    pub dist: Vec<Option<Weight>>,
    pub prev: Vec<Option<VertexId>>,
    index: FxHashMap<VertexId, usize>,
}

impl ShortestPaths {
    /// The source vertex, or `None` for an empty graph.
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    fn position(&self, v: VertexId) -> Option<usize> {
        self.index.get(&v).copied()
    }

    /// Length of the shortest path from the start to `v`, or `None`
    /// if `v` is unreachable or not in the graph.
    pub fn distance(&self, v: VertexId) -> Option<Weight> {
        self.position(v).and_then(|ix| self.dist[ix])
    }

    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.position(v).and_then(|ix| self.prev[ix])
    }

    /// The vertices on a shortest path from the start to `v`, both
    /// ends included.
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        self.distance(v)?;

        let mut path = vec![v];
        let mut current = v;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm, selecting the next vertex by a linear scan
/// over the unvisited set rather than with a priority queue.
///
/// Negative edge weights are rejected up front, as is a start vertex
/// that is not part of a non-empty graph. A path whose length does
/// not fit in a `Weight` is reported as an error.
pub fn shortest_paths(graph: &Graph, start: VertexId) -> Result<ShortestPaths> {
    let vertices = graph.vertices().to_vec();

    if graph.is_empty() {
        return Ok(ShortestPaths {
            start: None,
            vertices,
            dist: Vec::new(),
            prev: Vec::new(),
            index: FxHashMap::default(),
        });
    }

    let start_ix = graph
        .index_of(start)
        .ok_or(Error::InvalidStartVertex(start))?;

    if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0) {
        return Err(Error::NegativeWeight {
            v1: edge.v1,
            v2: edge.v2,
            weight: edge.weight,
        });
    }

    debug!(
        start,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "computing shortest paths"
    );

    let mut state = PathState::initialize(graph, start_ix);

    while state.remaining > 0 {
        let current = match state.closest_unvisited() {
            Some(ix) => ix,
            None => break,
        };
        state.settle(current);
        trace!(vertex = graph.vertex_at(current), dist = ?state.dist[current], "settled");

        for (other, edge) in graph.incident_at(current) {
            if state.unvisited[other] {
                state
                    .relax(current, other, edge.weight)
                    .ok_or_else(|| Error::WeightOverflow {
                        from: graph.vertex_at(current),
                        to: graph.vertex_at(other),
                    })?;
            }
        }
    }

    debug!(unreachable = state.remaining, "shortest paths done");

    let prev = state
        .prev
        .iter()
        .map(|p| p.map(|ix| graph.vertex_at(ix)))
        .collect();

    Ok(ShortestPaths {
        start: Some(start),
        vertices,
        dist: state.dist,
        prev,
        index: graph.index().clone(),
    })
}

/// Connected component labels, indexed by vertex position. Ids
/// start at 1 and follow the order in which components are first
/// reached when scanning the vertices in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    pub vertices: Vec<VertexId>,
    pub ids: Vec<usize>,
    count: usize,
    index: FxHashMap<VertexId, usize>,
}

impl Components {
    /// The number of distinct components.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn component_of(&self, v: VertexId) -> Option<usize> {
        self.index.get(&v).map(|&ix| self.ids[ix])
    }

    /// The vertices labeled `id`, in insertion order.
    pub fn members(&self, id: usize) -> Vec<VertexId> {
        self.vertices
            .iter()
            .zip(self.ids.iter())
            .filter(|&(_, &c)| c == id)
            .map(|(&v, _)| v)
            .collect()
    }
}

/// Labels every vertex with the id of its connected component,
/// using one breadth-first traversal per component.
pub fn connected_components(graph: &Graph) -> Components {
    let mut state = ComponentState::initialize(graph);

    for ix in 0..graph.vertex_count() {
        if !state.is_visited(ix) {
            let size = state.label_from(graph, ix);
            trace!(
                component = state.count,
                root = graph.vertex_at(ix),
                size,
                "component"
            );
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        components = state.count,
        "connected components done"
    );

    Components {
        vertices: graph.vertices().to_vec(),
        ids: state.ids,
        count: state.count,
        index: graph.index().clone(),
    }
}
