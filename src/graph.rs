use std::convert::TryFrom;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use bstr::ByteSlice;
use fxhash::FxHashMap;
use gfa::gfa::GFA;
use gfa::parser::GFAParser;

use crate::error::{Error, Result};

pub type VertexId = i64;
pub type Weight = i64;

/// Position of an edge in the graph's edge list
pub type EdgeIndex = usize;

pub type AdjacencyList = Vec<EdgeIndex>;

/// A single undirected edge. The graph stores each edge once; both
/// endpoints refer to it by its `EdgeIndex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub v1: VertexId,
    pub v2: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(v1: VertexId, v2: VertexId, weight: Weight) -> Edge {
        Edge { v1, v2, weight }
    }

    /// The endpoint opposite `v`. For a self-loop this is `v` itself.
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.v1 == v {
            self.v2
        } else {
            self.v1
        }
    }

    pub fn connects(&self, v: VertexId) -> bool {
        self.v1 == v || self.v2 == v
    }
}

/// An undirected weighted graph stored as adjacency lists of edge
/// indices. Vertices and edges keep their insertion order, which
/// the algorithms rely on for deterministic tie-breaking.
#[derive(Default, Debug, Clone)]
pub struct Graph {
    vertices: Vec<VertexId>,
    index: FxHashMap<VertexId, usize>,
    adjacency: Vec<AdjacencyList>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Builds a graph by inserting the given `(v1, v2, weight)`
    /// triples in order.
    pub fn from_edges<I>(edges: I) -> Graph
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Graph::new();
        for (v1, v2, weight) in edges {
            graph.add_edge(v1, v2, weight);
        }
        graph
    }

    /// Adds `v` unless it is already present. Returns the vertex's
    /// position in the vertex sequence either way.
    pub fn add_vertex(&mut self, v: VertexId) -> usize {
        if let Some(ix) = self.index.get(&v) {
            *ix
        } else {
            let ix = self.vertices.len();
            self.vertices.push(v);
            self.index.insert(v, ix);
            self.adjacency.push(Vec::new());
            ix
        }
    }

    /// Adds an undirected edge, inserting missing endpoints first.
    /// Parallel edges and self-loops are kept as given; a self-loop
    /// appears twice in its vertex's adjacency list.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId, weight: Weight) -> EdgeIndex {
        let ix1 = self.add_vertex(v1);
        let ix2 = self.add_vertex(v2);

        let edge_ix = self.edges.len();
        self.edges.push(Edge::new(v1, v2, weight));

        self.adjacency[ix1].push(edge_ix);
        self.adjacency[ix2].push(edge_ix);

        edge_ix
    }

    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        self.index.get(&v).copied()
    }

    pub(crate) fn index(&self) -> &FxHashMap<VertexId, usize> {
        &self.index
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.index.contains_key(&v)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex_at(&self, ix: usize) -> VertexId {
        self.vertices[ix]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, ix: EdgeIndex) -> &Edge {
        &self.edges[ix]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The edges incident on `v`, in insertion order. Unknown
    /// vertices have no neighbors.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        let adjacent: &[EdgeIndex] = match self.index_of(v) {
            Some(ix) => self.adjacency[ix].as_slice(),
            None => &[],
        };
        adjacent.iter().map(move |&e| &self.edges[e])
    }

    /// The edges incident on the vertex at position `ix`, each
    /// paired with the position of its opposite endpoint.
    pub fn incident_at(&self, ix: usize) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        let v = self.vertices[ix];
        self.adjacency[ix].iter().map(move |&e| {
            let edge = &self.edges[e];
            (self.index[&edge.other(v)], edge)
        })
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.index_of(v).map_or(0, |ix| self.adjacency[ix].len())
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Constructs a graph from the given GFA input stream. Every
    /// segment becomes a vertex and every link an edge; segment
    /// names must be integers. The weight of a link is the total
    /// length of its overlap CIGAR, with `*` counting as zero.
    pub fn from_gfa_reader<T: BufRead>(reader: &mut T) -> Result<Graph> {
        let mut read_error: Option<std::io::Error> = None;
        let lines: Vec<String> = reader
            .lines()
            .scan(&mut read_error, |read_error, line| match line {
                Ok(line) => Some(line),
                Err(err) => {
                    **read_error = Some(err);
                    None
                }
            })
            .collect();
        let lines = lines.iter().map(|line| line.as_bytes());

        let parser: GFAParser<usize, ()> = GFAParser::new();
        let parsed: std::result::Result<GFA<usize, ()>, _> = parser.parse_lines(lines);

        if let Some(err) = read_error {
            return Err(err.into());
        }
        let gfa = parsed.map_err(|err| Error::Gfa(format!("{:?}", err)))?;

        let vertex_id = |seg: usize| {
            VertexId::try_from(seg).map_err(|_| Error::VertexIdOutOfRange(seg))
        };

        let mut graph = Graph::new();

        for segment in gfa.segments.iter() {
            graph.add_vertex(vertex_id(segment.name)?);
        }

        for link in gfa.links.iter() {
            let from = vertex_id(link.from_segment)?;
            let to = vertex_id(link.to_segment)?;
            graph.add_edge(from, to, overlap_weight(link.overlap.as_ref())?);
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "loaded GFA graph"
        );

        Ok(graph)
    }

    pub fn from_gfa_path<P: AsRef<Path>>(path: P) -> Result<Graph> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Graph::from_gfa_reader(&mut reader)
    }
}

/// Sums the operation lengths of a CIGAR string, e.g. `3M1I2M` is 6.
fn overlap_weight(overlap: &[u8]) -> Result<Weight> {
    let too_long = || {
        Error::Gfa(format!(
            "overlap {} does not fit in an edge weight",
            overlap.as_bstr()
        ))
    };

    overlap
        .split(|b| !b.is_ascii_digit())
        .filter(|digits| !digits.is_empty())
        .try_fold(0, |total: Weight, digits| {
            let len = digits
                .to_str()
                .ok()
                .and_then(|digits| digits.parse::<Weight>().ok())
                .ok_or_else(too_long)?;
            total.checked_add(len).ok_or_else(too_long)
        })
}
