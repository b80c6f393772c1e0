use std::fmt;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::{GraphEdit, GraphView};

/// A basic, undirected graph with 2D node coordinates.
///
/// Nodes are append-only and stored in flat parallel vectors; an edge is kept
/// once, canonicalized to `i < j`, in an insertion-ordered set so that edge
/// iteration (and the [`Display`](fmt::Display) dump built on it) is
/// deterministic.
///
/// `Clone` produces a fully independent deep copy: coordinate vectors, legends
/// and the edge set are all duplicated, so perturbing a clone is never
/// observable in the original.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    x: Vec<f64>,
    y: Vec<f64>,
    legend: Vec<String>,
    links: IndexSet<(usize, usize), FxBuildHasher>,
}

impl Graph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes. Nodes are numbered from `0` to `size() - 1`.
    pub fn size(&self) -> usize {
        self.x.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Appends a node, returning its index.
    pub fn add(&mut self, x: f64, y: f64, legend: impl Into<String>) -> usize {
        self.x.push(x);
        self.y.push(y);
        self.legend.push(legend.into());
        self.x.len() - 1
    }

    /// Joins nodes `i` and `j`.
    ///
    /// The pair is stored once regardless of argument order; self-links and
    /// duplicate links are silently dropped. Endpoints are recorded as given
    /// and checked against the node count when a layout run starts, not here.
    pub fn link(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.links.insert((i.min(j), i.max(j)));
    }

    /// True if nodes `i` and `j` are joined by an edge.
    pub fn linked(&self, i: usize, j: usize) -> bool {
        i != j && self.links.contains(&(i.min(j), i.max(j)))
    }

    /// Position of node `n`.
    pub fn coord(&self, n: usize) -> (f64, f64) {
        (self.x[n], self.y[n])
    }

    /// Moves node `n` to a new position.
    pub fn move_to(&mut self, n: usize, x: f64, y: f64) {
        self.x[n] = x;
        self.y[n] = y;
    }

    /// Legend associated with node `n`.
    pub fn legend(&self, n: usize) -> &str {
        &self.legend[n]
    }

    /// Squared Euclidean distance between nodes `i` and `j`.
    pub fn dist2(&self, i: usize, j: usize) -> f64 {
        (self.x[i] - self.x[j]) * (self.x[i] - self.x[j])
            + (self.y[i] - self.y[j]) * (self.y[i] - self.y[j])
    }

    /// Canonical `(i, j)` edge pairs, `i < j`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links.iter().copied()
    }
}

impl GraphView for Graph {
    fn size(&self) -> usize {
        Graph::size(self)
    }

    fn coord(&self, n: usize) -> (f64, f64) {
        Graph::coord(self, n)
    }

    fn linked(&self, i: usize, j: usize) -> bool {
        Graph::linked(self, i, j)
    }

    fn legend(&self, n: usize) -> &str {
        Graph::legend(self, n)
    }

    fn dist2(&self, i: usize, j: usize) -> f64 {
        Graph::dist2(self, i, j)
    }
}

impl GraphEdit for Graph {
    fn add(&mut self, x: f64, y: f64, legend: &str) -> usize {
        Graph::add(self, x, y, legend)
    }

    fn link(&mut self, i: usize, j: usize) {
        Graph::link(self, i, j)
    }

    fn move_to(&mut self, n: usize, x: f64, y: f64) {
        Graph::move_to(self, n, x, y)
    }
}

/// Human-readable dump for debugging; the exact format is not a stable
/// contract.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph: {} nodes, {} edges",
            self.size(),
            self.edge_count()
        )?;
        for n in 0..self.size() {
            writeln!(f, "  {}: ({}, {}) {:?}", n, self.x[n], self.y[n], self.legend[n])?;
        }
        for (i, j) in self.edges() {
            writeln!(f, "  edge {i}-{j}")?;
        }
        Ok(())
    }
}
