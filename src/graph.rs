//! Directed graphs stored as adjacency lists.

use errors::*;

use std::collections::VecDeque;
use std::fmt;

/// The type of the index of a vertex in a `Graph`.
pub type Node = usize;

/// A directed graph over a fixed number of vertices.
///
/// Each vertex is identified by a `Node` index in the range
/// `0..graph.vertex_count()`. Each vertex owns the list of vertices its
/// outgoing edges lead to, in the order the edges were added. Self-loops and
/// parallel edges are kept as given.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Node>>
}

impl Graph {
    /// Construct a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Graph {
        Graph { adjacency: vec![Vec::new(); vertices] }
    }

    /// Return the number of vertices in this graph.
    pub fn vertex_count(&self) -> usize { self.adjacency.len() }

    /// Return the number of edges added so far, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Return `vertex`'s neighbors, in the order their edges were added.
    pub fn neighbors(&self, vertex: Node) -> Result<&[Node]> {
        self.check(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Add an edge from `vertex` to `connected`. Both must already be vertices
    /// of this graph.
    pub fn add_edge(&mut self, vertex: Node, connected: Node) -> Result<()> {
        self.check(vertex)?;
        self.check(connected)?;
        trace!(vertex, connected, "added edge");
        self.adjacency[vertex].push(connected);
        Ok(())
    }

    fn check(&self, vertex: Node) -> Result<()> {
        if vertex >= self.vertex_count() {
            bail!(ErrorKind::VertexOutOfRange(vertex, self.vertex_count()));
        }
        Ok(())
    }

    /// Return the vertices reachable from `start`, in breadth-first order.
    ///
    /// A vertex is marked visited as it is enqueued, so each vertex is queued
    /// at most once.
    pub fn bfs(&self, start: Node) -> Result<Vec<Node>> {
        self.check(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &neighbor in &self.adjacency[vertex] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(start, visited = order.len(), "graph breadth-first traversal");
        Ok(order)
    }

    /// Return the vertices reachable from `start`, in depth-first order.
    ///
    /// A vertex is marked visited when it is popped. Only neighbors not yet
    /// visited are pushed, but a vertex reached from several predecessors
    /// before it is popped may still sit on the stack more than once; the
    /// later copies are skipped. Neighbors are explored in the reverse of the
    /// order their edges were added.
    ///
    /// This differs from `Grid::dfs_positions`, which pushes every neighbor
    /// unexamined.
    pub fn dfs(&self, start: Node) -> Result<Vec<Node>> {
        self.check(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(vertex) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            order.push(vertex);

            stack.extend(self.adjacency[vertex].iter().filter(|&&n| !visited[n]));
        }

        debug!(start, visited = order.len(), "graph depth-first traversal");
        Ok(order)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{} ->", vertex)?;
            for neighbor in neighbors {
                write!(f, " {}", neighbor)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
