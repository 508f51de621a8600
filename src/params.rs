//! Parameters for the console demonstration.

use errors::*;
use graph::{Graph, Node};
use grid::Position;

use serde_json;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Everything the demo needs to build its grid and graph and choose where to
/// start traversing them.
///
/// These can be read from JSON. Any field left out takes its value from
/// `DemoParameters::default()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoParameters {
    /// The size of the generated grid.
    pub rows: usize,
    pub cols: usize,

    /// Where to start both grid traversals, as `[row, col]`.
    pub start: Position,

    /// If present, generate the grid from a `XorShift128Plus` seeded with this
    /// value rather than from the thread's random number generator.
    pub seed: Option<u64>,

    /// The number of vertices in the graph, and its directed edges, in the
    /// order they should be added.
    pub vertices: usize,
    pub edges: Vec<(Node, Node)>,

    /// Where to start both graph traversals.
    pub graph_start: Node
}

impl Default for DemoParameters {
    fn default() -> DemoParameters {
        DemoParameters {
            rows: 5,
            cols: 5,
            start: (0, 0),
            seed: None,
            vertices: 5,
            edges: vec![(0, 2), (0, 1), (1, 2), (2, 0),
                        (2, 3), (2, 4), (3, 3), (1, 4)],
            graph_start: 0
        }
    }
}

impl DemoParameters {
    /// Read parameters from the JSON file at `path`.
    pub fn load(path: &Path) -> Result<DemoParameters> {
        let file = File::open(path)
            .chain_err(|| format!("unable to open parameters file {}", path.display()))?;
        DemoParameters::from_reader(BufReader::new(file))
            .chain_err(|| format!("unable to read parameters from {}", path.display()))
    }

    /// Read parameters as JSON from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<DemoParameters> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Construct the graph these parameters describe.
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertices);
        for &(from, to) in &self.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }
}
