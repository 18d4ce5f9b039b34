use std::collections::HashMap;
use std::path::Path;

use log::{debug, trace};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use super::types::{DeviceGraph, DeviceNode};
use crate::error::PrintDagError;

/// Serialized form of a device graph
///
/// Edges are `[from, to]` pairs of node identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<DeviceNode>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

/// Builder for device graphs
///
/// Identifiers must be unique and every edge must join two known nodes. The
/// finished graph is checked for cycles, since every traversal assumes a DAG.
#[derive(Default)]
pub struct DeviceGraphBuilder {
    graph: DiGraph<DeviceNode, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl DeviceGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Read a JSON snapshot from `path` and build the graph
    pub fn load(path: &Path) -> Result<DeviceGraph, PrintDagError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| PrintDagError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Loaded graph snapshot from {}", path.display());
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<DeviceGraph, PrintDagError> {
        let snapshot: GraphSnapshot = serde_json::from_str(contents)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<DeviceGraph, PrintDagError> {
        let mut builder = Self::new();
        for node in snapshot.nodes {
            builder.add_node(node)?;
        }
        for (from, to) in &snapshot.edges {
            builder.add_edge(from, to)?;
        }
        builder.build()
    }

    pub fn add_node(&mut self, node: DeviceNode) -> Result<NodeIndex, PrintDagError> {
        if self.node_indices.contains_key(node.identifier()) {
            return Err(PrintDagError::GraphError {
                message: format!("Duplicate node identifier '{}'", node.identifier()),
            });
        }

        let identifier = node.identifier().to_string();
        let index = self.graph.add_node(node);
        trace!("Added node '{identifier}' at {index:?}");
        self.node_indices.insert(identifier, index);
        Ok(index)
    }

    /// Add an edge between two known nodes; repeated edges are collapsed
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), PrintDagError> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;

        if self.graph.find_edge(from_index, to_index).is_none() {
            self.graph.add_edge(from_index, to_index, ());
        }
        Ok(())
    }

    pub fn build(self) -> Result<DeviceGraph, PrintDagError> {
        if let Err(cycle) = petgraph::algo::toposort(&self.graph, None) {
            return Err(PrintDagError::MalformedGraph {
                message: format!(
                    "cycle through '{}'",
                    self.graph[cycle.node_id()].identifier()
                ),
            });
        }

        debug!(
            "Built device graph with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        Ok(DeviceGraph::from(self.graph))
    }

    fn index_of(&self, identifier: &str) -> Result<NodeIndex, PrintDagError> {
        self.node_indices
            .get(identifier)
            .copied()
            .ok_or_else(|| PrintDagError::GraphError {
                message: format!("Edge refers to unknown node '{identifier}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::resolve::Resolver;

    const SNAPSHOT: &str = r#"{
        "nodes": [
            {"identifier": "sda", "attributes": {"DEVNAME": "/dev/sda", "SIZE": 1000}},
            {"identifier": "sda1", "attributes": {"DEVNAME": "/dev/sda1"}},
            {"identifier": "sda2"}
        ],
        "edges": [["sda", "sda1"], ["sda", "sda2"], ["sda", "sda1"]]
    }"#;

    #[test]
    fn test_from_json_str() {
        let graph = DeviceGraphBuilder::from_json_str(SNAPSHOT).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.graph().edge_count(), 2);
        assert_eq!(graph.roots().len(), 1);
    }

    #[test]
    fn test_null_attribute_is_absent() {
        let snapshot = r#"{
            "nodes": [
                {"identifier": "sda", "attributes": {"DM_NAME": null, "DEVNAME": "/dev/sda"}}
            ]
        }"#;
        let graph = DeviceGraphBuilder::from_json_str(snapshot).unwrap();
        let sda = graph.roots()[0];

        assert_eq!(graph.node(sda).attribute("DM_NAME"), None);
        assert_eq!(
            Resolver::device_default()
                .resolve(graph.node(sda), "NAME")
                .map(|value| value.to_string()),
            Some("/dev/sda".to_string())
        );
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let snapshot = r#"{"nodes": [{"identifier": "sda"}, {"identifier": "sda"}]}"#;
        let err = DeviceGraphBuilder::from_json_str(snapshot).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Graph error: Duplicate node identifier 'sda'"
        );
    }

    #[test]
    fn test_unknown_edge_endpoint_rejected() {
        let snapshot = r#"{"nodes": [{"identifier": "sda"}], "edges": [["sda", "sdz"]]}"#;
        let err = DeviceGraphBuilder::from_json_str(snapshot).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Graph error: Edge refers to unknown node 'sdz'"
        );
    }

    #[test]
    fn test_cycle_rejected() {
        let snapshot = r#"{
            "nodes": [{"identifier": "a"}, {"identifier": "b"}],
            "edges": [["a", "b"], ["b", "a"]]
        }"#;
        let err = DeviceGraphBuilder::from_json_str(snapshot).unwrap_err();

        assert!(matches!(err, PrintDagError::MalformedGraph { .. }));
    }

    #[test]
    fn test_empty_snapshot() {
        let graph = DeviceGraphBuilder::from_json_str("{}").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let graph = DeviceGraphBuilder::load(file.path()).unwrap();
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = DeviceGraphBuilder::load(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(matches!(err, PrintDagError::FileReadError { .. }));
    }
}
