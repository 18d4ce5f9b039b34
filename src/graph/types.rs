//! Core graph types
//!
//! This module contains the data structures the printer reads: device nodes
//! with their raw attributes, and the read-only graph wrapping them.

use std::collections::BTreeMap;
use std::fmt;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PrintDagError;

/// A raw attribute value as reported by the device database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(value) => write!(f, "{value}"),
            AttrValue::Integer(value) => write!(f, "{value}"),
            AttrValue::Float(value) => write!(f, "{value}"),
            AttrValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Integer(value)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Integer(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

/// A block device (or other storage entity) in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceNode {
    pub identifier: String,
    #[serde(default, deserialize_with = "skip_null_attributes")]
    pub attributes: BTreeMap<String, AttrValue>,
}

/// Drop attributes recorded as `null`; they are absent, not malformed
fn skip_null_attributes<'de, D>(deserializer: D) -> Result<BTreeMap<String, AttrValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let attributes = BTreeMap::<String, Option<AttrValue>>::deserialize(deserializer)?;
    Ok(attributes
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}

impl DeviceNode {
    pub fn builder() -> DeviceNodeBuilder {
        DeviceNodeBuilder::new()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Look up a raw attribute; a missing key is simply `None`
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }
}

#[derive(Default)]
pub struct DeviceNodeBuilder {
    identifier: Option<String>,
    attributes: BTreeMap<String, AttrValue>,
}

impl DeviceNodeBuilder {
    pub fn new() -> Self {
        Self {
            identifier: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = Some(identifier.to_string());
        self
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }
}

impl crate::common::ConfigBuilder for DeviceNodeBuilder {
    type Config = DeviceNode;

    fn build(self) -> Result<Self::Config, PrintDagError> {
        Ok(DeviceNode {
            identifier: self
                .identifier
                .ok_or_else(|| PrintDagError::ConfigurationError {
                    message: "Missing required field: identifier".to_string(),
                })?,
            attributes: self.attributes,
        })
    }
}

/// Read-only view of a device dependency graph
///
/// Edges point from a device to the devices built on top of it (a disk to its
/// partitions, a partition to the logical volumes using it).
#[derive(Debug, Clone, Default)]
pub struct DeviceGraph {
    graph: DiGraph<DeviceNode, ()>,
}

impl DeviceGraph {
    pub fn graph(&self) -> &DiGraph<DeviceNode, ()> {
        &self.graph
    }

    pub fn node(&self, index: NodeIndex) -> &DeviceNode {
        &self.graph[index]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes without incoming edges
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.graph.externals(Direction::Incoming).collect()
    }

    /// Distinct successors of `index`, in index order
    pub fn successors(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .collect();
        successors.sort();
        successors.dedup();
        successors
    }

    pub fn is_cyclic(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.graph)
    }
}

impl From<DiGraph<DeviceNode, ()>> for DeviceGraph {
    fn from(graph: DiGraph<DeviceNode, ()>) -> Self {
        Self { graph }
    }
}
