//! # Device Graph Module
//!
//! The read-only device graph that every traversal walks, and the builder
//! that turns a JSON snapshot into one.
//!
//! ## Components
//!
//! - **DeviceNode**: a device identifier plus its raw attribute mapping
//! - **DeviceGraph**: petgraph-backed DAG exposing roots and successors
//! - **DeviceGraphBuilder**: validates and assembles a graph from nodes and
//!   edges, or from a [`GraphSnapshot`]
//!
//! ## Example
//!
//! ```
//! use printdevdag::graph::DeviceGraphBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = DeviceGraphBuilder::from_json_str(
//!     r#"{
//!         "nodes": [
//!             {"identifier": "sda", "attributes": {"DEVNAME": "/dev/sda"}},
//!             {"identifier": "sda1", "attributes": {"DEVNAME": "/dev/sda1"}}
//!         ],
//!         "edges": [["sda", "sda1"]]
//!     }"#,
//! )?;
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.roots().len(), 1);
//! # Ok(())
//! # }
//! ```

mod builder;
mod types;

pub use builder::{DeviceGraphBuilder, GraphSnapshot};
pub use types::{AttrValue, DeviceGraph, DeviceNode, DeviceNodeBuilder};
