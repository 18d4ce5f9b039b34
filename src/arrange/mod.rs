//! # Line Arrangement Module
//!
//! Decides which nodes become rows, in what order, and how rows are grouped,
//! for each traversal mode:
//!
//! - [`DepthFirst`]: `(depth, row)` pairs in tree order
//! - [`BreadthFirst`]: rows grouped by shortest distance from a root
//! - [`Layers`]: rows grouped by [`Designator`] (node type, device type and
//!   device-mapper subsystem)
//!
//! Siblings, levels and layers are ordered by the sort key of a configured
//! column, then by node identifier, so output is stable across runs.
//!
//! ## Shared descendants
//!
//! A device reachable along several paths (a logical volume spanning two
//! partitions, say) is printed once per path by [`DepthFirst`], under every
//! parent, like a directory tree. [`BreadthFirst`] and [`Layers`] print each
//! device exactly once. This difference is intentional.

mod breadth;
mod depth;
mod info;
mod layers;

pub use breadth::BreadthFirst;
pub use depth::DepthFirst;
pub use info::{Conversion, GraphLineInfo, Row, display_conversion};
pub use layers::{Designator, Layers};
use petgraph::graph::NodeIndex;

use crate::utils::keys::sort_key;

/// Settings shared by every arrangement
#[derive(Debug, Clone, Copy)]
pub struct ArrangementConfig<'a> {
    pub conversion: Conversion,
    pub sort_key: &'a str,
}

impl<'a> ArrangementConfig<'a> {
    pub fn new(conversion: Conversion, sort_key: &'a str) -> Self {
        Self {
            conversion,
            sort_key,
        }
    }

    /// Ordering key of a node: sort column, identifier, index
    pub fn node_key(
        &self,
        info: &GraphLineInfo<'_>,
        node: NodeIndex,
    ) -> (String, String, NodeIndex) {
        let value = info.value(node, self.sort_key);
        (
            sort_key(value.as_ref()),
            info.graph().node(node).identifier().to_string(),
            node,
        )
    }

    pub(crate) fn sorted(
        &self,
        info: &GraphLineInfo<'_>,
        mut nodes: Vec<NodeIndex>,
    ) -> Vec<NodeIndex> {
        nodes.sort_by_cached_key(|&node| self.node_key(info, node));
        nodes
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small device graphs shared by the arrangement tests

    use std::collections::BTreeMap;

    use petgraph::graph::{DiGraph, NodeIndex};

    use super::GraphLineInfo;
    use crate::common::ConfigBuilder;
    use crate::graph::{DeviceGraph, DeviceNode};
    use crate::resolve::{NodeGetter, Resolver};

    pub fn node(identifier: &str, attributes: &[(&str, &str)]) -> DeviceNode {
        attributes
            .iter()
            .fold(
                DeviceNode::builder().with_identifier(identifier),
                |builder, (key, value)| builder.with_attribute(key, *value),
            )
            .build()
            .unwrap()
    }

    /// Two roots sharing one child: A -> C, B -> C
    pub fn shared_child() -> (DeviceGraph, [NodeIndex; 3]) {
        let mut graph = DiGraph::new();
        let a = graph.add_node(node("A", &[]));
        let b = graph.add_node(node("B", &[]));
        let c = graph.add_node(node("C", &[]));
        graph.add_edge(a, c, ());
        graph.add_edge(b, c, ());
        (DeviceGraph::from(graph), [a, b, c])
    }

    /// Root r with children a (SIZE 5) and b (no SIZE)
    pub fn mixed_sizes() -> (DeviceGraph, [NodeIndex; 3]) {
        let mut graph = DiGraph::new();
        let r = graph.add_node(node("r", &[]));
        let a = graph.add_node(node("a", &[("SIZE", "5")]));
        let b = graph.add_node(node("b", &[]));
        graph.add_edge(r, a, ());
        graph.add_edge(r, b, ());
        (DeviceGraph::from(graph), [r, a, b])
    }

    /// sda -> {sda1, sda2}, sdb -> sdb1, {sda2, sdb1} -> vg-data (LVM)
    pub fn storage_stack() -> DeviceGraph {
        let mut graph = DiGraph::new();
        let disk = |id: &str| {
            node(
                id,
                &[("NODETYPE", "DEVICE"), ("DEVTYPE", "disk"), ("SYSNAME", id)],
            )
        };
        let part = |id: &str| {
            node(
                id,
                &[("NODETYPE", "DEVICE"), ("DEVTYPE", "partition"), ("SYSNAME", id)],
            )
        };

        let sdb = graph.add_node(disk("sdb"));
        let sda = graph.add_node(disk("sda"));
        let sda2 = graph.add_node(part("sda2"));
        let sda1 = graph.add_node(part("sda1"));
        let sdb1 = graph.add_node(part("sdb1"));
        let lv = graph.add_node(node(
            "dm-0",
            &[
                ("NODETYPE", "DEVICE"),
                ("DEVTYPE", "disk"),
                ("DM_NAME", "vg-data"),
                ("DM_UUID", "LVM-abcdef"),
            ],
        ));

        graph.add_edge(sda, sda1, ());
        graph.add_edge(sda, sda2, ());
        graph.add_edge(sdb, sdb1, ());
        graph.add_edge(sda2, lv, ());
        graph.add_edge(sdb1, lv, ());
        DeviceGraph::from(graph)
    }

    pub fn line_info(graph: &DeviceGraph) -> GraphLineInfo<'_> {
        GraphLineInfo::new(
            graph,
            vec!["NAME".to_string()],
            BTreeMap::new(),
            Resolver::device_default().with_cascade(
                "NAME",
                vec![NodeGetter::DmName, NodeGetter::SysName, NodeGetter::Identifier],
            ),
        )
    }
}
