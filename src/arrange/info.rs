use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;

use crate::graph::{AttrValue, DeviceGraph};
use crate::print::Justification;
use crate::resolve::Resolver;

/// Display values for one node, keyed by column name
///
/// `None` marks a value no getter could find; it stays distinct from an
/// empty string until the row is projected onto columns.
pub type Row = BTreeMap<String, Option<String>>;

/// Converts a resolved value of a column into its display string
pub type Conversion = fn(&str, &AttrValue) -> String;

/// The plain `Display` form of every value
pub fn display_conversion(_column: &str, value: &AttrValue) -> String {
    value.to_string()
}

/// Everything needed to turn graph nodes into rows for one render
pub struct GraphLineInfo<'g> {
    graph: &'g DeviceGraph,
    keys: Vec<String>,
    alignment: BTreeMap<String, Justification>,
    resolver: Resolver,
}

impl<'g> GraphLineInfo<'g> {
    /// Columns missing from `alignment` are left-justified
    pub fn new(
        graph: &'g DeviceGraph,
        keys: Vec<String>,
        mut alignment: BTreeMap<String, Justification>,
        resolver: Resolver,
    ) -> Self {
        for key in &keys {
            alignment.entry(key.clone()).or_default();
        }
        Self {
            graph,
            keys,
            alignment,
            resolver,
        }
    }

    pub fn graph(&self) -> &'g DeviceGraph {
        self.graph
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn justification(&self, key: &str) -> Justification {
        self.alignment.get(key).copied().unwrap_or_default()
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Resolve a single raw value
    pub fn value(&self, node: NodeIndex, key: &str) -> Option<AttrValue> {
        self.resolver.resolve(self.graph.node(node), key)
    }

    /// Build a row for `node` over `keys`, or over every column when `None`
    pub fn info(&self, node: NodeIndex, keys: Option<&[String]>, conversion: Conversion) -> Row {
        keys.unwrap_or(&self.keys)
            .iter()
            .map(|key| {
                let value = self.value(node, key).map(|value| conversion(key, &value));
                (key.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use petgraph::graph::DiGraph;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::DeviceNode;

    fn single_node_graph() -> (DeviceGraph, NodeIndex) {
        let mut graph = DiGraph::new();
        let sda = graph.add_node(
            DeviceNode::builder()
                .with_identifier("sda")
                .with_attribute("DEVNAME", "/dev/sda")
                .with_attribute("SIZE", 2048_i64)
                .build()
                .unwrap(),
        );
        (DeviceGraph::from(graph), sda)
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_info_resolves_all_columns() {
        let (graph, sda) = single_node_graph();
        let info = GraphLineInfo::new(
            &graph,
            keys(&["NAME", "SIZE", "DEVTYPE"]),
            BTreeMap::new(),
            Resolver::device_default(),
        );

        let row = info.info(sda, None, display_conversion);

        assert_eq!(row["NAME"].as_deref(), Some("/dev/sda"));
        assert_eq!(row["SIZE"].as_deref(), Some("2048"));
        assert_eq!(row["DEVTYPE"], None);
    }

    #[test]
    fn test_info_subset_and_conversion() {
        let (graph, sda) = single_node_graph();
        let info = GraphLineInfo::new(
            &graph,
            keys(&["NAME", "SIZE"]),
            BTreeMap::new(),
            Resolver::device_default(),
        );

        fn shout(_column: &str, value: &AttrValue) -> String {
            value.to_string().to_uppercase()
        }

        let subset = keys(&["NAME"]);
        let row = info.info(sda, Some(subset.as_slice()), shout);

        assert_eq!(row.len(), 1);
        assert_eq!(row["NAME"].as_deref(), Some("/DEV/SDA"));
    }

    #[test]
    fn test_alignment_defaults_to_left() {
        let (graph, _) = single_node_graph();
        let alignment = [("SIZE".to_string(), Justification::Right)].into();
        let info = GraphLineInfo::new(
            &graph,
            keys(&["NAME", "SIZE"]),
            alignment,
            Resolver::device_default(),
        );

        assert_eq!(info.justification("NAME"), Justification::Left);
        assert_eq!(info.justification("SIZE"), Justification::Right);
        assert_eq!(info.justification("UNKNOWN"), Justification::Left);
    }
}
