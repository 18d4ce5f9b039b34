use std::collections::BTreeSet;
use std::fmt;

use log::debug;
use petgraph::graph::NodeIndex;
use serde::Serialize;

use super::{ArrangementConfig, BreadthFirst, GraphLineInfo, Row};
use crate::constants::columns;
use crate::graph::DeviceNode;
use crate::resolve::Resolver;
use crate::utils::keys::sort_key;

/// Structural role of a node: node type, device type, device-mapper subsystem
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Designator {
    pub node_type: Option<String>,
    pub device_type: Option<String>,
    pub subsystem: Option<String>,
}

impl Designator {
    pub fn resolve(resolver: &Resolver, node: &DeviceNode) -> Self {
        let part = |name: &str| resolver.resolve(node, name).map(|value| value.to_string());
        Self {
            node_type: part(columns::NODETYPE),
            device_type: part(columns::DEVTYPE),
            subsystem: part(columns::DM_SUBSYSTEM),
        }
    }

    /// Component-wise sort key; absent parts sort first
    pub fn sort_key(&self) -> (String, String, String) {
        (
            sort_key(self.node_type.as_deref()),
            sort_key(self.device_type.as_deref()),
            sort_key(self.subsystem.as_deref()),
        )
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{}/{}/{}",
            part(&self.node_type),
            part(&self.device_type),
            part(&self.subsystem)
        )
    }
}

/// Layered arrangement: rows grouped by [`Designator`], regardless of depth
pub struct Layers;

impl Layers {
    /// Nodes grouped by designator, designators ascending
    pub fn nodes(
        config: &ArrangementConfig<'_>,
        info: &GraphLineInfo<'_>,
    ) -> Vec<(Designator, Vec<NodeIndex>)> {
        let graph = info.graph();
        let resolver = Resolver::designator();

        let entries: BTreeSet<(Designator, NodeIndex)> = BreadthFirst::nodes(config, info)
            .into_iter()
            .map(|(_, node)| (Designator::resolve(&resolver, graph.node(node)), node))
            .collect();

        let mut entries: Vec<(Designator, NodeIndex)> = entries.into_iter().collect();
        entries.sort_by_cached_key(|(designator, node)| {
            (
                designator.sort_key(),
                designator.clone(),
                config.node_key(info, *node),
            )
        });

        let mut layers: Vec<(Designator, Vec<NodeIndex>)> = Vec::new();
        for (designator, node) in entries {
            match layers.last_mut() {
                Some((current, nodes)) if *current == designator => nodes.push(node),
                _ => layers.push((designator, vec![node])),
            }
        }

        debug!("Layered {} nodes into {} layers", graph.node_count(), layers.len());
        layers
    }

    pub fn node_strings_from_graph(
        config: &ArrangementConfig<'_>,
        info: &GraphLineInfo<'_>,
    ) -> Vec<(Designator, Vec<Row>)> {
        Self::nodes(config, info)
            .into_iter()
            .map(|(designator, nodes)| {
                let rows = nodes
                    .into_iter()
                    .map(|node| info.info(node, None, config.conversion))
                    .collect();
                (designator, rows)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::arrange::display_conversion;
    use crate::arrange::fixtures::{line_info, mixed_sizes, shared_child, storage_stack};
    use crate::graph::DeviceGraph;

    fn designator(node_type: &str, device_type: &str, subsystem: Option<&str>) -> Designator {
        Designator {
            node_type: Some(node_type.to_string()),
            device_type: Some(device_type.to_string()),
            subsystem: subsystem.map(str::to_string),
        }
    }

    #[test]
    fn test_storage_stack_layers() {
        let graph = storage_stack();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        let layers: Vec<(Designator, Vec<String>)> = Layers::node_strings_from_graph(&config, &info)
            .into_iter()
            .map(|(designator, rows)| {
                let names = rows
                    .into_iter()
                    .map(|row| row["NAME"].clone().unwrap_or_default())
                    .collect();
                (designator, names)
            })
            .collect();

        assert_eq!(
            layers,
            vec![
                (
                    designator("DEVICE", "disk", None),
                    vec!["sda".to_string(), "sdb".to_string()]
                ),
                (
                    designator("DEVICE", "disk", Some("LVM")),
                    vec!["vg-data".to_string()]
                ),
                (
                    designator("DEVICE", "partition", None),
                    vec!["sda1".to_string(), "sda2".to_string(), "sdb1".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_layers_are_homogeneous_and_partition_nodes() {
        let graph = storage_stack();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");
        let resolver = Resolver::designator();

        let layers = Layers::nodes(&config, &info);
        let mut seen = Vec::new();
        for (designator, nodes) in &layers {
            for &node in nodes {
                assert_eq!(&Designator::resolve(&resolver, graph.node(node)), designator);
                seen.push(node);
            }
        }
        seen.sort();
        seen.dedup();

        assert_eq!(seen.len(), graph.node_count());
        assert_eq!(
            layers.iter().map(|(_, nodes)| nodes.len()).sum::<usize>(),
            graph.node_count()
        );
    }

    #[test]
    fn test_absent_designator_parts_sort_first() {
        let (graph, _) = shared_child();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        let layers = Layers::nodes(&config, &info);

        assert_eq!(layers.len(), 1);
        assert_eq!(
            layers[0].0,
            Designator {
                node_type: None,
                device_type: None,
                subsystem: None,
            }
        );
        assert_eq!(layers[0].1.len(), 3);
    }

    #[test]
    fn test_absent_sort_value_sorts_first_within_layer() {
        let (graph, [r, a, b]) = mixed_sizes();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "SIZE");

        let layers = Layers::nodes(&config, &info);

        // r and b both lack SIZE and tie-break by identifier
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].1, vec![b, r, a]);
    }

    #[test]
    fn test_designator_display() {
        assert_eq!(
            designator("DEVICE", "disk", Some("LVM")).to_string(),
            "DEVICE/disk/LVM"
        );
        assert_eq!(
            designator("DEVICE", "partition", None).to_string(),
            "DEVICE/partition/-"
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = DeviceGraph::default();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        assert!(Layers::nodes(&config, &info).is_empty());
    }
}
