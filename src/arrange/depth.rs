use log::debug;
use petgraph::graph::NodeIndex;

use super::{ArrangementConfig, GraphLineInfo, Row};

/// Depth-first arrangement: an indented tree
///
/// Every root-to-node path yields its own row, so a node with two parents is
/// listed under both.
pub struct DepthFirst;

impl DepthFirst {
    /// `(depth, node)` pairs in pre-order, roots at depth 0
    pub fn nodes(
        config: &ArrangementConfig<'_>,
        info: &GraphLineInfo<'_>,
    ) -> Vec<(usize, NodeIndex)> {
        let graph = info.graph();
        let roots = config.sorted(info, graph.roots());

        let mut stack: Vec<(usize, NodeIndex)> =
            roots.into_iter().rev().map(|root| (0, root)).collect();
        let mut visited = Vec::new();

        while let Some((depth, node)) = stack.pop() {
            visited.push((depth, node));
            let children = config.sorted(info, graph.successors(node));
            stack.extend(children.into_iter().rev().map(|child| (depth + 1, child)));
        }

        debug!(
            "Depth-first traversal produced {} rows for {} nodes",
            visited.len(),
            graph.node_count()
        );
        visited
    }

    pub fn node_strings_from_graph(
        config: &ArrangementConfig<'_>,
        info: &GraphLineInfo<'_>,
    ) -> Vec<(usize, Row)> {
        Self::nodes(config, info)
            .into_iter()
            .map(|(depth, node)| (depth, info.info(node, None, config.conversion)))
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

    fn names(graph: &DeviceGraph) -> Vec<(usize, String)> {
        let info = line_info(graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");
        DepthFirst::node_strings_from_graph(&config, &info)
            .into_iter()
            .map(|(depth, row)| (depth, row["NAME"].clone().unwrap_or_default()))
            .collect()
    }

    #[test]
    fn test_shared_child_listed_under_each_root() {
        let (graph, [a, b, c]) = shared_child();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        let nodes = DepthFirst::nodes(&config, &info);

        assert_eq!(nodes, vec![(0, a), (1, c), (0, b), (1, c)]);
    }

    #[test]
    fn test_storage_stack_tree_order() {
        let graph = storage_stack();

        assert_eq!(
            names(&graph),
            vec![
                (0, "sda".to_string()),
                (1, "sda1".to_string()),
                (1, "sda2".to_string()),
                (2, "vg-data".to_string()),
                (0, "sdb".to_string()),
                (1, "sdb1".to_string()),
                (2, "vg-data".to_string()),
            ]
        );
    }

    #[test]
    fn test_every_node_visited() {
        let graph = storage_stack();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        let mut seen: Vec<_> = DepthFirst::nodes(&config, &info)
            .into_iter()
            .map(|(_, node)| node)
            .collect();
        seen.sort();
        seen.dedup();

        assert_eq!(seen.len(), graph.node_count());
    }

    #[test]
    fn test_absent_sort_value_sorts_first() {
        let (graph, [r, a, b]) = mixed_sizes();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "SIZE");

        assert_eq!(
            DepthFirst::nodes(&config, &info),
            vec![(0, r), (1, b), (1, a)]
        );
    }

    #[test]
    fn test_empty_graph() {
        assert!(names(&DeviceGraph::default()).is_empty());
    }
}
