use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::{VisitMap, Visitable};

use super::{ArrangementConfig, GraphLineInfo, Row};

/// Breadth-first arrangement: rows grouped by distance from the roots
pub struct BreadthFirst;

impl BreadthFirst {
    /// `(level, node)` pairs, each node once at its shortest distance from
    /// any root
    ///
    /// Levels ascend; nodes within a level follow the sort column.
    pub fn nodes(
        config: &ArrangementConfig<'_>,
        info: &GraphLineInfo<'_>,
    ) -> Vec<(usize, NodeIndex)> {
        let graph = info.graph();
        let mut discovered = graph.graph().visit_map();

        let mut frontier = config.sorted(info, graph.roots());
        for &root in &frontier {
            discovered.visit(root);
        }

        let mut visited = Vec::with_capacity(graph.node_count());
        let mut level = 0;
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &node in &frontier {
                visited.push((level, node));
                next.extend(
                    graph
                        .successors(node)
                        .into_iter()
                        .filter(|&successor| discovered.visit(successor)),
                );
            }
            frontier = config.sorted(info, next);
            level += 1;
        }

        debug!(
            "Breadth-first traversal reached {} nodes in {} levels",
            visited.len(),
            level
        );
        visited
    }

    pub fn node_strings_from_graph(
        config: &ArrangementConfig<'_>,
        info: &GraphLineInfo<'_>,
    ) -> Vec<(usize, Vec<Row>)> {
        let mut levels: Vec<(usize, Vec<Row>)> = Vec::new();
        for (level, node) in Self::nodes(config, info) {
            let row = info.info(node, None, config.conversion);
            match levels.last_mut() {
                Some((current, rows)) if *current == level => rows.push(row),
                _ => levels.push((level, vec![row])),
            }
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::arrange::display_conversion;
    use crate::arrange::fixtures::{line_info, mixed_sizes, shared_child, storage_stack};
    use crate::graph::DeviceGraph;

    #[test]
    fn test_shared_child_placed_once() {
        let (graph, [a, b, c]) = shared_child();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        assert_eq!(
            BreadthFirst::nodes(&config, &info),
            vec![(0, a), (0, b), (1, c)]
        );

        let levels = BreadthFirst::node_strings_from_graph(&config, &info);
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].0, 1);
        assert_eq!(levels[1].1.len(), 1);
        assert_eq!(levels[1].1[0]["NAME"].as_deref(), Some("C"));
    }

    #[test]
    fn test_levels_are_shortest_distances() {
        let graph = storage_stack();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        let levels: Vec<(usize, Vec<String>)> =
            BreadthFirst::node_strings_from_graph(&config, &info)
                .into_iter()
                .map(|(level, rows)| {
                    let names = rows
                        .into_iter()
                        .map(|row| row["NAME"].clone().unwrap_or_default())
                        .collect();
                    (level, names)
                })
                .collect();

        assert_eq!(
            levels,
            vec![
                (0, vec!["sda".to_string(), "sdb".to_string()]),
                (
                    1,
                    vec!["sda1".to_string(), "sda2".to_string(), "sdb1".to_string()]
                ),
                (2, vec!["vg-data".to_string()]),
            ]
        );
    }

    #[test]
    fn test_levels_non_decreasing_and_nodes_unique() {
        let graph = storage_stack();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        let nodes = BreadthFirst::nodes(&config, &info);
        assert!(nodes.windows(2).all(|pair| pair[0].0 <= pair[1].0));

        let mut seen: Vec<_> = nodes.iter().map(|(_, node)| *node).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), nodes.len());
        assert_eq!(seen.len(), graph.node_count());
    }

    #[test]
    fn test_absent_sort_value_sorts_first() {
        let (graph, [r, a, b]) = mixed_sizes();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "SIZE");

        assert_eq!(
            BreadthFirst::nodes(&config, &info),
            vec![(0, r), (1, b), (1, a)]
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = DeviceGraph::default();
        let info = line_info(&graph);
        let config = ArrangementConfig::new(display_conversion, "NAME");

        assert!(BreadthFirst::node_strings_from_graph(&config, &info).is_empty());
    }
}
