use std::io::Write;

use log::info;

use super::table::{Justification, TableFormatter};
use super::xform::{project_rows, project_tree};
use super::TraversalMode;
use crate::arrange::{
    ArrangementConfig, BreadthFirst, DepthFirst, GraphLineInfo, Layers, display_conversion,
};
use crate::config::PrintConfig;
use crate::error::PrintDagError;
use crate::graph::DeviceGraph;

/// Prints a device graph as an aligned table
///
/// Depth-first output indents the first column by tree depth. Breadth-first
/// and layered output list their groups one after another in a single table,
/// so columns line up across groups.
pub struct GraphPrinter {
    config: PrintConfig,
}

impl GraphPrinter {
    pub fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    pub fn line_info<'g>(&self, graph: &'g DeviceGraph) -> GraphLineInfo<'g> {
        GraphLineInfo::new(
            graph,
            self.config.column_names(),
            self.config.alignment(),
            self.config.resolver(),
        )
    }

    /// Formatted lines for `graph`, header first
    ///
    /// Fails before producing any line when the graph contains a cycle.
    pub fn lines(
        &self,
        graph: &DeviceGraph,
        mode: TraversalMode,
    ) -> Result<Vec<String>, PrintDagError> {
        if graph.is_cyclic() {
            return Err(PrintDagError::MalformedGraph {
                message: "the graph contains a cycle".to_string(),
            });
        }

        let info = self.line_info(graph);
        let lines = match mode {
            TraversalMode::DepthFirst => self.depth_first(&info),
            TraversalMode::BreadthFirst => self.breadth_first(&info),
            TraversalMode::Layers => self.layers(&info),
        };
        Ok(lines)
    }

    pub fn depth_first(&self, info: &GraphLineInfo<'_>) -> Vec<String> {
        let rows = DepthFirst::node_strings_from_graph(&self.arrangement(), info);
        let cells = project_tree(
            info.keys(),
            &rows,
            self.config.indent,
            &self.config.placeholder,
        );
        self.format(info, &cells)
    }

    pub fn breadth_first(&self, info: &GraphLineInfo<'_>) -> Vec<String> {
        let levels = BreadthFirst::node_strings_from_graph(&self.arrangement(), info);
        let cells = project_rows(
            info.keys(),
            levels.iter().flat_map(|(_, rows)| rows),
            &self.config.placeholder,
        );
        self.format(info, &cells)
    }

    pub fn layers(&self, info: &GraphLineInfo<'_>) -> Vec<String> {
        let layers = Layers::node_strings_from_graph(&self.arrangement(), info);
        let cells = project_rows(
            info.keys(),
            layers.iter().flat_map(|(_, rows)| rows),
            &self.config.placeholder,
        );
        self.format(info, &cells)
    }

    /// Write every line to `output`; returns the number of lines written
    pub fn print_graph(
        &self,
        graph: &DeviceGraph,
        mode: TraversalMode,
        output: &mut dyn Write,
    ) -> Result<usize, PrintDagError> {
        let lines = self.lines(graph, mode)?;
        for line in &lines {
            writeln!(output, "{line}")?;
        }
        output.flush()?;

        info!(
            "Printed {} lines for {} nodes in {mode} order",
            lines.len(),
            graph.node_count()
        );
        Ok(lines.len())
    }

    fn arrangement(&self) -> ArrangementConfig<'_> {
        ArrangementConfig::new(display_conversion, &self.config.sort_key)
    }

    fn format(&self, info: &GraphLineInfo<'_>, cells: &[Vec<String>]) -> Vec<String> {
        let justification: Vec<Justification> = info
            .keys()
            .iter()
            .map(|key| info.justification(key))
            .collect();

        TableFormatter::new(self.config.gutter)
            .with_header(self.config.show_header)
            .lines(&self.config.header_labels(), &justification, cells)
    }
}
