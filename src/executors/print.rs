//! Print command executor

use console::style;
use log::debug;
use miette::{Result, WrapErr};

use crate::common::open_output;
use crate::config::PrintOptions;
use crate::executors::CommandExecutor;
use crate::graph::DeviceGraphBuilder;
use crate::print::GraphPrinter;
use crate::utils::string::counted;

pub struct PrintExecutor;

impl CommandExecutor for PrintExecutor {
    type Config = PrintOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let layout = config
            .print_config()
            .wrap_err("Failed to load table layout")?;

        let graph = DeviceGraphBuilder::load(&config.graph).wrap_err_with(|| {
            format!("Failed to load device graph '{}'", config.graph.display())
        })?;
        debug!(
            "Loaded {} with {} devices",
            config.graph.display(),
            graph.node_count()
        );

        let mut output_writer =
            open_output(config.output.as_ref()).wrap_err("Failed to create output file")?;

        let printer = GraphPrinter::new(layout);
        let written = printer
            .print_graph(&graph, config.mode, output_writer.as_mut())
            .wrap_err_with(|| format!("Failed to print graph in {} order", config.mode))?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} {} for {} written to {}",
                style("✓").green(),
                counted(written, "line"),
                counted(graph.node_count(), "device"),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
