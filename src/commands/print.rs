//! Print command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PrintOptions;
use crate::error::PrintDagError;

impl FromCommand for PrintOptions {
    fn from_command(command: Commands) -> Result<Self, PrintDagError> {
        match command {
            Commands::Print {
                graph,
                mode,
                layout,
                sort_key,
                output,
                no_header,
            } => PrintOptions::builder()
                .with_graph(graph)
                .with_mode(mode)
                .with_layout(layout.config)
                .with_sort_key(sort_key)
                .with_output(output.output)
                .with_no_header(no_header)
                .build(),
            _ => Err(PrintDagError::ConfigurationError {
                message: "Invalid command type for PrintOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PrintOptions);

/// Execute the print command
pub fn execute_print_command(command: Commands) -> Result<()> {
    let config = PrintOptions::from_command(command)
        .wrap_err("Failed to parse print command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::print::PrintExecutor;
    PrintExecutor::execute(config)
}
