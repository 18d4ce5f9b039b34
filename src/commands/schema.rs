//! Schema command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SchemaOptions;
use crate::error::PrintDagError;

impl FromCommand for SchemaOptions {
    fn from_command(command: Commands) -> Result<Self, PrintDagError> {
        match command {
            Commands::Schema { layout, output } => SchemaOptions::builder()
                .with_layout(layout.config)
                .with_output(output.output)
                .build(),
            _ => Err(PrintDagError::ConfigurationError {
                message: "Invalid command type for SchemaOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SchemaOptions);

/// Execute the schema command
pub fn execute_schema_command(command: Commands) -> Result<()> {
    let config = SchemaOptions::from_command(command)
        .wrap_err("Failed to parse schema command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::schema::SchemaExecutor;
    SchemaExecutor::execute(config)
}
