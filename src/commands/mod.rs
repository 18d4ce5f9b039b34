//! Command implementations for the printdevdag CLI
//!
//! - print: print a device graph snapshot as an aligned table
//! - schema: print the effective table layout as TOML

pub mod print;
pub mod schema;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Print { .. } => print::execute_print_command(command),
        Commands::Schema { .. } => schema::execute_schema_command(command),
    }
}
