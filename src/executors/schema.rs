//! Schema command executor

use std::io::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::common::open_output;
use crate::config::{PrintConfig, SchemaOptions};
use crate::executors::CommandExecutor;

pub struct SchemaExecutor;

impl CommandExecutor for SchemaExecutor {
    type Config = SchemaOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let layout = match &config.layout {
            Some(path) => PrintConfig::load(path).wrap_err("Failed to load table layout")?,
            None => PrintConfig::default(),
        };

        let schema = layout
            .to_toml_string()
            .wrap_err("Failed to serialize table layout")?;

        let mut output_writer = open_output(config.output.as_ref())
            .wrap_err("Failed to open schema output")?;
        output_writer
            .write_all(schema.as_bytes())
            .into_diagnostic()
            .wrap_err("Failed to write table layout")?;
        output_writer.flush().into_diagnostic()?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Layout written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
