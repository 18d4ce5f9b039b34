//! Common functionality shared across commands

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Args;

use crate::error::PrintDagError;

/// Table layout arguments
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// TOML layout file (built-in device layout if not specified)
    #[arg(short, long = "config", value_name = "FILE", env = "PRINTDEVDAG_LAYOUT")]
    pub config: Option<PathBuf>,
}

/// Output destination arguments
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE", env = "PRINTDEVDAG_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// A buffered file writer for `path`, or stdout
pub fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn io::Write>, PrintDagError> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    })
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, PrintDagError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, PrintDagError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::PrintDagError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
