//! Schema command configuration

use std::path::PathBuf;

use crate::error::PrintDagError;

#[derive(Debug, Clone)]
pub struct SchemaOptions {
    pub layout: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl SchemaOptions {
    pub fn builder() -> SchemaOptionsBuilder {
        SchemaOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct SchemaOptionsBuilder {
    layout: Option<Option<PathBuf>>,
    output: Option<Option<PathBuf>>,
}

impl SchemaOptionsBuilder {
    pub fn new() -> Self {
        Self {
            layout: None,
            output: None,
        }
    }

    pub fn with_layout(mut self, layout: Option<PathBuf>) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for SchemaOptionsBuilder {
    type Config = SchemaOptions;

    fn build(self) -> Result<Self::Config, PrintDagError> {
        Ok(SchemaOptions {
            layout: self.layout.ok_or_else(|| PrintDagError::ConfigurationError {
                message: "Missing required field: layout".to_string(),
            })?,
            output: self.output.ok_or_else(|| PrintDagError::ConfigurationError {
                message: "Missing required field: output".to_string(),
            })?,
        })
    }
}
