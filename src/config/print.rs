//! Print command configuration

use std::path::PathBuf;

use crate::config::PrintConfig;
use crate::error::PrintDagError;
use crate::print::TraversalMode;

#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub graph: PathBuf,
    pub mode: TraversalMode,
    pub layout: Option<PathBuf>,
    pub sort_key: Option<String>,
    pub output: Option<PathBuf>,
    pub no_header: bool,
}

impl PrintOptions {
    pub fn builder() -> PrintOptionsBuilder {
        PrintOptionsBuilder::new()
    }

    /// The layout file (or the default layout) with command-line overrides
    /// applied
    pub fn print_config(&self) -> Result<PrintConfig, PrintDagError> {
        let mut config = match &self.layout {
            Some(path) => PrintConfig::load(path)?,
            None => PrintConfig::default(),
        };

        if let Some(sort_key) = &self.sort_key {
            config.sort_key = sort_key.clone();
        }
        if self.no_header {
            config.show_header = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Default)]
pub struct PrintOptionsBuilder {
    graph: Option<PathBuf>,
    mode: Option<TraversalMode>,
    layout: Option<Option<PathBuf>>,
    sort_key: Option<Option<String>>,
    output: Option<Option<PathBuf>>,
    no_header: Option<bool>,
}

impl PrintOptionsBuilder {
    pub fn new() -> Self {
        Self {
            graph: None,
            mode: None,
            layout: None,
            sort_key: None,
            output: None,
            no_header: None,
        }
    }

    pub fn with_graph(mut self, graph: PathBuf) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn with_mode(mut self, mode: TraversalMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_layout(mut self, layout: Option<PathBuf>) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_sort_key(mut self, sort_key: Option<String>) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = Some(no_header);
        self
    }
}

impl crate::common::ConfigBuilder for PrintOptionsBuilder {
    type Config = PrintOptions;

    fn build(self) -> Result<Self::Config, PrintDagError> {
        Ok(PrintOptions {
            graph: self
                .graph
                .ok_or_else(|| PrintDagError::ConfigurationError {
                    message: "Missing required field: graph".to_string(),
                })?,
            mode: self.mode.ok_or_else(|| PrintDagError::ConfigurationError {
                message: "Missing required field: mode".to_string(),
            })?,
            layout: self.layout.ok_or_else(|| PrintDagError::ConfigurationError {
                message: "Missing required field: layout".to_string(),
            })?,
            sort_key: self
                .sort_key
                .ok_or_else(|| PrintDagError::ConfigurationError {
                    message: "Missing required field: sort_key".to_string(),
                })?,
            output: self.output.ok_or_else(|| PrintDagError::ConfigurationError {
                message: "Missing required field: output".to_string(),
            })?,
            no_header: self
                .no_header
                .ok_or_else(|| PrintDagError::ConfigurationError {
                    message: "Missing required field: no_header".to_string(),
                })?,
        })
    }
}
