//! # Graph Printing Module
//!
//! Turns arranged rows into aligned text.
//!
//! ## Components
//!
//! - **xform**: projects rows onto the column list, indenting tree output
//! - **TableFormatter**: pads every column to its widest cell
//! - **GraphPrinter**: runs an arrangement for a [`TraversalMode`] and writes
//!   the formatted lines
//!
//! ## Example
//!
//! ```
//! use printdevdag::config::PrintConfig;
//! use printdevdag::graph::DeviceGraphBuilder;
//! use printdevdag::print::{GraphPrinter, TraversalMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = DeviceGraphBuilder::from_json_str(
//!     r#"{
//!         "nodes": [
//!             {"identifier": "sda", "attributes": {"DEVNAME": "/dev/sda", "SIZE": 1000}},
//!             {"identifier": "sda1", "attributes": {"DEVNAME": "/dev/sda1", "SIZE": 600}}
//!         ],
//!         "edges": [["sda", "sda1"]]
//!     }"#,
//! )?;
//!
//! let printer = GraphPrinter::new(PrintConfig::default());
//! let lines = printer.lines(&graph, TraversalMode::DepthFirst)?;
//!
//! assert_eq!(lines.len(), 3);
//! assert!(lines[2].starts_with("  /dev/sda1"));
//! # Ok(())
//! # }
//! ```

mod printer;
mod table;
pub mod xform;

use std::fmt;
use std::str::FromStr;

pub use printer::GraphPrinter;
use serde::{Deserialize, Serialize};
pub use table::{Justification, TableFormatter};

use crate::error::PrintDagError;

/// Order in which the graph is walked and rows are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalMode {
    DepthFirst,
    BreadthFirst,
    Layers,
}

impl TraversalMode {
    pub fn name(self) -> &'static str {
        match self {
            TraversalMode::DepthFirst => "depth-first",
            TraversalMode::BreadthFirst => "breadth-first",
            TraversalMode::Layers => "layers",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalMode {
    type Err = PrintDagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-first" => Ok(TraversalMode::DepthFirst),
            "breadth-first" => Ok(TraversalMode::BreadthFirst),
            "layers" => Ok(TraversalMode::Layers),
            other => Err(PrintDagError::UnsupportedTraversalMode {
                mode: other.to_string(),
            }),
        }
    }
}
