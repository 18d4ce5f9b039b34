//! # printdevdag - Print Device Graphs as Aligned Tables
//!
//! printdevdag renders a directed acyclic graph of storage devices (disks,
//! partitions, device-mapper targets and whatever stacks on top of them) as
//! column-aligned text. Each row describes one device; each column shows one
//! attribute, resolved through a cascade of getters so that a device-mapper
//! target shows its `DM_NAME` while a plain partition falls back to its kernel
//! name.
//!
//! ## Main Components
//!
//! - **Graph**: the device graph and the JSON snapshot loader
//! - **Resolve**: getters and per-column getter cascades
//! - **Arrange**: depth-first, breadth-first and layered orderings of rows
//! - **Print**: projection onto columns and table formatting
//! - **Config**: the table layout and per-command options
//!
//! ## Traversal Modes
//!
//! The three modes differ in how they treat a device reachable along more
//! than one path, such as a logical volume spanning two partitions:
//!
//! - depth-first lists it under every parent, once per path
//! - breadth-first lists it once, at the level where it is first reached
//! - layers lists it once, in the group for its node type, device type and
//!   subsystem
//!
//! ## Usage
//!
//! ```
//! use printdevdag::config::PrintConfig;
//! use printdevdag::graph::DeviceGraphBuilder;
//! use printdevdag::print::{GraphPrinter, TraversalMode};
//!
//! # fn main() -> miette::Result<()> {
//! let graph = DeviceGraphBuilder::from_json_str(
//!     r#"{
//!         "nodes": [
//!             {"identifier": "sda2", "attributes": {"SYSNAME": "sda2"}},
//!             {"identifier": "sdb1", "attributes": {"SYSNAME": "sdb1"}},
//!             {"identifier": "dm-0", "attributes": {"DM_NAME": "vg-data"}}
//!         ],
//!         "edges": [["sda2", "dm-0"], ["sdb1", "dm-0"]]
//!     }"#,
//! )?;
//!
//! let printer = GraphPrinter::new(PrintConfig::default());
//! let depth_first = printer.lines(&graph, TraversalMode::DepthFirst)?;
//! let breadth_first = printer.lines(&graph, TraversalMode::BreadthFirst)?;
//!
//! // header plus sda2, vg-data, sdb1, vg-data
//! assert_eq!(depth_first.len(), 5);
//! // header plus sda2, sdb1, vg-data
//! assert_eq!(breadth_first.len(), 4);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod arrange;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod print;
pub mod resolve;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    env_logger::builder()
        .format_timestamp(None)
        .filter_level(cli.verbosity)
        .init();

    execute_command(cli.command)
}
