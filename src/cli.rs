use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::common::{LayoutArgs, OutputArgs};
use crate::print::TraversalMode;

#[derive(Parser)]
#[command(
    name = "printdevdag",
    about = "Print a device graph as an aligned table",
    long_about = "printdevdag reads a snapshot of a device graph (block devices, partitions, \
                  device-mapper targets and the edges between them) and prints it as \
                  column-aligned text, walked depth-first, breadth-first, or grouped into \
                  layers of like devices.",
    version
)]
pub struct Cli {
    /// Logging verbosity [OFF, ERROR, WARN, INFO, DEBUG, TRACE]
    #[arg(
        global = true,
        short,
        long,
        default_value_t = LevelFilter::Warn,
        env = "PRINTDEVDAG_VERBOSITY"
    )]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a device graph snapshot
    ///
    /// Walks the graph in the chosen mode and prints one row per visited
    /// device, with every column padded to its widest value.
    #[command(
        long_about = "Print a device graph snapshot as an aligned table. In depth-first mode the \
                      first column is indented by tree depth and a device reachable along \
                      several paths is listed once per path. Breadth-first mode lists every \
                      device once, at its shallowest level. Layers mode lists every device once, \
                      grouped by node type, device type and subsystem."
    )]
    Print {
        /// JSON graph snapshot to print
        #[arg(value_name = "GRAPH", env = "PRINTDEVDAG_GRAPH")]
        graph: PathBuf,

        /// Traversal mode [depth-first, breadth-first, layers]
        #[arg(
            short,
            long,
            default_value = crate::constants::output::DEFAULT_MODE,
            env = "PRINTDEVDAG_MODE"
        )]
        mode: TraversalMode,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Column that orders siblings, levels and layers
        #[arg(long, value_name = "COLUMN", env = "PRINTDEVDAG_SORT_KEY")]
        sort_key: Option<String>,

        #[command(flatten)]
        output: OutputArgs,

        /// Omit the header row
        #[arg(long, env = "PRINTDEVDAG_NO_HEADER")]
        no_header: bool,
    },

    /// Print the effective table layout as TOML
    ///
    /// Writes the default layout, or the layout file given with --config
    /// after defaults are filled in. The output is a valid layout file.
    Schema {
        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}
