//! # Configuration Module
//!
//! Configuration structures for the printdevdag commands, plus the table
//! layout they share.
//!
//! ## Configurations
//!
//! - **PrintConfig**: columns, justification, getter cascades and spacing of
//!   the printed table (loadable from TOML)
//! - **PrintOptions**: configuration for the `print` command
//! - **SchemaOptions**: configuration for the `schema` command
//!
//! ## Example
//!
//! ```
//! use printdevdag::common::ConfigBuilder;
//! use printdevdag::config::PrintOptions;
//! use printdevdag::print::TraversalMode;
//!
//! let options = PrintOptions::builder()
//!     .with_graph("devices.json".into())
//!     .with_mode(TraversalMode::Layers)
//!     .with_layout(None)
//!     .with_sort_key(None)
//!     .with_output(None)
//!     .with_no_header(false)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.mode, TraversalMode::Layers);
//! ```

pub mod layout;
pub mod print;
pub mod schema;

pub use layout::{ColumnSpec, PrintConfig};
pub use print::PrintOptions;
pub use schema::SchemaOptions;
