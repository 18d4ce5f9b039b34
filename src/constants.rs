//! Configuration constants for printdevdag
//!
//! Defaults for the table layout and the device column schema. Every layout
//! value can be overridden through a layout file (see
//! [`crate::config::PrintConfig`]) or command-line flags.

/// Table layout defaults
pub mod layout {
    /// Spaces added per tree level to the first column in depth-first output
    pub const INDENT_WIDTH: usize = 2;

    /// Spaces between adjacent columns
    pub const GUTTER_WIDTH: usize = 2;

    /// Text printed for a column with no resolvable value
    pub const PLACEHOLDER: &str = "";

    /// Column used to order siblings, levels and layers
    pub const DEFAULT_SORT_KEY: &str = super::columns::NAME;
}

/// Column names of the device schema
pub mod columns {
    pub const NAME: &str = "NAME";
    pub const DEVNAME: &str = "DEVNAME";
    pub const SUBSYSTEM: &str = "SUBSYSTEM";
    pub const DEVTYPE: &str = "DEVTYPE";
    pub const DM_SUBSYSTEM: &str = "DM_SUBSYSTEM";
    pub const ID_PATH: &str = "ID_PATH";
    pub const SIZE: &str = "SIZE";
    pub const NODETYPE: &str = "NODETYPE";
}

/// Output configuration
pub mod output {
    /// Traversal mode used when none is given
    pub const DEFAULT_MODE: &str = "depth-first";
}
