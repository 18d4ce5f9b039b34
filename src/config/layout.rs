//! Table layout configuration
//!
//! A layout names the columns to print, how each is justified, which getters
//! back each column, and the spacing of the table. It can be read from a
//! TOML file; fields the file leaves out keep their defaults.
//!
//! ```toml
//! sort_key = "NAME"
//! gutter = 3
//!
//! [[columns]]
//! name = "NAME"
//!
//! [[columns]]
//! name = "SIZE"
//! justify = "right"
//!
//! [headers]
//! SIZE = "BYTES"
//!
//! [resolvers]
//! NAME = ["DM_NAME", "SYSNAME", "IDENTIFIER"]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use log::warn;
use miette::NamedSource;
use serde::{Deserialize, Serialize};

use crate::constants::{columns, layout};
use crate::error::{ConfigParseError, PrintDagError};
use crate::print::Justification;
use crate::resolve::{NodeGetter, Resolver, default_cascades};
use crate::utils::keys::minimize;

/// A printed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(default)]
    pub justify: Justification,
}

impl ColumnSpec {
    pub fn new(name: &str, justify: Justification) -> Self {
        Self {
            name: name.to_string(),
            justify,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintConfig {
    /// Column that orders siblings, levels and layers
    pub sort_key: String,
    /// Spaces between columns
    pub gutter: usize,
    /// Spaces per depth level in tree output
    pub indent: usize,
    /// Text for values no getter could resolve
    pub placeholder: String,
    pub show_header: bool,
    pub columns: Vec<ColumnSpec>,
    /// Display header per column name; columns not listed use their name
    pub headers: BTreeMap<String, String>,
    /// Getter cascade per column name
    pub resolvers: BTreeMap<String, Vec<NodeGetter>>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            sort_key: layout::DEFAULT_SORT_KEY.to_string(),
            gutter: layout::GUTTER_WIDTH,
            indent: layout::INDENT_WIDTH,
            placeholder: layout::PLACEHOLDER.to_string(),
            show_header: true,
            columns: vec![
                ColumnSpec::new(columns::NAME, Justification::Left),
                ColumnSpec::new(columns::DEVNAME, Justification::Left),
                ColumnSpec::new(columns::SUBSYSTEM, Justification::Left),
                ColumnSpec::new(columns::DEVTYPE, Justification::Left),
                ColumnSpec::new(columns::DM_SUBSYSTEM, Justification::Left),
                ColumnSpec::new(columns::ID_PATH, Justification::Left),
                ColumnSpec::new(columns::SIZE, Justification::Right),
            ],
            headers: BTreeMap::new(),
            resolvers: default_cascades(),
        }
    }
}

impl PrintConfig {
    /// Read a layout file
    pub fn load(path: &Path) -> Result<Self, PrintDagError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| PrintDagError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&contents, &path.display().to_string())
    }

    pub fn from_toml_str(contents: &str, file: &str) -> Result<Self, PrintDagError> {
        let config: Self = toml::from_str(contents).map_err(|source| {
            let span = source.span().map(Into::into);
            PrintDagError::ConfigParseError(Box::new(ConfigParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, contents.to_string()),
                span,
                source,
            }))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that cannot be printed
    ///
    /// Columns without a getter cascade are allowed but render as the
    /// placeholder on every row.
    pub fn validate(&self) -> Result<(), PrintDagError> {
        if self.columns.is_empty() {
            return Err(PrintDagError::ConfigurationError {
                message: "Layout must declare at least one column".to_string(),
            });
        }

        let mut names = BTreeSet::new();
        for column in &self.columns {
            if !names.insert(column.name.as_str()) {
                return Err(PrintDagError::ConfigurationError {
                    message: format!("Column '{}' is declared twice", column.name),
                });
            }
            if !self.resolvers.contains_key(&column.name) {
                warn!(
                    "Column '{}' has no resolver; it will print as '{}'",
                    column.name, self.placeholder
                );
            }
        }

        if !self.resolvers.contains_key(&self.sort_key) {
            warn!(
                "Sort column '{}' has no resolver; rows fall back to identifier order",
                self.sort_key
            );
        }
        Ok(())
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    /// Header text per column, in column order
    pub fn header_labels(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| {
                self.headers
                    .get(&column.name)
                    .cloned()
                    .unwrap_or_else(|| column.name.clone())
            })
            .collect()
    }

    pub fn alignment(&self) -> BTreeMap<String, Justification> {
        self.columns
            .iter()
            .map(|column| (column.name.clone(), column.justify))
            .collect()
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.resolvers.clone())
    }

    /// Serialize as TOML, dropping header aliases that repeat the column name
    pub fn to_toml_string(&self) -> Result<String, PrintDagError> {
        let minimized = Self {
            headers: minimize(&self.headers),
            ..self.clone()
        };
        Ok(toml::to_string(&minimized)?)
    }
}
