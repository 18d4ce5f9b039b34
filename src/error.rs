use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in layout file '{file}'")]
#[diagnostic(
    code(printdevdag::config_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum PrintDagError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(printdevdag::file_read_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("Failed to serialize layout as TOML")]
    #[diagnostic(
        code(printdevdag::toml_serialize_error),
        help("This is likely an internal error - please report it")
    )]
    ConfigSerializeError(#[from] toml::ser::Error),

    #[error("Invalid graph snapshot")]
    #[diagnostic(
        code(printdevdag::json_error),
        help("The snapshot must be a JSON object with `nodes` and `edges` arrays")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(printdevdag::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(printdevdag::config_error),
        help("Check your command arguments and layout file")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(printdevdag::graph_error),
        help("Check that every edge names a node present in the snapshot")
    )]
    GraphError { message: String },

    #[error("Malformed graph: {message}")]
    #[diagnostic(
        code(printdevdag::malformed_graph),
        help("Device graphs must be acyclic; the snapshot producer emitted a cycle")
    )]
    MalformedGraph { message: String },

    #[error("Unsupported traversal mode '{mode}'")]
    #[diagnostic(
        code(printdevdag::unsupported_mode),
        help("Use one of: depth-first, breadth-first, layers")
    )]
    UnsupportedTraversalMode { mode: String },
}
