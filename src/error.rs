use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single generator run.
///
/// Unsupported value types are not represented here: they degrade to an
/// empty macro entry instead of stopping generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("input file not found: {}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in settings document")]
    InputParse(#[source] serde_json::Error),

    #[error("settings document must be a JSON object at the top level (found {found})")]
    NotAnObject { found: &'static str },

    #[error("failed to write output file {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read header layout {}", path.display())]
    LayoutRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid header layout in {}", path.display())]
    LayoutParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GenerateError {
    pub(crate) fn from_input_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            GenerateError::InputNotFound { path, source }
        } else {
            GenerateError::InputRead { path, source }
        }
    }
}
