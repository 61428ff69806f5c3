use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema error: {0}")]
    Schema(String),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify a serde_json failure raised while reading `path`.
    pub fn from_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let path = path.into();
        match source.classify() {
            Category::Io => Self::Io {
                path,
                source: source.into(),
            },
            Category::Syntax | Category::Eof => Self::Parse { path, source },
            Category::Data => Self::Schema(format!("{}: {}", path.display(), source)),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
