use std::path::PathBuf;

use thiserror::Error;

use crate::models::Weight;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad folder name {0}")]
    BadWeightFolder(String),

    #[error("Invalid catalog {}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Submodule update failed: {0}")]
    SubmoduleRefresh(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Writing {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that only drop a single icon from the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    #[error("missing weights [{}]{}", join_weights(.missing), duplicated_suffix(.duplicated))]
    MissingWeights {
        missing: Vec<Weight>,
        duplicated: Vec<Weight>,
    },

    #[error("{weight} is malformed: root element was {root}")]
    Malformed { weight: Weight, root: String },

    #[error("{weight} could not be parsed: {message}")]
    Parse { weight: Weight, message: String },
}

fn join_weights(weights: &[Weight]) -> String {
    weights
        .iter()
        .map(|w| w.slug())
        .collect::<Vec<_>>()
        .join(", ")
}

fn duplicated_suffix(duplicated: &[Weight]) -> String {
    if duplicated.is_empty() {
        String::new()
    } else {
        format!(", duplicated weights [{}]", join_weights(duplicated))
    }
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
