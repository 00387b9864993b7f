//! Batch file loading.
//!
//! A batch file is JSON: either a bare array of tasks, or an envelope
//! object `{"tasks": [...], "strategy": "..."}` where the strategy is
//! optional and an explicit `--strategy` flag wins over it.

use crate::analyzer::TaskInput;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("File '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not a valid task batch: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A loaded batch plus the strategy the file itself asked for, if any
#[derive(Debug, Clone)]
pub struct Batch {
    pub tasks: Vec<TaskInput>,
    pub strategy: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchFile {
    Tasks(Vec<TaskInput>),
    Envelope {
        tasks: Vec<TaskInput>,
        #[serde(default)]
        strategy: Option<String>,
    },
}

pub fn load_batch(path: &Path) -> Result<Batch, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let body = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: BatchFile = serde_json::from_str(&body).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(match parsed {
        BatchFile::Tasks(tasks) => Batch {
            tasks,
            strategy: None,
        },
        BatchFile::Envelope { tasks, strategy } => Batch { tasks, strategy },
    })
}
