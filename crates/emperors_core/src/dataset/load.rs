//! JSON dataset decoding.

use crate::model::emperor::EmperorRecord;
use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error while reading or decoding a dataset document.
#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document is not valid JSON.
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
    /// Top-level JSON value is not an array.
    NotAnArray,
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid dataset json in `{}`: {source}", path.display()),
            Self::Parse { path: None, source } => write!(f, "invalid dataset json: {source}"),
            Self::NotAnArray => write!(f, "dataset root must be a json array"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::NotAnArray => None,
        }
    }
}

/// Reads and decodes a dataset file.
///
/// # Side effects
/// - Emits `dataset_load` logging events with duration and record count.
pub fn load_dataset(path: impl AsRef<Path>) -> DatasetResult<Vec<EmperorRecord>> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=dataset_load module=dataset status=start");

    let text = std::fs::read_to_string(path).map_err(|source| {
        error!(
            "event=dataset_load module=dataset status=error duration_ms={} error_code=read_failed error={}",
            started_at.elapsed().as_millis(),
            source
        );
        DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let result = parse_dataset(&text).map_err(|err| match err {
        DatasetError::Parse { path: None, source } => DatasetError::Parse {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    });

    match &result {
        Ok(records) => info!(
            "event=dataset_load module=dataset status=ok duration_ms={} records={}",
            started_at.elapsed().as_millis(),
            records.len()
        ),
        Err(err) => error!(
            "event=dataset_load module=dataset status=error duration_ms={} error_code=decode_failed error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Decodes a dataset document held in memory.
///
/// Elements that do not match the record shape (no `name`, wrongly typed
/// fields) are skipped with a `warn` event; the remaining records keep
/// their stored order.
pub fn parse_dataset(text: &str) -> DatasetResult<Vec<EmperorRecord>> {
    let root: Value =
        serde_json::from_str(text).map_err(|source| DatasetError::Parse { path: None, source })?;
    let Value::Array(items) = root else {
        return Err(DatasetError::NotAnArray);
    };

    let records: Vec<EmperorRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    "event=dataset_record_skip module=dataset status=skipped position={} error={}",
                    position, err
                );
                None
            }
        })
        .collect();
    Ok(records)
}
