use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

mod table;

pub use table::{render_marketing_table, render_mockup_table};

pub const PROMPTS_FILE_NAME: &str = "prompts.json";
pub const MOCKUP_PROMPTS_FILE_NAME: &str = "mockup_prompts.json";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("no prompts to write")]
    EmptyRecords,
    #[error("failed to serialize prompts")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write prompts to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct WriteOptions<'a> {
    pub output_dir: &'a Path,
    pub file_name: &'a str,
}

impl<'a> WriteOptions<'a> {
    pub fn prompts(output_dir: &'a Path) -> Self {
        Self {
            output_dir,
            file_name: PROMPTS_FILE_NAME,
        }
    }

    pub fn mockups(output_dir: &'a Path) -> Self {
        Self {
            output_dir,
            file_name: MOCKUP_PROMPTS_FILE_NAME,
        }
    }
}

/// Write `records` as a pretty-printed JSON array, creating the output
/// directory when needed. Returns the path of the written file.
pub fn write_records<T: Serialize>(
    records: &[T],
    options: WriteOptions<'_>,
) -> Result<PathBuf, OutputError> {
    if records.is_empty() {
        return Err(OutputError::EmptyRecords);
    }

    let output_dir = options.output_dir;
    fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(options.file_name);
    let mut serialized = serde_json::to_string_pretty(records)?;
    serialized.push('\n');

    fs::write(&path, serialized).map_err(|source| OutputError::Io {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), records = records.len(), "wrote prompts");
    Ok(path)
}

#[cfg(test)]
mod tests;
