//! JSONL storage: one record per line.
//!
//! Athletes, couples, competitions and event types each live in their own
//! file. Blank lines and `#` comments are skipped on read. A file is only
//! decoded once it is known to be NUL-free UTF-8; writes land in a sibling
//! temp file that replaces the target on success.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Errors from JSONL operations.
#[derive(Debug, thiserror::Error)]
pub enum JsonlError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("record does not serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{}: corrupted file ({reason})", path.display())]
    Corrupt { path: PathBuf, reason: &'static str },
}

impl JsonlError {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Decode every record line from a reader.
pub fn read_records<T: DeserializeOwned>(reader: impl BufRead) -> Result<Vec<T>, JsonlError> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_no = index + 1;
            match line {
                Err(source) => Some(Err(JsonlError::Line {
                    line: line_no,
                    source,
                })),
                Ok(text) => {
                    let text = text.trim();
                    if text.is_empty() || text.starts_with('#') {
                        None
                    } else {
                        Some(serde_json::from_str(text).map_err(|e| JsonlError::Parse {
                            line: line_no,
                            message: e.to_string(),
                        }))
                    }
                }
            }
        })
        .collect()
}

/// Encode records, one compact JSON object per line.
pub fn write_records<T: Serialize>(
    writer: &mut impl Write,
    records: &[T],
) -> Result<(), JsonlError> {
    for (index, record) in records.iter().enumerate() {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n").map_err(|source| JsonlError::Line {
            line: index + 1,
            source,
        })?;
    }
    Ok(())
}

/// Read a JSONL file after checking it is clean text.
pub fn read_records_from_path<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> Result<Vec<T>, JsonlError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(JsonlError::io(path))?;
    let text = clean_text(path, &bytes)?;
    read_records(text.as_bytes())
}

/// Replace a JSONL file with `records`.
///
/// Readers see either the old file or the complete new one, never a
/// partial write.
pub fn write_records_to_path<T: Serialize>(
    path: impl AsRef<Path>,
    records: &[T],
) -> Result<(), JsonlError> {
    let path = path.as_ref();
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = parent {
        fs::create_dir_all(dir).map_err(JsonlError::io(dir))?;
    }

    let staged = StagedFile::new(path);
    staged.fill(records)?;
    staged.commit()?;

    if let Some(dir) = parent {
        File::open(dir)
            .and_then(|handle| handle.sync_all())
            .map_err(JsonlError::io(dir))?;
    }
    Ok(())
}

fn clean_text<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str, JsonlError> {
    let corrupt = |reason| JsonlError::Corrupt {
        path: path.to_path_buf(),
        reason,
    };
    if bytes.contains(&0) {
        return Err(corrupt("NUL byte"));
    }
    std::str::from_utf8(bytes).map_err(|_| corrupt("not UTF-8"))
}

/// A sibling temp file that is removed unless committed over its target.
struct StagedFile {
    target: PathBuf,
    temp: PathBuf,
    committed: bool,
}

impl StagedFile {
    fn new(target: &Path) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let mut name: OsString = target.as_os_str().to_os_string();
        name.push(format!(".tmp.{}.{nanos}", std::process::id()));
        Self {
            target: target.to_path_buf(),
            temp: PathBuf::from(name),
            committed: false,
        }
    }

    fn fill<T: Serialize>(&self, records: &[T]) -> Result<(), JsonlError> {
        let file = File::create(&self.temp).map_err(JsonlError::io(&self.temp))?;
        let mut writer = BufWriter::new(file);
        write_records(&mut writer, records)?;
        let file = writer
            .into_inner()
            .map_err(|e| JsonlError::io(&self.temp)(e.into_error()))?;
        file.sync_all().map_err(JsonlError::io(&self.temp))
    }

    fn commit(mut self) -> Result<(), JsonlError> {
        fs::rename(&self.temp, &self.target).map_err(JsonlError::io(&self.target))?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp);
        }
    }
}
