//! Destinations: where the serialized table is persisted.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TableError};

/// File name used when only a directory is configured.
pub const DEFAULT_FILE_NAME: &str = "ExportedTable.csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Persists serialized table text.
pub trait Destination {
    fn persist(&mut self, content: &str) -> Result<()>;

    /// Human-readable location, for reporting.
    fn describe(&self) -> String;
}

/// Resolved settings for a file destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationConfig {
    pub path: PathBuf,
    /// Prepend the UTF-8 byte order mark.
    pub bom: bool,
}

impl DestinationConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bom: false,
        }
    }

    /// `dir` joined with [`DEFAULT_FILE_NAME`].
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn with_bom(mut self, bom: bool) -> Self {
        self.bom = bom;
        self
    }
}

/// Writes UTF-8 text to a file, replacing any existing content.
#[derive(Clone, Debug)]
pub struct FileDestination {
    config: DestinationConfig,
}

impl FileDestination {
    pub fn new(config: DestinationConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl Destination for FileDestination {
    fn persist(&mut self, content: &str) -> Result<()> {
        let path = &self.config.path;
        let mut bytes = Vec::with_capacity(content.len() + UTF8_BOM.len());
        if self.config.bom {
            bytes.extend_from_slice(UTF8_BOM);
        }
        bytes.extend_from_slice(content.as_bytes());
        fs::write(path, &bytes).map_err(|source| TableError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "table written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.config.path.display().to_string()
    }
}

/// Writes to any [`Write`] sink, such as stdout or an in-memory buffer.
pub struct WriterDestination<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> WriterDestination<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Destination for WriterDestination<W> {
    fn persist(&mut self, content: &str) -> Result<()> {
        self.writer.write_all(content.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
