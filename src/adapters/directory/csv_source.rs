//! CSV-backed directory source.
//!
//! Reads a UTF-8 CSV with header `category,company,option,phone,prompt`
//! (tiered) or `company,option,phone,prompt` (flat). Extra columns are
//! ignored. Every read parses the whole file; wrap the source in
//! [`CachedDirectorySource`](super::CachedDirectorySource) to avoid that.
//!
//! # Example
//!
//! ```ignore
//! let source = CsvDirectorySource::new("targets.csv");
//! let directory = source.load().await?;
//! ```

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::domain::directory::{
    Directory, DirectoryBuilder, DirectoryError, DirectoryLayout, DirectoryRow,
};
use crate::ports::{DirectorySource, SourceFingerprint};

const CATEGORY_COLUMN: &str = "category";
const REQUIRED_COLUMNS: [&str; 4] = ["company", "option", "phone", "prompt"];

/// Directory source reading a CSV file from disk.
#[derive(Debug, Clone)]
pub struct CsvDirectorySource {
    path: PathBuf,
}

impl CsvDirectorySource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> DirectoryError {
        match err.kind() {
            ErrorKind::NotFound => DirectoryError::missing(&self.path),
            _ => DirectoryError::unreadable(&self.path, err.to_string()),
        }
    }
}

/// Parses CSV text into a directory.
///
/// The layout is picked from the header: without a `category` column the
/// rows land under the flat layout's single implicit category.
///
/// Rows are matched to columns by header name. Fields past the last header
/// (an unquoted comma inside a prompt, say) are dropped with a warning; a
/// row missing a required field is `Malformed`.
pub fn parse_directory(path: &Path, text: &str) -> Result<Directory, DirectoryError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DirectoryError::malformed(path, Some(1), e.to_string()))?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DirectoryError::malformed(
            path,
            Some(1),
            format!("missing required column(s): {}", missing.join(", ")),
        ));
    }

    let layout = if headers.iter().any(|h| h == CATEGORY_COLUMN) {
        DirectoryLayout::Tiered
    } else {
        DirectoryLayout::Flat
    };

    let mut builder = DirectoryBuilder::new(layout);
    let mut record = csv::StringRecord::new();
    loop {
        let more = reader.read_record(&mut record).map_err(|e| {
            let line = e.position().map(|p| p.line());
            DirectoryError::malformed(path, line, e.to_string())
        })?;
        if !more {
            break;
        }

        let line = record.position().map(|p| p.line());
        if record.len() > headers.len() {
            tracing::warn!(
                path = %path.display(),
                line = ?line,
                extra = record.len() - headers.len(),
                "Directory row has more fields than the header; extra fields ignored"
            );
        }

        let row: DirectoryRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DirectoryError::malformed(path, line, e.to_string()))?;
        builder.insert(row);
    }

    if builder.skipped() > 0 {
        tracing::debug!(
            path = %path.display(),
            skipped = builder.skipped(),
            "Skipped directory rows with empty company"
        );
    }

    Ok(builder.build())
}

#[async_trait]
impl DirectorySource for CsvDirectorySource {
    async fn load(&self) -> Result<Arc<Directory>, DirectoryError> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        let directory = parse_directory(&self.path, &text)?;
        tracing::info!(
            path = %self.path.display(),
            layout = ?directory.layout(),
            entries = directory.entry_count(),
            "Loaded directory"
        );
        Ok(Arc::new(directory))
    }

    async fn fingerprint(&self) -> Result<Option<SourceFingerprint>, DirectoryError> {
        let metadata = fs::metadata(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(Some(SourceFingerprint {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        }))
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
