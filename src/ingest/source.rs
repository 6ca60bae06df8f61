//! Async row sources for polling callers
//!
//! A [`RowSource`] hands out one raw batch per `fetch`. The rotation
//! behavior of the original feed — several export files cycled on a timer —
//! lives entirely in [`RotatingSource`]; the core never learns which file a
//! batch came from.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use super::loader::read_rows;
use super::{IngestError, IngestResult, RowBatch};

/// Anything that can supply a fresh batch of raw rows per polling tick.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch(&self) -> IngestResult<RowBatch>;
}

/// A source backed by a single CSV export.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSource for FileSource {
    async fn fetch(&self) -> IngestResult<RowBatch> {
        read_rows(&self.path)
    }
}

/// A source that cycles through a fixed list of files, one per fetch.
///
/// The cursor wraps around, so a periodic caller sees the files in a
/// repeating round-robin.
#[derive(Debug)]
pub struct RotatingSource {
    paths: Vec<PathBuf>,
    cursor: AtomicUsize,
}

impl RotatingSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[async_trait]
impl RowSource for RotatingSource {
    async fn fetch(&self) -> IngestResult<RowBatch> {
        if self.paths.is_empty() {
            return Err(IngestError::NoSources);
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.paths.len();
        let path = &self.paths[index];
        debug!(path = %path.display(), index, "rotating source tick");
        read_rows(path)
    }
}
