//! Fingerprint-keyed cache in front of another directory source.
//!
//! Holds the last successfully parsed tree together with the fingerprint it
//! was read at. Each `load` asks the inner source for its current
//! fingerprint and only re-parses when it changed. Failures are never
//! cached: a broken or missing file is re-read on the next request.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::directory::{Directory, DirectoryError};
use crate::ports::{DirectorySource, SourceFingerprint};

#[derive(Debug, Clone)]
struct CachedTree {
    fingerprint: Option<SourceFingerprint>,
    directory: Arc<Directory>,
}

/// Caching wrapper around any [`DirectorySource`].
#[derive(Debug)]
pub struct CachedDirectorySource<S> {
    inner: S,
    cached: RwLock<Option<CachedTree>>,
}

impl<S: DirectorySource> CachedDirectorySource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cached: RwLock::new(None),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// True if a tree is currently held.
    pub async fn is_warm(&self) -> bool {
        self.cached.read().await.is_some()
    }
}

#[async_trait]
impl<S: DirectorySource> DirectorySource for CachedDirectorySource<S> {
    async fn load(&self) -> Result<Arc<Directory>, DirectoryError> {
        let current = match self.inner.fingerprint().await {
            Ok(fp) => fp,
            Err(err) => {
                *self.cached.write().await = None;
                return Err(err);
            }
        };

        if let Some(hit) = self.cached.read().await.as_ref() {
            if hit.fingerprint == current {
                return Ok(Arc::clone(&hit.directory));
            }
        }

        let mut slot = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(hit) = slot.as_ref() {
            if hit.fingerprint == current {
                return Ok(Arc::clone(&hit.directory));
            }
        }

        tracing::debug!(source = %self.inner.describe(), "Directory cache miss");
        match self.inner.load().await {
            Ok(directory) => {
                *slot = Some(CachedTree {
                    fingerprint: current,
                    directory: Arc::clone(&directory),
                });
                Ok(directory)
            }
            Err(err) => {
                *slot = None;
                Err(err)
            }
        }
    }

    async fn fingerprint(&self) -> Result<Option<SourceFingerprint>, DirectoryError> {
        self.inner.fingerprint().await
    }

    async fn invalidate(&self) {
        *self.cached.write().await = None;
        self.inner.invalidate().await;
        tracing::info!(source = %self.inner.describe(), "Directory cache invalidated");
    }

    fn describe(&self) -> String {
        format!("cached({})", self.inner.describe())
    }
}
