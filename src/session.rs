//! Explicit holder for the current dataset.

use crate::error::Result;
use crate::loader::{self, Dataset};
use crate::ranker::{self, Ranking};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and install it as the current dataset. On failure the
    /// previous dataset, if any, is left untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&Dataset> {
        match loader::load_dataset(path.as_ref()) {
            Ok(ds) => Ok(&*self.dataset.insert(ds)),
            Err(e) => {
                warn!(path = %path.as_ref().display(), error = %e, "load failed");
                Err(e)
            }
        }
    }

    pub fn replace(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn items(&self) -> &[String] {
        self.dataset.as_ref().map(|d| d.items()).unwrap_or(&[])
    }

    pub fn top_countries(&self, item: &str, n: usize) -> Result<Ranking> {
        ranker::top_countries(self.dataset(), item, n)
    }
}
