//! # Preview Store
//!
//! A small file-backed store for generated case studies, keyed by a random
//! identifier. Documents persist only as long as the directory does; the
//! store makes no durability promises and is intended for short-lived
//! previews between form submission and publication.

use anyhow::{Context, Result};
use casegen::CaseStudyDocument;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// A file-backed preview store.
#[derive(Clone, Debug)]
pub struct PreviewStore {
    dir: PathBuf,
}

impl PreviewStore {
    /// Creates the store, ensuring its directory exists.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create preview directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: &Uuid) -> PathBuf {
        self.dir.join(format!("case_study_{id}.json"))
    }

    /// Saves a document and returns its generated preview id.
    pub fn save(&self, document: &CaseStudyDocument) -> Result<String> {
        let id = Uuid::new_v4();
        let json = serde_json::to_string_pretty(document)?;
        fs::write(self.path_for(&id), json)
            .with_context(|| format!("Failed to write preview {id}"))?;
        Ok(id.to_string())
    }

    /// Loads the document for the given id, or `None` if it does not exist.
    ///
    /// Ids that are not valid UUIDs are treated as absent, which also keeps
    /// arbitrary path segments out of the store directory.
    pub fn load(&self, id: &str) -> Result<Option<CaseStudyDocument>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let path = self.path_for(&id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preview {id}"))?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
