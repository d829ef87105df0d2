//! Backing-file store: the whole teacher list lives in one JSON array.
//!
//! Every mutation rewrites the file in full before returning, so the file
//! matches `records` whenever control is back at the menu. A failed rewrite
//! undoes the in-memory change before the error is returned.

use crate::error::{RegistryError, Result};
use crate::query;
use crate::record::{Field, Teacher};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<Teacher>,
}

impl Store {
    /// Load the store from `path`. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "teacher file absent, starting empty");
            return Ok(Self {
                path,
                records: Vec::new(),
            });
        }

        let text = fs::read_to_string(&path).map_err(|source| RegistryError::Io {
            path: path.clone(),
            source,
        })?;
        let records: Vec<Teacher> =
            serde_json::from_str(&text).map_err(|source| RegistryError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), count = records.len(), "loaded teachers");
        Ok(Self { path, records })
    }

    /// Overwrite the backing file with the current list (pretty-printed).
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records).map_err(|source| {
            RegistryError::Serialize {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| RegistryError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved teachers");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Teacher] {
        &self.records
    }

    /// First teacher whose name contains `search`, case-insensitively.
    pub fn find(&self, search: &str) -> Result<&Teacher> {
        query::find_first(&self.records, search)
            .map(|i| &self.records[i])
            .ok_or_else(|| RegistryError::NotFound(search.to_string()))
    }

    pub fn add(&mut self, teacher: Teacher) -> Result<()> {
        info!(name = %teacher.name, "adding teacher");
        self.records.push(teacher);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Set `field` on the first match for `search` and persist.
    ///
    /// Nothing is written when the lookup fails or `value` does not parse.
    pub fn update(&mut self, search: &str, field: Field, value: &str) -> Result<&Teacher> {
        let idx = query::find_first(&self.records, search)
            .ok_or_else(|| RegistryError::NotFound(search.to_string()))?;

        let previous = self.records[idx].clone();
        field.apply(&mut self.records[idx], value)?;
        info!(name = %self.records[idx].name, %field, "updated teacher");
        if let Err(e) = self.save() {
            self.records[idx] = previous;
            return Err(e);
        }
        Ok(&self.records[idx])
    }

    /// Remove the first match for `search` and persist. Returns the removed record.
    pub fn delete(&mut self, search: &str) -> Result<Teacher> {
        let idx = query::find_first(&self.records, search)
            .ok_or_else(|| RegistryError::NotFound(search.to_string()))?;

        let removed = self.records.remove(idx);
        info!(name = %removed.name, "deleted teacher");
        if let Err(e) = self.save() {
            self.records.insert(idx, removed);
            return Err(e);
        }
        Ok(removed)
    }
}
