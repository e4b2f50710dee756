//! JSON-file repository for day records.
//!
//! The whole collection lives in a single UTF-8 file: a pretty-printed
//! object mapping "YYYY-MM-DD" to record fields. Every mutation is a full
//! read-modify-write of that file; there is no partial update.

use crate::errors::AppResult;
use crate::models::DayRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered by date, so iteration is already chronological.
pub type Records = BTreeMap<NaiveDate, DayRecord>;

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. A missing file is the empty collection.
    pub fn load(&self) -> AppResult<Records> {
        if !self.path.exists() {
            return Ok(Records::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Records::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Rewrite the whole collection.
    pub fn save(&self, records: &Records) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');
        fs::write(&self.path, json)?;

        Ok(())
    }

    /// Insert or replace the record for one date.
    pub fn upsert(&self, date: NaiveDate, record: DayRecord) -> AppResult<()> {
        let mut records = self.load()?;
        records.insert(date, record);
        self.save(&records)
    }

    pub fn get(&self, date: &NaiveDate) -> AppResult<Option<DayRecord>> {
        Ok(self.load()?.get(date).cloned())
    }
}
