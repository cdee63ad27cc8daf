//! Durable set of player identifiers whose fetch has been abandoned.
//!
//! The set is the crash-recovery state of a collection run: every mutation
//! is written back to disk before the method returns, so killing the process
//! between any two fetches loses at most the in-flight attempt. The file
//! format is one decimal identifier per line, sorted ascending; an empty set
//! is represented by the file being absent, never by an empty file.

use crate::cli::types::PlayerId;
use crate::error::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FailureSet {
    path: PathBuf,
    ids: BTreeSet<PlayerId>,
}

impl FailureSet {
    /// Load the persisted set, or an empty one if the file is absent.
    /// Lines that do not parse as identifiers are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let ids = if path.exists() {
            fs::read_to_string(path)?
                .lines()
                .filter_map(|line| line.trim().parse::<u64>().ok())
                .map(PlayerId::new)
                .collect()
        } else {
            BTreeSet::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            ids,
        })
    }

    /// Write the current members back to disk. An empty set removes the
    /// file so "fully recovered" and "never run" look the same.
    pub fn save(&self) -> Result<()> {
        if self.ids.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // BTreeSet iteration gives the canonical sorted order.
        let mut contents = String::new();
        for id in &self.ids {
            contents.push_str(&id.to_string());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Remove a recovered identifier and flush. Saves only when the
    /// identifier was actually a member.
    pub fn mark_success(&mut self, id: PlayerId) -> Result<()> {
        if self.ids.remove(&id) {
            self.save()?;
        }
        Ok(())
    }

    /// Record an abandoned identifier and flush.
    pub fn mark_failed(&mut self, id: PlayerId) -> Result<()> {
        self.ids.insert(id);
        self.save()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Stable snapshot of the current members, for sweeping while the set
    /// is being mutated.
    pub fn snapshot(&self) -> Vec<PlayerId> {
        self.ids.iter().copied().collect()
    }
}
