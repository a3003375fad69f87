//! Saved calculations and the unit-system preference, kept in
//! `<dir>/.pacecalc.json`

use anyhow::{bail, Context, Result};
use pacecalc::{Calculation, PlainCalculation, UnitSystem};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STORE_FILE: &str = ".pacecalc.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(default)]
    format: UnitSystem,
    #[serde(default)]
    results: Vec<PlainCalculation>,
}

pub struct Store {
    path: PathBuf,
    state: StoredState,
}

impl Store {
    /// Load the store in `dir`. A missing file starts empty; an unreadable
    /// one is ignored with a warning and replaced on the next save.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(STORE_FILE);
        let state = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring unreadable store");
                StoredState::default()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store yet");
                StoredState::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable store");
                StoredState::default()
            }
        };

        Self { path, state }
    }

    pub fn units(&self) -> UnitSystem {
        self.state.format
    }

    pub fn set_units(&mut self, units: UnitSystem) {
        self.state.format = units;
    }

    /// Saved calculations, newest first
    pub fn calculations(&self) -> Vec<Calculation> {
        self.state
            .results
            .iter()
            .map(Calculation::from_plain)
            .collect()
    }

    /// Put a successful calculation at the top of the history
    pub fn push(&mut self, calculation: &Calculation) -> Result<()> {
        if !calculation.is_ok() {
            bail!("Only successful calculations can be saved");
        }
        self.state.results.insert(0, calculation.to_plain());
        Ok(())
    }

    /// Remove the calculation at 1-based `index`, as listed by `history`
    pub fn remove(&mut self, index: usize) -> Result<Calculation> {
        if index == 0 || index > self.state.results.len() {
            bail!("No saved calculation #{}", index);
        }
        let plain = self.state.results.remove(index - 1);
        Ok(Calculation::from_plain(&plain))
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), saved = self.state.results.len(), "store written");
        Ok(())
    }
}
