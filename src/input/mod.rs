use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod fixture;

use crate::model::entity::Roster;
use crate::pipeline::ScoreError;
use crate::pipeline::stage1_schema::build_roster;

/// Roster document as it appears on disk, before schema validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRoster {
    pub team: Vec<RawEntity>,
    pub applicants: Vec<RawEntity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntity {
    pub name: String,
    pub attributes: BTreeMap<String, f64>,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid roster: {0}")]
    Invalid(#[from] ScoreError),
}

pub fn load_roster(path: &Path) -> Result<Roster, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = parse_raw_roster(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        team = raw.team.len(),
        applicants = raw.applicants.len(),
        "parsed roster document"
    );
    Ok(build_roster(&raw)?)
}

pub fn builtin_roster() -> Result<Roster, InputError> {
    Ok(build_roster(&fixture::builtin_raw_roster())?)
}

fn parse_raw_roster(text: &str, path: &Path) -> Result<RawRoster, InputError> {
    serde_json::from_str(text).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
