use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub fn default_log_filter() -> &'static str {
    "info"
}

/// Per-person fine amounts in won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineSchedule {
    pub non_voter: u64,
    pub absentee_excused: u64,
    pub absentee_unexcused: u64,
    pub latecomer_early: u64,
    pub latecomer_mid: u64,
    pub latecomer_late: u64,
    pub late_submitter: u64,
    pub failer: u64,
}

impl Default for FineSchedule {
    fn default() -> Self {
        Self {
            non_voter: 1_000,
            absentee_excused: 7_000,
            absentee_unexcused: 20_000,
            latecomer_early: 2_000,
            latecomer_mid: 4_000,
            latecomer_late: 6_000,
            late_submitter: 2_000,
            failer: 4_000,
        }
    }
}

/// Column layout of the roster sheet export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    pub name_column: String,
    pub grade_column: String,
    /// Title rows sitting above the header row.
    pub header_row: usize,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            name_column: "성명".to_string(),
            grade_column: "회원 등급".to_string(),
            header_row: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub fines: FineSchedule,
    /// Counted rows a person needs in a snapshot for the period to be complete.
    pub submission_threshold: usize,
    pub presenter_reward: u64,
    pub roster: RosterColumns,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            fines: FineSchedule::default(),
            submission_threshold: 3,
            presenter_reward: 500,
            roster: RosterColumns::default(),
        }
    }
}

impl LedgerConfig {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config in {}", path.display()))
    }
}
