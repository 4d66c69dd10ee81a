//! Branch selection for a label run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::CoreError;

/// Which branches a label run covers, keyed on packaging status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchFilterMode {
    #[default]
    All,
    /// Not yet packaged.
    Pending,
    Packaged,
}

impl BranchFilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Packaged => "packaged",
        }
    }

    /// Whether `branch` passes this mode.
    pub fn matches(self, branch: &Branch) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !branch.is_packaged,
            Self::Packaged => branch.is_packaged,
        }
    }
}

impl fmt::Display for BranchFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchFilterMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "packaged" => Ok(Self::Packaged),
            other => Err(CoreError::Validation(format!(
                "Unknown branch filter mode: '{other}'. Valid modes: all, pending, packaged"
            ))),
        }
    }
}

/// Stable filter of `branches` by packaging status.
pub fn select(branches: &[Branch], mode: BranchFilterMode) -> Vec<&Branch> {
    branches.iter().filter(|b| mode.matches(b)).collect()
}

/// Packaging-status filter optionally narrowed to a single zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchFilter {
    #[serde(default)]
    pub mode: BranchFilterMode,
    #[serde(default)]
    pub zone: Option<String>,
}

impl BranchFilter {
    pub fn new(mode: BranchFilterMode) -> Self {
        Self { mode, zone: None }
    }

    pub fn in_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    pub fn apply<'a>(&self, branches: &'a [Branch]) -> Vec<&'a Branch> {
        select(branches, self.mode)
            .into_iter()
            .filter(|b| match &self.zone {
                Some(zone) => b.zone.as_deref() == Some(zone.as_str()),
                None => true,
            })
            .collect()
    }
}

/// Branch counts per mode, shown next to each choice on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeCounts {
    pub all: usize,
    pub pending: usize,
    pub packaged: usize,
}

pub fn count_by_mode(branches: &[Branch]) -> ModeCounts {
    let packaged = branches.iter().filter(|b| b.is_packaged).count();
    ModeCounts {
        all: branches.len(),
        pending: branches.len() - packaged,
        packaged,
    }
}
