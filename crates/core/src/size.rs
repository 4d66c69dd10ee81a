//! Garment size enumeration and the "not yet assigned" sentinel.
//!
//! Sizes are ordered `XS < S < M < L < XL < XXL < XXXL`; [`Size::Undefined`]
//! sorts after every real size so it lands last in reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Legacy label the HR screens store for an unassigned size.
pub const LEGACY_UNDEFINED_LABEL: &str = "Por definir";

/// A uniform size, or the explicit "not yet assigned" sentinel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "Option<String>")]
pub enum Size {
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
    #[serde(rename = "XXXL")]
    Xxxl,
    #[default]
    #[serde(rename = "undefined")]
    Undefined,
}

impl Size {
    /// Every real size, in ascending order. Excludes the sentinel.
    pub const ALL: [Size; 7] = [
        Size::Xs,
        Size::S,
        Size::M,
        Size::L,
        Size::Xl,
        Size::Xxl,
        Size::Xxxl,
    ];

    /// `true` for every value except [`Size::Undefined`].
    pub fn is_defined(self) -> bool {
        self != Size::Undefined
    }

    /// Short label printed on reports and labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
            Self::Xxxl => "XXXL",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("undefined")
            || trimmed.eq_ignore_ascii_case(LEGACY_UNDEFINED_LABEL)
        {
            return Ok(Size::Undefined);
        }

        Size::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown size: '{trimmed}'. Valid sizes: XS, S, M, L, XL, XXL, XXXL"
                ))
            })
    }
}

impl TryFrom<Option<String>> for Size {
    type Error = CoreError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value {
            Some(s) => s.parse(),
            None => Ok(Size::Undefined),
        }
    }
}
