//! Location category enum shared across the world, mobility and contagion
//! crates.
//!
//! The set is closed: loaders parse free-form strings through
//! [`LocationKind::from_str`] once, at construction time, so nothing
//! downstream ever branches on a string.

use std::str::FromStr;

use crate::CoreError;

/// The category of a shared location.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    Household,
    Workplace,
    Store,
    Park,
    Misc,
}

impl LocationKind {
    pub const ALL: [LocationKind; 5] = [
        LocationKind::Household,
        LocationKind::Workplace,
        LocationKind::Store,
        LocationKind::Park,
        LocationKind::Misc,
    ];

    /// `true` for the categories chosen by the exploration/exploitation
    /// selector (stores, parks, misc).
    #[inline]
    pub fn is_mobility_category(self) -> bool {
        matches!(self, LocationKind::Store | LocationKind::Park | LocationKind::Misc)
    }

    /// Households never produce encounter records among occupants.
    #[inline]
    pub fn logs_encounters(self) -> bool {
        !matches!(self, LocationKind::Household)
    }

    /// Dense index into per-kind tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label used in CSV inputs and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Household => "household",
            LocationKind::Workplace => "workplace",
            LocationKind::Store     => "store",
            LocationKind::Park      => "park",
            LocationKind::Misc      => "misc",
        }
    }
}

impl FromStr for LocationKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "household" | "home"  => Ok(LocationKind::Household),
            "workplace" | "work"  => Ok(LocationKind::Workplace),
            "store" | "stores"    => Ok(LocationKind::Store),
            "park" | "parks"      => Ok(LocationKind::Park),
            "misc" | "miscs"      => Ok(LocationKind::Misc),
            other => Err(CoreError::Parse(format!("unknown location kind {other:?}"))),
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
