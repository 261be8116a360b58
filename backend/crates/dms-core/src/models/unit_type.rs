use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Rank of a storage unit in the containment hierarchy, largest first.
///
/// The declaration order is the containment order: a `Room` holds
/// `Cabinet`s, a `Cabinet` holds `Layer`s and so on down to `Folder`,
/// which holds nothing but documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Room,
    Cabinet,
    Layer,
    Box,
    Folder,
}

impl UnitType {
    /// All ranks in containment order.
    pub const ALL: [UnitType; 5] = [
        UnitType::Room,
        UnitType::Cabinet,
        UnitType::Layer,
        UnitType::Box,
        UnitType::Folder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Cabinet => "cabinet",
            Self::Layer => "layer",
            Self::Box => "box",
            Self::Folder => "folder",
        }
    }

    /// 1-based position in the hierarchy (Room = 1, Folder = 5).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Room => 1,
            Self::Cabinet => 2,
            Self::Layer => 3,
            Self::Box => 4,
            Self::Folder => 5,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

impl FromStr for UnitType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "room" => Ok(Self::Room),
            "cabinet" => Ok(Self::Cabinet),
            "layer" => Ok(Self::Layer),
            "box" => Ok(Self::Box),
            "folder" => Ok(Self::Folder),
            _ => Err(CoreError::InvalidUnitType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
