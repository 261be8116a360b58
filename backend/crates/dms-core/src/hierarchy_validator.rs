//! Legal parent/child ordering of storage units.
//!
//! Ranks form a strict chain: Room -> Cabinet -> Layer -> Box -> Folder.
//! A child must sit exactly one rank below its parent. Roots are not
//! checked here; callers decide what to accept when there is no parent.

use crate::UnitType;

/// The only rank that may be created directly under `unit_type`.
/// `None` for `Folder`, which is terminal.
pub fn next_type(unit_type: UnitType) -> Option<UnitType> {
    match unit_type {
        UnitType::Room => Some(UnitType::Cabinet),
        UnitType::Cabinet => Some(UnitType::Layer),
        UnitType::Layer => Some(UnitType::Box),
        UnitType::Box => Some(UnitType::Folder),
        UnitType::Folder => None,
    }
}

/// True iff `child_type` is exactly one rank below `parent_type`.
pub fn validate_child(parent_type: UnitType, child_type: UnitType) -> bool {
    next_type(parent_type) == Some(child_type)
}

/// Default offered to callers creating a unit without a parent.
/// Advisory only: roots of any rank are accepted.
pub fn suggested_root_type() -> UnitType {
    UnitType::Room
}
