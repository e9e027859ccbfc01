//! Role vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical role labels, in display order
pub const ROLE_KEYS: [&str; 5] = ["Top", "Jungle", "Middle", "Bottom", "Support"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Middle,
    Bottom,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Middle, Role::Bottom, Role::Support];

    pub fn as_str(&self) -> &'static str {
        ROLE_KEYS[*self as usize]
    }

    /// Exact match against the canonical label
    pub fn from_label(label: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a match-timeline lane label ("TOP", "BOTTOM", "UTILITY", "bot carry", ...)
/// onto a role. Checks run in order, so "bottom" never reaches the "mid" test.
pub fn lane_from_timeline(lane: &str) -> Option<Role> {
    let lane = lane.to_lowercase();
    if lane.contains("top") {
        Some(Role::Top)
    } else if lane.contains("jungle") {
        Some(Role::Jungle)
    } else if lane.contains("middle") || lane.contains("mid") {
        Some(Role::Middle)
    } else if lane.contains("bottom") || lane.contains("bot") || lane.contains("carry") {
        Some(Role::Bottom)
    } else if lane.contains("utility") || lane.contains("supp") {
        Some(Role::Support)
    } else {
        None
    }
}
