//! Role fit

use crate::champion::Character;

pub const ROLE_MATCH: f64 = 10.0;
pub const ROLE_UNKNOWN: f64 = -5.0;
pub const ROLE_MISMATCH: f64 = -6.0;

/// Neutral without a desired role.
///
/// The recommend pipeline filters by role first, so there it only ever sees
/// 0 or [`ROLE_MATCH`]; the penalties apply to unfiltered callers.
pub fn role_fit(candidate: &Character, desired_role: &str) -> f64 {
    if desired_role.is_empty() {
        0.0
    } else if candidate.roles.is_empty() {
        ROLE_UNKNOWN
    } else if candidate.can_play(desired_role) {
        ROLE_MATCH
    } else {
        ROLE_MISMATCH
    }
}
