//! Player comfort

use crate::champion::Character;
use crate::draft::DraftState;

/// Draft-level override plus the character's own mastery signal.
///
/// A sum that overflows to infinity counts as no comfort.
pub fn comfort_score(candidate: &Character, state: &DraftState) -> f64 {
    let raw = state.comfort_for(&candidate.id).unwrap_or(0.0) + candidate.mastery();
    if raw.is_finite() {
        raw
    } else {
        0.0
    }
}
