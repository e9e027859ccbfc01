//! Flex value: multi-role picks hide information early in the draft

use crate::champion::Character;
use crate::draft::Phase;

pub fn flex_value(candidate: &Character, phase: Phase) -> f64 {
    let roles = candidate.roles.len();
    if roles <= 1 {
        return 0.0;
    }

    let factor = match phase {
        Phase::Early => 2.0,
        Phase::Mid => 1.0,
        Phase::Late => 0.3,
        Phase::Other => 1.0,
    };

    factor * (roles - 1).min(2) as f64
}
