//! Sub-scorers
//!
//! Each scorer is a pure function of one candidate and the draft snapshot.
//! Raw scores are unweighted; the aggregator applies the weight vector.

pub mod comfort;
pub mod counter;
pub mod flex;
pub mod role_fit;
pub mod synergy;
pub mod team_needs;

pub use comfort::comfort_score;
pub use counter::counter_score;
pub use flex::flex_value;
pub use role_fit::role_fit;
pub use synergy::synergy_score;
pub use team_needs::{evaluate_team_needs, Archetypes, TeamNeeds, TeamProfile};

/// Raw score split into its positive and negative contributions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Split {
    pub positive: f64,
    /// Zero or below
    pub negative: f64,
}

impl Split {
    pub fn net(&self) -> f64 {
        self.positive + self.negative
    }
}
