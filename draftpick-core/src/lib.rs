//! Draftpick Core - Draft recommendation engine
//!
//! This crate provides the pick-recommendation logic:
//! - Character and draft-state models with lenient JSON decoding
//! - Tag taxonomy and rule tables
//! - Sub-scorers (role fit, team needs, synergy, counters, flex, comfort)
//! - Weighted aggregation and highlight generation
//! - Catalog loading, Data Dragon tag enrichment and a TTL cache

pub mod lenient;
pub mod error;
pub mod champion;
pub mod draft;
pub mod roles;
pub mod taxonomy;
pub mod index;
pub mod heuristics;
pub mod weights;
pub mod highlights;
pub mod recommend;
pub mod tag_builder;
pub mod catalog;
pub mod cache;

// Re-exports for convenient access
pub use error::LoadError;
pub use champion::{Character, Counters, Tagged};
pub use draft::{DraftState, Phase, Pick};
pub use roles::{lane_from_timeline, Role, ROLE_KEYS};
pub use index::{is_eligible, CharacterIndex};
pub use heuristics::{Split, TeamNeeds, TeamProfile};
pub use weights::Weights;
pub use highlights::build_highlights;
pub use recommend::{
    recommend, RecommendConfig, RecommendRequest, ScoreBreakdown, ScoredCandidate, DEFAULT_LIMIT,
};
pub use tag_builder::{build_tags, TagSource};
pub use catalog::{Catalog, CatalogLoader, CatalogQuery};
pub use cache::{Clock, SystemClock, TtlCache};
