//! Character index and eligibility filtering

use crate::champion::Character;
use crate::draft::{DraftState, Pick};
use rustc_hash::FxHashMap;

/// Id lookup over one call's catalog snapshot
#[derive(Clone, Debug, Default)]
pub struct CharacterIndex<'a> {
    by_id: FxHashMap<&'a str, &'a Character>,
}

impl<'a> CharacterIndex<'a> {
    /// Duplicate ids: the last entry wins
    pub fn build(characters: &'a [Character]) -> Self {
        let mut by_id = FxHashMap::default();
        by_id.reserve(characters.len());
        for character in characters {
            by_id.insert(character.id.as_str(), character);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Character> {
        self.by_id.get(id).copied()
    }

    /// Picks resolved to records, in pick order; unknown ids are dropped
    pub fn resolve(&self, picks: &[Pick]) -> Vec<&'a Character> {
        picks.iter().filter_map(|p| self.get(&p.id)).collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// A candidate may be recommended when it can fill `role` (empty = any role)
/// and is neither banned nor picked by either side.
pub fn is_eligible(candidate: &Character, role: &str, state: &DraftState) -> bool {
    if !role.is_empty() && !candidate.can_play(role) {
        return false;
    }
    !state.is_taken(&candidate.id)
}
