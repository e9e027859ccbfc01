//! Synergy with the ally team

use super::Split;
use crate::champion::{Character, Tagged};
use crate::draft::Pick;
use crate::index::CharacterIndex;
use crate::taxonomy::{ANTI_SYNERGY, PAIR_AFFINITY, SYNERGY_RULES};

/// Summed over every resolved ally. Several rules may fire per pair.
pub fn synergy_score(candidate: &Character, ally_team: &[Pick], index: &CharacterIndex<'_>) -> Split {
    let mut split = Split::default();

    for ally in index.resolve(ally_team) {
        for rule in &SYNERGY_RULES {
            if ally.has_any_tag(rule.ally_tags) && candidate.has_any_tag(rule.candidate_tags) {
                split.positive += rule.score;
            }
        }

        // Authored pairs, one bonus per listing direction
        if ally.has_synergy_with(&candidate.id) {
            split.positive += PAIR_AFFINITY;
        }
        if candidate.has_synergy_with(&ally.id) {
            split.positive += PAIR_AFFINITY;
        }

        for anti in &ANTI_SYNERGY {
            if ally.has_tag(anti.tag) && candidate.has_tag(anti.tag) {
                split.negative += anti.penalty;
            }
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(candidate: &Character, allies: &[Character]) -> Split {
        let picks: Vec<Pick> = allies.iter().map(|a| Pick::new(a.id.clone())).collect();
        let index = CharacterIndex::build(allies);
        synergy_score(candidate, &picks, &index)
    }

    #[test]
    fn test_engage_follow_up_rule() {
        let malphite = Character::new("Malphite", "Malphite").with_tags(&["Tank", "Hard Engage"]);
        let yasuo = Character::new("Yasuo", "Yasuo").with_tags(&["Skirmisher"]);
        assert_eq!(score(&yasuo, &[malphite]).positive, 12.0);
    }

    #[test]
    fn test_multiple_rules_fire_per_pair() {
        let ally = Character::new("Orianna", "Orianna").with_tags(&["AoE", "Tank"]);
        let cand = Character::new("Kennen", "Kennen").with_tags(&["AoE"]);
        // engage->follow-up (AoE) and wombo->AoE
        assert_eq!(score(&cand, &[ally]).positive, 24.0);
    }

    #[test]
    fn test_pair_affinity_counts_each_direction() {
        let xayah = Character::new("Xayah", "Xayah").with_synergies(&["Rakan"]);
        let rakan = Character::new("Rakan", "Rakan").with_synergies(&["Xayah"]);
        let plain = Character::new("Rakan", "Rakan");

        assert_eq!(score(&plain, &[xayah.clone()]).positive, 6.0);
        assert_eq!(score(&rakan, &[xayah]).positive, 12.0);
    }

    #[test]
    fn test_anti_synergy() {
        let ally = Character::new("Jinx", "Jinx").with_tags(&["Hypercarry", "Poke"]);
        let cand = Character::new("Vayne", "Vayne").with_tags(&["Hypercarry", "Poke"]);
        let split = score(&cand, &[ally]);
        assert_eq!(split.negative, -7.0);
        assert_eq!(split.positive, 0.0);
    }

    #[test]
    fn test_unknown_allies_are_ignored() {
        let cand = Character::new("Lulu", "Lulu").with_tags(&["Enchanter"]);
        let picks = vec![Pick::new("Ghost")];
        let index = CharacterIndex::default();
        assert_eq!(synergy_score(&cand, &picks, &index), Split::default());
    }
}
