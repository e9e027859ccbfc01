//! Counter-pick value against the enemy team

use super::Split;
use crate::champion::{Character, Tagged};
use crate::draft::Pick;
use crate::index::CharacterIndex;
use crate::taxonomy::{tag_counter, MATCHUP_EDGE};

/// Tag counters score once per matching enemy tag, however many candidate
/// tags answer it. Explicit matchups come from the enemy's own record.
pub fn counter_score(candidate: &Character, enemy_team: &[Pick], index: &CharacterIndex<'_>) -> Split {
    let mut split = Split::default();

    for enemy in index.resolve(enemy_team) {
        for tag in &enemy.tags {
            if let Some(tc) = tag_counter(tag) {
                if candidate.has_any_tag(tc.counters) {
                    split.positive += tc.score;
                }
            }
        }

        if enemy.counters.weak_against.iter().any(|id| *id == candidate.id) {
            split.positive += MATCHUP_EDGE;
        }
        if enemy.counters.strong_against.iter().any(|id| *id == candidate.id) {
            split.negative -= MATCHUP_EDGE;
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(candidate: &Character, enemies: &[Character]) -> Split {
        let picks: Vec<Pick> = enemies.iter().map(|e| Pick::new(e.id.clone())).collect();
        let index = CharacterIndex::build(enemies);
        counter_score(candidate, &picks, &index)
    }

    #[test]
    fn test_tag_counter_scores_once_per_enemy_tag() {
        let xerath = Character::new("Xerath", "Xerath").with_tags(&["Poke"]);
        // Engage and Hard Engage both answer Poke: still one hit
        let leona = Character::new("Leona", "Leona").with_tags(&["Engage", "Hard Engage"]);
        assert_eq!(score(&leona, &[xerath]).positive, 8.0);
    }

    #[test]
    fn test_each_enemy_tag_checked() {
        let jinx = Character::new("Jinx", "Jinx").with_tags(&["Hypercarry", "Poke"]);
        let diver = Character::new("Vi", "Vi").with_tags(&["Diver", "Engage"]);
        // Hypercarry (7) + Poke (8)
        assert_eq!(score(&diver, &[jinx]).positive, 15.0);
    }

    #[test]
    fn test_explicit_matchups() {
        let zed = Character::new("Zed", "Zed").with_counters(&["Malphite"], &["Lux"]);
        let malphite = Character::new("Malphite", "Malphite");
        let lux = Character::new("Lux", "Lux");

        assert_eq!(score(&malphite, &[zed.clone()]), Split { positive: 7.0, negative: 0.0 });
        assert_eq!(score(&lux, &[zed]), Split { positive: 0.0, negative: -7.0 });
    }

    #[test]
    fn test_no_enemies() {
        let lux = Character::new("Lux", "Lux").with_tags(&["Poke"]);
        assert_eq!(score(&lux, &[]), Split::default());
    }
}
