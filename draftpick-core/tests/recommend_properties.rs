//! Integration tests for the recommendation engine
//!
//! Invariants are checked over seeded random drafts; scenarios pin down
//! individual scoring rules end to end.

use draftpick_core::{
    recommend, Catalog, Character, DraftState, Phase, Pick, RecommendConfig, RecommendRequest,
    Weights, ROLE_KEYS,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const TAG_POOL: &[&str] = &[
    "Tank", "Frontline", "Bruiser", "Engage", "Hard Engage", "Diver", "Poke", "Siege", "Enchanter",
    "Peel", "Hypercarry", "Marksman", "Mage", "AP", "AD", "Assassin", "Burst", "Pick", "Waveclear",
    "AoE", "Wombo", "Splitpush", "Disengage", "Stun", "Vision", "Global",
];

/// The four-character pool the engine was first validated against
fn starter_pool() -> Vec<Character> {
    vec![
        Character::new("Aatrox", "Aatrox")
            .with_roles(&["Top"])
            .with_tags(&["Fighter", "Frontline", "Diver"]),
        Character::new("Alistar", "Alistar")
            .with_roles(&["Support"])
            .with_tags(&["Tank", "Frontline", "Engage", "Hard Engage", "Support"]),
        Character::new("Ashe", "Ashe")
            .with_roles(&["Bottom", "Support"])
            .with_tags(&["Marksman", "Hypercarry", "Poke"]),
        Character::new("Ahri", "Ahri")
            .with_roles(&["Middle"])
            .with_tags(&["Mage", "Assassin", "Pick"]),
    ]
}

fn random_character(rng: &mut ChaCha8Rng, i: usize, ids: &[String]) -> Character {
    let role_count = rng.gen_range(0..=3);
    let roles: Vec<&str> = ROLE_KEYS.choose_multiple(rng, role_count).copied().collect();
    let tag_count = rng.gen_range(0..=5);
    let tags: Vec<&str> = TAG_POOL.choose_multiple(rng, tag_count).copied().collect();

    let mut c = Character::new(format!("c{}", i), format!("Champ {}", i))
        .with_roles(&roles)
        .with_tags(&tags);

    if !ids.is_empty() && rng.gen_bool(0.2) {
        c.synergies = ids.choose_multiple(rng, 2).cloned().collect();
    }
    if !ids.is_empty() && rng.gen_bool(0.2) {
        c.counters.weak_against = ids.choose_multiple(rng, 2).cloned().collect();
        c.counters.strong_against = ids.choose_multiple(rng, 1).cloned().collect();
    }
    if rng.gen_bool(0.3) {
        c.mastery_score = Some(rng.gen_range(0.0..5.0));
    }
    c
}

fn random_draft(rng: &mut ChaCha8Rng) -> (String, Vec<Character>, DraftState, usize) {
    let size = rng.gen_range(0..40);
    let ids: Vec<String> = (0..size).map(|i| format!("c{}", i)).collect();
    let characters: Vec<Character> = (0..size).map(|i| random_character(rng, i, &ids)).collect();

    let mut shuffled = ids.clone();
    shuffled.shuffle(rng);
    let mut taken = shuffled.into_iter();

    let mut state = DraftState::default();
    for _ in 0..rng.gen_range(0..=5) {
        if let Some(id) = taken.next() {
            state.ally_team.push(Pick::new(id));
        }
    }
    for _ in 0..rng.gen_range(0..=5) {
        if let Some(id) = taken.next() {
            state.enemy_team.push(Pick::new(id));
        }
    }
    for _ in 0..rng.gen_range(0..=6) {
        if let Some(id) = taken.next() {
            state.bans.push(id);
        }
    }
    // Picks that are not in the catalog are ignored
    if rng.gen_bool(0.3) {
        state.enemy_team.push(Pick::new("ghost"));
    }
    state.phase = *[Phase::Early, Phase::Mid, Phase::Late, Phase::Other]
        .choose(rng)
        .unwrap_or(&Phase::Mid);

    let role = if rng.gen_bool(0.2) {
        String::new()
    } else {
        ROLE_KEYS.choose(rng).copied().unwrap_or("Top").to_string()
    };
    let limit = rng.gen_range(0..15);

    (role, characters, state, limit)
}

// ============================================================================
// INVARIANTS OVER RANDOM DRAFTS
// ============================================================================

#[test]
fn test_invariants_hold_for_random_drafts() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xD4AF7);

    for _ in 0..300 {
        let (role, characters, state, limit) = random_draft(&mut rng);
        let config = RecommendConfig::default().with_limit(limit);
        let out = recommend(&role, &characters, &state, &config);

        let eligible = characters
            .iter()
            .filter(|c| draftpick_core::is_eligible(c, &role, &state))
            .count();
        assert!(out.len() <= limit);
        assert!(out.len() <= eligible);
        assert_eq!(out.len(), limit.min(eligible));

        for candidate in &out {
            assert!(!state.is_taken(&candidate.id), "{} was taken", candidate.id);
            if !role.is_empty() {
                assert!(candidate.roles.contains(&role));
            }
            assert!(!candidate.highlights.is_empty());
            assert!((candidate.total - candidate.score_breakdown.total()).abs() < 1e-9);
        }

        for pair in out.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }
}

#[test]
fn test_extreme_comfort_keeps_totals_ordered() {
    let characters: Vec<Character> = (0..40)
        .map(|i| {
            let c = Character::new(format!("c{}", i), format!("Champ {}", i))
                .with_roles(&["Top"])
                .with_tags(&["Tank", "Frontline"]);
            if i % 3 == 0 {
                c.with_mastery(1e308)
            } else {
                c
            }
        })
        .collect();
    let mut state = DraftState::default();
    for c in characters.iter().step_by(3) {
        state = state.with_comfort(&c.id, 1e308);
    }

    let boosted = Weights {
        comfort_boost: Some(1.5),
        ..Weights::default()
    };
    for weights in [Weights::default(), boosted] {
        let config = RecommendConfig::default().with_weights(weights).with_limit(40);
        let out = recommend("Top", &characters, &state, &config);
        assert_eq!(out.len(), 40);

        for candidate in &out {
            assert!(candidate.total.is_finite(), "{} total {}", candidate.id, candidate.total);
            assert!(candidate.score_breakdown.s_comfort.is_finite());
        }
        for pair in out.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }
}

#[test]
fn test_stored_synergy_pairs_score() {
    let catalog = Catalog::from_json_str(
        r#"[{"id": "Ally", "roles": ["Top"]}, {"id": "Fan", "roles": ["Support"], "synergy": ["Ally"]}]"#,
    )
    .unwrap();
    let state = DraftState::default().with_ally("Ally");
    let out = recommend("Support", &catalog.champions, &state, &RecommendConfig::default());

    assert_eq!(out[0].id, "Fan");
    assert!(out[0].score_breakdown.s_syn_positive > 0.0);
}

#[test]
fn test_recommend_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..50 {
        let (role, characters, state, limit) = random_draft(&mut rng);
        let config = RecommendConfig::default().with_limit(limit);
        let first = recommend(&role, &characters, &state, &config);
        let second = recommend(&role, &characters, &state, &config);
        assert_eq!(first, second);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_scoring_matches_sequential() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..50 {
        let (role, characters, state, limit) = random_draft(&mut rng);
        let config = RecommendConfig::default().with_limit(limit);
        let seq = recommend(&role, &characters, &state, &config);
        let par = recommend(&role, &characters, &state, &config.clone().parallel(true));
        assert_eq!(seq, par);
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_picked_ally_is_not_recommended() {
    let characters = vec![
        Character::new("A", "A").with_roles(&["Top"]),
        Character::new("B", "B").with_roles(&["Top"]),
    ];
    let state = DraftState::default().with_ally("A");
    let out = recommend("Top", &characters, &state, &RecommendConfig::default());
    let ids: Vec<_> = out.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["B"]);
}

#[test]
fn test_banned_character_is_never_recommended() {
    let characters = vec![
        Character::new("X", "X").with_roles(&["Middle"]),
        Character::new("Y", "Y").with_roles(&["Middle"]),
    ];
    let state = DraftState::default().with_ban("X");
    let out = recommend("Middle", &characters, &state, &RecommendConfig::default());
    assert!(out.iter().all(|c| c.id != "X"));
    assert_eq!(out.len(), 1);
}

#[test]
fn test_frontline_fills_empty_comp() {
    let characters = vec![
        Character::new("Plain", "Plain").with_roles(&["Top"]),
        Character::new("Wall", "Wall")
            .with_roles(&["Top"])
            .with_tags(&["Tank", "Frontline"]),
    ];
    let out = recommend("", &characters, &DraftState::default(), &RecommendConfig::default());

    assert_eq!(out[0].id, "Wall");
    let wall = out[0].score_breakdown;
    let plain = out[1].score_breakdown;
    assert!((wall.s_needs - plain.s_needs - 10.0 * 2.6).abs() < 1e-9);
    assert!(out[0].highlights.contains(&"Adds much-needed frontline.".to_string()));
}

#[test]
fn test_authored_synergy_adds_pair_affinity() {
    let characters = vec![
        Character::new("Ally", "Ally"),
        Character::new("Fan", "Fan").with_synergies(&["Ally"]),
        Character::new("Stranger", "Stranger"),
    ];
    let state = DraftState::default().with_ally("Ally");
    let config = RecommendConfig::default().with_weights(Weights {
        synergy: Some(1.0),
        ..Weights::empty()
    });
    let out = recommend("", &characters, &state, &config);

    let fan = out.iter().find(|c| c.id == "Fan").map(|c| c.score_breakdown.s_syn_positive);
    let stranger = out
        .iter()
        .find(|c| c.id == "Stranger")
        .map(|c| c.score_breakdown.s_syn_positive);
    assert_eq!(fan, Some(6.0));
    assert_eq!(stranger, Some(0.0));
}

#[test]
fn test_zero_limit_returns_nothing() {
    let config = RecommendConfig::default().with_limit(0);
    assert!(recommend("Top", &starter_pool(), &DraftState::default(), &config).is_empty());
}

#[test]
fn test_empty_and_unknown_inputs_do_not_fail() {
    let config = RecommendConfig::default();
    assert!(recommend("Top", &[], &DraftState::default(), &config).is_empty());
    assert!(recommend("Goalkeeper", &starter_pool(), &DraftState::default(), &config).is_empty());

    let state = DraftState::default().with_ally("Nobody").with_enemy("Nobody2");
    assert_eq!(recommend("", &starter_pool(), &state, &config).len(), 4);
}

#[test]
fn test_starter_pool_role_filtering() {
    let out = recommend("Support", &starter_pool(), &DraftState::default(), &RecommendConfig::default());
    let keys: Vec<_> = out.iter().map(|c| c.key.as_str()).collect();
    assert!(keys.contains(&"Alistar"));
    assert!(keys.contains(&"Ashe"));
    assert!(!keys.contains(&"Aatrox"));
}

#[test]
fn test_prefers_engage_tank_for_backline_comp() {
    let state = DraftState::default().with_ally("Ashe").with_ally("Ahri");
    let config = RecommendConfig::default().with_limit(5);
    let out = recommend("Support", &starter_pool(), &state, &config);

    let top = &out[0];
    assert_eq!(top.key, "Alistar");
    // needs: frontline 10 + engage 8 + support engage-into-poke 2
    assert!((top.score_breakdown.s_needs - 20.0 * 2.6).abs() < 1e-9);
    assert_eq!(
        top.highlights[..3],
        [
            "Alistar is a strong Support.".to_string(),
            "Covers multiple team needs for this comp.".to_string(),
            "Adds much-needed frontline.".to_string(),
        ]
    );
}

#[test]
fn test_counter_matchup_beats_tag_counter_alone() {
    let characters = vec![
        Character::new("Zed", "Zed")
            .with_tags(&["Assassin"])
            .with_counters(&["Malphite"], &[]),
        Character::new("Malphite", "Malphite").with_tags(&["Tank"]),
        Character::new("Leona", "Leona").with_tags(&["Tank"]),
    ];
    let state = DraftState::default().with_enemy("Zed");
    let config = RecommendConfig::default().with_weights(Weights {
        counter: Some(1.0),
        ..Weights::empty()
    });
    let out = recommend("", &characters, &state, &config);

    assert_eq!(out[0].id, "Malphite");
    assert_eq!(out[0].score_breakdown.s_counter_positive, 14.0);
    assert_eq!(out[1].score_breakdown.s_counter_positive, 7.0);
}

#[test]
fn test_request_from_wire_json() {
    let catalog = Catalog::new(starter_pool());
    let body = serde_json::json!({
        "role": "Middle",
        "characters": catalog.champions,
        "draftState": {
            "allyTeam": [{"id": "Alistar"}, "junk", {"role": "Top"}],
            "enemyTeam": null,
            "bans": "nope",
            "phase": "late"
        },
        "weights": {"roleFit": 1, "teamNeeds": "high"},
        "limit": 3
    });
    let request: RecommendRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.draft_state.ally_team.len(), 1);
    assert!(request.draft_state.enemy_team.is_empty());
    assert!(request.draft_state.bans.is_empty());

    let weights = request.weights.clone().unwrap_or_else(Weights::empty);
    assert_eq!(weights.team_needs(), 0.0);

    let out = request.run();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "Ahri");
    assert_eq!(out[0].score_breakdown.s_role, 10.0);
}

#[test]
fn test_request_null_role_means_any_role() {
    let body = serde_json::json!({
        "role": null,
        "characters": starter_pool(),
        "draftState": {"allyTeam": [{"id": "Ashe"}]}
    });
    let request: RecommendRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.role, "");

    let out = request.run();
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|c| c.id != "Ashe"));
}
