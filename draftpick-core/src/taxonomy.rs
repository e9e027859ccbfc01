//! Tag taxonomy and heuristic rule tables
//!
//! Every tag group and rule the scorers and the highlight generator read
//! lives here, as data. Scorers and highlights share the same groups.

// ============================================================================
// ARCHETYPE GROUPS
// ============================================================================

pub const FRONTLINE: &[&str] = &["Tank", "Bruiser", "Warden", "Vanguard", "Frontline"];
pub const ENGAGE: &[&str] = &["Engage", "Hard Engage", "Initiator", "Diver"];
pub const POKE: &[&str] = &["Poke", "Siege"];
pub const ENCHANTER: &[&str] = &["Enchanter", "Healer", "Peel"];
pub const HYPERCARRY: &[&str] = &["Hypercarry", "Scaling", "Marksman", "DPS"];
pub const ASSASSIN: &[&str] = &["Assassin", "Burst", "Pick"];
pub const AP: &[&str] = &["Mage", "AP", "Battle Mage", "Artillery"];
pub const AD: &[&str] = &["AD", "Marksman", "Skirmisher", "Fighter"];
pub const CC: &[&str] = &["CC", "Hard CC", "Root", "Stun", "Knockup", "Charm", "Fear"];
pub const WAVECLEAR: &[&str] = &["Waveclear", "Clear", "Control Mage", "Anti-Siege"];

// ============================================================================
// SYNERGY
// ============================================================================

/// Ally carrying any `ally_tags` + candidate carrying any `candidate_tags`
#[derive(Clone, Copy, Debug)]
pub struct SynergyRule {
    pub ally_tags: &'static [&'static str],
    pub candidate_tags: &'static [&'static str],
    pub score: f64,
}

pub static SYNERGY_RULES: [SynergyRule; 6] = [
    SynergyRule {
        ally_tags: &["Hard Engage", "Tank", "Diver", "Initiator"],
        candidate_tags: &["AoE", "Follow-up", "Burst", "Skirmisher"],
        score: 12.0,
    },
    SynergyRule {
        ally_tags: &["AoE", "Wombo"],
        candidate_tags: &["AoE", "CC Chain", "Setup"],
        score: 12.0,
    },
    SynergyRule {
        ally_tags: &["Poke", "Siege"],
        candidate_tags: &["Disengage", "Peel"],
        score: 8.0,
    },
    SynergyRule {
        ally_tags: &["Hypercarry", "Scaling"],
        candidate_tags: &["Enchanter", "Peel"],
        score: 10.0,
    },
    SynergyRule {
        ally_tags: &["Assassin", "Pick"],
        candidate_tags: &["Vision", "Pick", "Hard CC"],
        score: 8.0,
    },
    SynergyRule {
        ally_tags: &["Splitpush"],
        candidate_tags: &["Waveclear", "Global", "Cross-map"],
        score: 6.0,
    },
];

/// Same exact tag on ally and candidate; `penalty` is negative
#[derive(Clone, Copy, Debug)]
pub struct AntiSynergy {
    pub tag: &'static str,
    pub penalty: f64,
}

pub static ANTI_SYNERGY: [AntiSynergy; 4] = [
    AntiSynergy { tag: "Poke", penalty: -2.0 },
    AntiSynergy { tag: "Assassin", penalty: -4.0 },
    AntiSynergy { tag: "Hypercarry", penalty: -5.0 },
    AntiSynergy { tag: "Enchanter", penalty: -4.0 },
];

/// Authored pair affinity, per listing direction
pub const PAIR_AFFINITY: f64 = 6.0;

// ============================================================================
// COUNTERS
// ============================================================================

/// Enemy tag and the candidate tags that answer it
#[derive(Clone, Copy, Debug)]
pub struct TagCounter {
    pub enemy_tag: &'static str,
    pub counters: &'static [&'static str],
    pub score: f64,
}

pub static TAG_COUNTERS: [TagCounter; 5] = [
    TagCounter {
        enemy_tag: "Poke",
        counters: &["Engage", "Hard Engage", "Gapclose"],
        score: 8.0,
    },
    TagCounter {
        enemy_tag: "Hard Engage",
        counters: &["Disengage", "Peel"],
        score: 8.0,
    },
    TagCounter {
        enemy_tag: "Assassin",
        counters: &["Tank", "Peel", "Point-and-Click CC"],
        score: 7.0,
    },
    TagCounter {
        enemy_tag: "Hypercarry",
        counters: &["Diver", "Burst", "Assassin"],
        score: 7.0,
    },
    TagCounter {
        enemy_tag: "Splitpush",
        counters: &["Waveclear", "Hard Engage"],
        score: 6.0,
    },
];

/// Explicit matchup edge (`weakAgainst` / `strongAgainst`)
pub const MATCHUP_EDGE: f64 = 7.0;

pub fn tag_counter(enemy_tag: &str) -> Option<&'static TagCounter> {
    TAG_COUNTERS.iter().find(|tc| tc.enemy_tag == enemy_tag)
}

/// Enemy tag and the candidate tags the highlight generator names it for.
///
/// Narrower than [`TAG_COUNTERS`] and keyed on mirror archetypes.
#[derive(Clone, Copy, Debug)]
pub struct HighlightCounter {
    pub enemy_tag: &'static str,
    pub candidate_tags: &'static [&'static str],
}

pub static HIGHLIGHT_COUNTERS: [HighlightCounter; 3] = [
    HighlightCounter {
        enemy_tag: "Poke",
        candidate_tags: &["Poke", "Siege"],
    },
    HighlightCounter {
        enemy_tag: "Hypercarry",
        candidate_tags: &["Hypercarry", "Scaling", "Marksman"],
    },
    HighlightCounter {
        enemy_tag: "Assassin",
        candidate_tags: &["Assassin", "Burst"],
    },
];

pub fn highlight_counter(enemy_tag: &str) -> Option<&'static HighlightCounter> {
    HIGHLIGHT_COUNTERS.iter().find(|hc| hc.enemy_tag == enemy_tag)
}
