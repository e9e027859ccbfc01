//! Team needs: how well a candidate fills gaps in the ally composition
//!
//! All thresholds count current allies only, never the candidate itself.

use crate::champion::{Character, Tagged};
use crate::draft::{Phase, Pick};
use crate::index::CharacterIndex;
use crate::roles::Role;
use crate::taxonomy;

/// Archetype membership of one character
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Archetypes {
    pub frontline: bool,
    pub engage: bool,
    pub ap: bool,
    pub ad: bool,
    pub cc: bool,
    pub poke: bool,
    pub hypercarry: bool,
    pub assassin: bool,
    pub enchanter: bool,
    pub waveclear: bool,
}

impl Archetypes {
    pub fn of<T: Tagged + ?Sized>(c: &T) -> Self {
        Self {
            frontline: c.has_any_tag(taxonomy::FRONTLINE),
            engage: c.has_any_tag(taxonomy::ENGAGE),
            ap: c.has_any_tag(taxonomy::AP),
            ad: c.has_any_tag(taxonomy::AD),
            cc: c.has_any_tag(taxonomy::CC),
            poke: c.has_any_tag(taxonomy::POKE),
            hypercarry: c.has_any_tag(taxonomy::HYPERCARRY),
            assassin: c.has_any_tag(taxonomy::ASSASSIN),
            enchanter: c.has_any_tag(taxonomy::ENCHANTER),
            waveclear: c.has_any_tag(taxonomy::WAVECLEAR),
        }
    }
}

/// Archetype counts over the resolved ally team
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeamProfile {
    pub frontline: usize,
    pub engage: usize,
    pub ap: usize,
    pub ad: usize,
    pub cc: usize,
    pub poke: usize,
    pub hypercarry: usize,
    pub assassin: usize,
    pub enchanter: usize,
    pub waveclear: usize,
}

impl TeamProfile {
    pub fn of(allies: &[&Character]) -> Self {
        let mut profile = Self::default();
        for ally in allies {
            profile.add(Archetypes::of(*ally));
        }
        profile
    }

    fn add(&mut self, a: Archetypes) {
        self.frontline += a.frontline as usize;
        self.engage += a.engage as usize;
        self.ap += a.ap as usize;
        self.ad += a.ad as usize;
        self.cc += a.cc as usize;
        self.poke += a.poke as usize;
        self.hypercarry += a.hypercarry as usize;
        self.assassin += a.assassin as usize;
        self.enchanter += a.enchanter as usize;
        self.waveclear += a.waveclear as usize;
    }
}

/// Team-needs result, kept whole so highlights read the same counts
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TeamNeeds {
    pub allies: TeamProfile,
    pub candidate: Archetypes,
    pub score: f64,
}

pub fn evaluate_team_needs(
    candidate: &Character,
    ally_team: &[Pick],
    index: &CharacterIndex<'_>,
    desired_role: &str,
    phase: Phase,
) -> TeamNeeds {
    let allies = TeamProfile::of(&index.resolve(ally_team));
    let cand = Archetypes::of(candidate);
    let score = score_needs(&allies, &cand, desired_role, phase);

    TeamNeeds {
        allies,
        candidate: cand,
        score,
    }
}

fn score_needs(a: &TeamProfile, c: &Archetypes, desired_role: &str, phase: Phase) -> f64 {
    let mut score = 0.0;

    // Frontline balance
    if c.frontline {
        score += match a.frontline {
            0 => 10.0,
            1 => 4.0,
            _ => -3.0,
        };
    }

    // Engage presence
    if c.engage {
        if a.engage == 0 {
            score += 8.0;
        } else if a.engage >= 2 {
            score -= 2.0;
        }
    }

    // Damage profile, each side on its own
    if c.ap && a.ap == 0 {
        score += 6.0;
    }
    if c.ad && a.ad == 0 {
        score += 6.0;
    }
    if c.ap && a.ap >= 3 {
        score -= 4.0;
    }
    if c.ad && a.ad >= 3 {
        score -= 4.0;
    }

    if c.cc && a.cc < 2 {
        score += 5.0;
    }

    if c.waveclear {
        if a.waveclear == 0 {
            score += 4.0;
        } else if a.waveclear >= 3 {
            score -= 2.0;
        }
    }

    // Carry / enchanter pairing
    if c.enchanter && a.hypercarry >= 1 {
        score += 6.0;
    }
    if c.hypercarry && a.enchanter >= 1 {
        score += 4.0;
    }

    // Phase nuance
    if phase == Phase::Early && c.poke && a.frontline == 0 && a.engage == 0 {
        score -= 3.0;
    }
    if phase == Phase::Late && c.hypercarry {
        score += 3.0;
    }

    match Role::from_label(desired_role) {
        Some(Role::Support) => {
            if c.enchanter && a.hypercarry > 0 {
                score += 3.0;
            }
            if c.engage && a.poke > 0 && a.frontline == 0 {
                score += 2.0;
            }
        }
        Some(Role::Jungle) => {
            if c.engage && a.engage == 0 {
                score += 4.0;
            }
            if phase == Phase::Early && c.engage {
                score += 2.0;
            }
        }
        Some(Role::Top) => {
            if c.frontline && a.frontline == 0 {
                score += 4.0;
            }
        }
        _ => {}
    }

    score
}
