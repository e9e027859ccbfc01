//! Human-readable reasons attached to each recommendation
//!
//! Highlights read the signals the scorers already produced. Thresholds here
//! mirror the scorer thresholds; change both together.

use crate::champion::{Character, Tagged};
use crate::heuristics::TeamNeeds;
use crate::taxonomy::{self, highlight_counter};

pub const NEEDS_MULTIPLE: f64 = 12.0;
pub const NEEDS_ROUND_OUT: f64 = 6.0;
pub const SYNERGY_STRONG: f64 = 10.0;
pub const SYNERGY_REASONABLE: f64 = 4.0;
pub const COUNTER_HEADLINE: f64 = 8.0;

pub const FALLBACK: &str = "Solid situational pick for this draft.";

/// Signals for one scored candidate
#[derive(Clone, Copy, Debug)]
pub struct HighlightInputs<'a> {
    pub candidate: &'a Character,
    pub role: &'a str,
    pub allies: &'a [&'a Character],
    pub enemies: &'a [&'a Character],
    /// Raw role fit
    pub role_fit: f64,
    pub needs: &'a TeamNeeds,
    /// Weighted positive synergy
    pub synergy_positive: f64,
    /// Raw positive counter score
    pub counter_positive: f64,
}

/// Ordered, never empty
pub fn build_highlights(inputs: &HighlightInputs<'_>) -> Vec<String> {
    let mut out = Vec::new();
    let c = inputs.candidate;
    let me = &inputs.needs.candidate;
    let team = &inputs.needs.allies;

    if !inputs.role.is_empty() {
        if inputs.role_fit > 0.0 {
            out.push(format!("{} is a strong {}.", c.name, inputs.role));
        } else if inputs.role_fit < 0.0 {
            out.push(format!("Off-role {} pick – more of a flex choice.", inputs.role));
        }
    }

    if inputs.needs.score >= NEEDS_MULTIPLE {
        out.push("Covers multiple team needs for this comp.".to_string());
    } else if inputs.needs.score >= NEEDS_ROUND_OUT {
        out.push("Helps round out your team’s composition.".to_string());
    }

    if me.frontline {
        match team.frontline {
            0 => out.push("Adds much-needed frontline.".to_string()),
            1 => out.push("Strengthens your frontline.".to_string()),
            _ => {}
        }
    }

    if me.engage {
        if team.engage == 0 {
            out.push("Gives your team reliable engage tools.".to_string());
        } else {
            out.push("Adds extra engage to start fights.".to_string());
        }
    }

    if me.poke && team.poke == 0 {
        out.push("Adds long-range poke and siege pressure.".to_string());
    }

    if me.waveclear {
        out.push("Provides strong waveclear and anti-siege.".to_string());
    }

    if me.hypercarry {
        out.push("Functions as a high-scaling late game carry.".to_string());
    }

    if me.enchanter {
        out.push(enchanter_line(inputs.allies, team.hypercarry));
    }

    if inputs.synergy_positive > SYNERGY_STRONG {
        out.push("Has strong synergy with your current picks.".to_string());
    } else if inputs.synergy_positive > SYNERGY_REASONABLE {
        out.push("Synergizes reasonably well with your team.".to_string());
    }

    if inputs.counter_positive >= COUNTER_HEADLINE {
        out.push(counter_line(c, inputs.enemies));
    }

    if out.is_empty() {
        out.push(FALLBACK.to_string());
    }

    out
}

fn enchanter_line(allies: &[&Character], hypercarry_allies: usize) -> String {
    if hypercarry_allies == 0 {
        return "Adds peel, shields, and utility to protect teammates.".to_string();
    }

    let names: Vec<&str> = allies
        .iter()
        .filter(|a| a.has_any_tag(taxonomy::HYPERCARRY))
        .take(2)
        .map(|a| a.name.as_str())
        .filter(|n| !n.is_empty())
        .collect();

    if names.is_empty() {
        "Protects and buffs your carries as an enchanter.".to_string()
    } else {
        format!("Pairs well with your hypercarries ({}).", names.join(", "))
    }
}

fn counter_line(candidate: &Character, enemies: &[&Character]) -> String {
    let answered: Vec<&str> = enemies
        .iter()
        .filter(|enemy| {
            enemy.tags.iter().any(|tag| {
                highlight_counter(tag).is_some_and(|hc| candidate.has_any_tag(hc.candidate_tags))
            })
        })
        .map(|enemy| enemy.name.as_str())
        .filter(|n| !n.is_empty())
        .take(2)
        .collect();

    if answered.is_empty() {
        "Has strong tools into the enemy composition.".to_string()
    } else {
        format!("Good into {}.", answered.join(", "))
    }
}
