//! Recommend command - rank picks for a draft
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_inputs(), build_state(), build_config(), report_results()
//! - Level 3: load_weights(), describe_allies()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use draftpick_core::{
    recommend, Catalog, CharacterIndex, DraftState, Phase, Pick, RecommendConfig,
    ScoredCandidate, TeamProfile, Weights, DEFAULT_LIMIT,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RecommendArgs {
    /// Catalog JSON file (character array, wrapped catalog or Data Dragon)
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// Draft state JSON file; flags below are applied on top of it
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Role to fill (Top, Jungle, Middle, Bottom, Support); any role when omitted
    #[arg(long, default_value = "")]
    pub role: String,

    /// Ally pick id (repeatable)
    #[arg(long = "ally", value_name = "ID")]
    pub allies: Vec<String>,

    /// Enemy pick id (repeatable)
    #[arg(long = "enemy", value_name = "ID")]
    pub enemies: Vec<String>,

    /// Banned id (repeatable)
    #[arg(long = "ban", value_name = "ID")]
    pub bans: Vec<String>,

    /// Draft phase: early, mid or late
    #[arg(long)]
    pub phase: Option<String>,

    /// Weight vector JSON file (tuned defaults when omitted)
    #[arg(long, value_name = "FILE")]
    pub weights: Option<PathBuf>,

    /// Maximum number of recommendations
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Score candidates in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run recommend command
///
/// This function reads like a table of contents:
/// 1. Load catalog and draft state
/// 2. Build engine config
/// 3. Score and rank
/// 4. Report results
pub fn run(args: RecommendArgs) -> Result<()> {
    let (catalog, base_state) = load_inputs(&args)?;
    let state = build_state(base_state, &args);
    let config = build_config(&args)?;

    tracing::info!(
        "Scoring {} champions for role {:?} (phase {}, limit {})",
        catalog.len(),
        args.role,
        state.phase.as_str(),
        config.limit
    );

    let results = recommend(&args.role, &catalog.champions, &state, &config);

    report_results(&results, &catalog, &state, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the catalog and the optional draft state file
fn load_inputs(args: &RecommendArgs) -> Result<(Catalog, DraftState)> {
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog: {}", args.catalog.display()))?;

    let state = match &args.state {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read draft state: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid draft state JSON: {}", path.display()))?
        }
        None => DraftState::default(),
    };

    Ok((catalog, state))
}

/// Apply command-line picks, bans and phase on top of the loaded state
fn build_state(mut state: DraftState, args: &RecommendArgs) -> DraftState {
    state.ally_team.extend(args.allies.iter().map(Pick::new));
    state.enemy_team.extend(args.enemies.iter().map(Pick::new));
    state.bans.extend(args.bans.iter().cloned());

    if let Some(phase) = &args.phase {
        state.phase = Phase::from_label(&phase.to_lowercase());
        if state.phase == Phase::Other {
            tracing::warn!("Unknown phase {:?}; flex and phase rules use neutral values", phase);
        }
    }

    state
}

fn build_config(args: &RecommendArgs) -> Result<RecommendConfig> {
    let weights = load_weights(args.weights.as_ref())?;

    Ok(RecommendConfig::default()
        .with_weights(weights)
        .with_limit(args.limit)
        .parallel(args.parallel))
}

fn report_results(
    results: &[ScoredCandidate],
    catalog: &Catalog,
    state: &DraftState,
    args: &RecommendArgs,
) -> Result<()> {
    if args.json {
        let output = serde_json::json!({ "recommendations": results });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text_results(results, catalog, state, &args.role);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn load_weights(path: Option<&PathBuf>) -> Result<Weights> {
    match path {
        Some(path) => Weights::load(path)
            .with_context(|| format!("Failed to load weights: {}", path.display())),
        None => Ok(Weights::default()),
    }
}

/// Ally names plus archetype counts, as one line
fn describe_allies(catalog: &Catalog, state: &DraftState) -> String {
    let index = CharacterIndex::build(&catalog.champions);
    let allies = index.resolve(&state.ally_team);
    if allies.is_empty() {
        return "none".to_string();
    }

    let names: Vec<&str> = allies.iter().map(|c| c.name.as_str()).collect();
    format!("{} [{}]", names.join(", "), format_profile(&TeamProfile::of(&allies)))
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn format_profile(p: &TeamProfile) -> String {
    let counts = [
        ("frontline", p.frontline),
        ("engage", p.engage),
        ("ap", p.ap),
        ("ad", p.ad),
        ("cc", p.cc),
        ("poke", p.poke),
        ("waveclear", p.waveclear),
        ("hypercarry", p.hypercarry),
        ("enchanter", p.enchanter),
        ("assassin", p.assassin),
    ];
    counts
        .iter()
        .map(|(name, n)| format!("{} {}", name, n))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text_results(results: &[ScoredCandidate], catalog: &Catalog, state: &DraftState, role: &str) {
    let role_label = if role.is_empty() { "any role" } else { role };

    println!("\n=== Recommendations for {} (phase: {}) ===", role_label, state.phase.as_str());
    println!("Allies: {}", describe_allies(catalog, state));

    if results.is_empty() {
        println!("No eligible champions.");
        return;
    }

    for (rank, candidate) in results.iter().enumerate() {
        let b = &candidate.score_breakdown;
        println!(
            "{:>2}. {:<16} {:>7.2}  (role {:.1}, needs {:.1}, syn {:.1}, ctr {:.1}, flex {:.1}, comfort {:.1})",
            rank + 1,
            candidate.name,
            candidate.total,
            b.s_role,
            b.s_needs,
            b.s_syn,
            b.s_counter,
            b.s_flex,
            b.s_comfort
        );
        for line in &candidate.highlights {
            println!("      - {}", line);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
