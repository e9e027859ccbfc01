//! Tags command - build an enriched catalog from Data Dragon data
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_lanes(), build_catalog(), write_catalog()
//! - Level 3: tag_frequencies()
//! - Level 4: summary formatting

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use draftpick_core::{Catalog, CatalogLoader};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct TagsArgs {
    /// Data Dragon champion.json (existing catalogs are accepted too)
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output catalog file
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// JSON object mapping champion id to lane labels, e.g. {"Ahri": ["MIDDLE"]}
    #[arg(long, value_name = "FILE")]
    pub lanes: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run tags command
///
/// This function reads like a table of contents:
/// 1. Load optional lane data
/// 2. Parse input and derive tags
/// 3. Write catalog and summarize
pub fn run(args: TagsArgs) -> Result<()> {
    let lanes = load_lanes(args.lanes.as_deref())?;
    let catalog = build_catalog(&args.input, lanes)?;
    write_catalog(&catalog, &args.output)?;

    print_summary(&catalog, &args.output);
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_lanes(path: Option<&Path>) -> Result<HashMap<String, Vec<String>>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read lanes file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Lanes file must map ids to label arrays: {}", path.display()))
}

fn build_catalog(input: &Path, lanes: HashMap<String, Vec<String>>) -> Result<Catalog> {
    let lane_count = lanes.len();
    let catalog = CatalogLoader::default()
        .with_lanes(lanes)
        .load(input)
        .with_context(|| format!("Failed to load champion data: {}", input.display()))?;

    tracing::info!(
        "Tagged {} champions ({} with lane data)",
        catalog.len(),
        lane_count
    );
    if catalog.is_empty() {
        tracing::warn!("No champions found in {}", input.display());
    }

    Ok(catalog)
}

fn write_catalog(catalog: &Catalog, output: &Path) -> Result<()> {
    catalog
        .save(output)
        .with_context(|| format!("Failed to write catalog: {}", output.display()))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Tag usage counts, most common first, ties by name
fn tag_frequencies(catalog: &Catalog) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for champion in &catalog.champions {
        for tag in &champion.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, n)| (tag.to_string(), n))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn print_summary(catalog: &Catalog, output: &Path) {
    println!("\n=== Catalog Written ===");
    println!("File: {}", output.display());
    if let Some(version) = &catalog.version {
        println!("Version: {}", version);
    }
    println!("Champions: {}", catalog.len());
    println!("\nTop tags:");
    for (tag, n) in tag_frequencies(catalog).iter().take(12) {
        println!("  {:<14} {:>4}", tag, n);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CHAMPION_JSON: &str = r#"{
        "version": "14.1.1",
        "data": {
            "Leona": {
                "id": "Leona", "name": "Leona", "tags": ["Tank", "Support"],
                "image": {"full": "Leona.png"}, "stats": {"hp": 646, "armor": 47}
            },
            "Lux": {
                "id": "Lux", "name": "Lux", "tags": ["Mage", "Support"],
                "image": {"full": "Lux.png"}
            }
        }
    }"#;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("draftpick-tags-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_no_lanes_file_is_empty_map() {
        assert!(load_lanes(None).unwrap().is_empty());
    }

    #[test]
    fn test_bad_lanes_file_errors() {
        let dir = temp_dir("badlanes");
        let path = dir.join("lanes.json");
        std::fs::write(&path, r#"["MIDDLE"]"#).unwrap();
        assert!(load_lanes(Some(&path)).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_build_and_write_catalog() {
        let dir = temp_dir("build");
        let input = dir.join("champion.json");
        let output = dir.join("catalog.json");
        std::fs::write(&input, CHAMPION_JSON).unwrap();

        let mut lanes = HashMap::new();
        lanes.insert("Lux".to_string(), vec!["UTILITY".to_string(), "MIDDLE".to_string()]);

        let catalog = build_catalog(&input, lanes).unwrap();
        write_catalog(&catalog, &output).unwrap();

        let reloaded = Catalog::load(&output).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.version.as_deref(), Some("14.1.1"));

        let lux = reloaded.find_by_key("Lux").unwrap();
        assert_eq!(lux.roles, vec!["Support", "Middle"]);
        let leona = reloaded.find_by_key("Leona").unwrap();
        assert!(leona.roles.is_empty());
        assert!(leona.tags.iter().any(|t| t == "Frontline"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_tag_frequencies_order() {
        let catalog = Catalog::new(vec![
            draftpick_core::Character::new("A", "A").with_tags(&["Mage", "Poke"]),
            draftpick_core::Character::new("B", "B").with_tags(&["Poke", "Burst"]),
        ]);
        let freq = tag_frequencies(&catalog);
        assert_eq!(freq[0], ("Poke".to_string(), 2));
        assert_eq!(freq[1], ("Burst".to_string(), 1));
        assert_eq!(freq[2], ("Mage".to_string(), 1));
    }
}
