//! Archetype tag derivation for raw catalog entries
//!
//! Tags are built in four passes: Data Dragon class tags, lane hints,
//! hand-curated name lists, then a coarse stat rule. Output keeps the order
//! each tag was first added and never repeats a tag.

use serde::Deserialize;

/// Raw catalog entry before enrichment
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TagSource {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Data Dragon classes (`Fighter`, `Tank`, `Mage`, ...)
    #[serde(default)]
    pub class_tags: Vec<String>,
    #[serde(default)]
    pub hp: Option<f64>,
    #[serde(default)]
    pub armor: Option<f64>,
}

impl TagSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.class_tags = classes.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_stats(mut self, hp: f64, armor: f64) -> Self {
        self.hp = Some(hp);
        self.armor = Some(armor);
        self
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_tags.iter().any(|c| c == class)
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

// ============================================================================
// CURATED LISTS
// ============================================================================

/// Named characters and the tags each of them receives
struct Archetype {
    members: &'static [&'static str],
    adds: &'static [&'static str],
}

static CLASS_TAGS: [(&str, &[&str]); 6] = [
    ("Tank", &["Tank", "Frontline"]),
    ("Fighter", &["Fighter", "Bruiser"]),
    ("Mage", &["Mage", "AP"]),
    ("Assassin", &["Assassin", "Burst"]),
    ("Marksman", &["Marksman", "AD"]),
    ("Support", &["Support"]),
];

static ARCHETYPES: [Archetype; 11] = [
    // Hard engage
    Archetype {
        members: &[
            "Malphite", "Sejuani", "Nautilus", "Leona", "Rell", "Amumu", "Wukong", "Jarvan IV",
            "Hecarim", "Rakan", "Vi", "Zac", "Skarner", "Rammus", "Galio", "Ornn", "Rengar",
            "Nocturne", "Kled", "Sion", "Alistar", "Cho'Gath", "Maokai", "Poppy", "Warwick",
            "Xin Zhao", "Naafiri", "Ambessa",
        ],
        adds: &["Engage", "Hard Engage", "Initiator"],
    },
    // Poke / siege
    Archetype {
        members: &[
            "Ziggs", "Xerath", "Lux", "Vel'Koz", "Jayce", "Zoe", "Varus", "Ezreal", "Corki",
            "Jhin", "Ashe", "Azir", "Seraphine", "Nidalee", "Aurelion Sol", "Kog'Maw",
            "Twisted Fate", "Bard", "Gangplank", "Karma", "Miss Fortune", "Smolder",
        ],
        adds: &["Poke", "Siege", "Waveclear"],
    },
    // Enchanters
    Archetype {
        members: &[
            "Lulu", "Janna", "Nami", "Yuumi", "Sona", "Soraka", "Renata Glasc", "Taric", "Milio",
            "Seraphine", "Rakan", "Karma", "Ivern", "Zilean",
        ],
        adds: &["Enchanter", "Healer", "Peel"],
    },
    // Splitpush
    Archetype {
        members: &[
            "Jax", "Fiora", "Camille", "Tryndamere", "Nasus", "Yorick", "Trundle", "Illaoi",
            "Teemo", "Heimerdinger", "Gangplank", "Kayle", "Akali", "Yone", "Yasuo", "Gwen",
            "Kled", "Sett", "Olaf", "Renekton", "Mordekaiser", "Ambessa",
        ],
        adds: &["Splitpush", "Duelist"],
    },
    // Wombo cores
    Archetype {
        members: &[
            "Malphite", "Wukong", "Orianna", "Miss Fortune", "Yasuo", "Diana", "Amumu", "Galio",
            "Rell", "Alistar", "Rakan", "Kennen", "Nunu & Willump", "Jarvan IV", "Sejuani", "Sona",
            "Seraphine", "Azir", "Rumble", "Neeko", "Aurora",
        ],
        adds: &["AoE", "Wombo", "Setup"],
    },
    // Disengage
    Archetype {
        members: &[
            "Janna", "Gragas", "Alistar", "Bard", "Poppy", "Vayne", "Trundle", "Nami", "Zilean",
            "Seraphine", "Sona", "Nautilus", "Tahm Kench", "Taliyah",
        ],
        adds: &["Disengage", "Peel"],
    },
    // Anti-tank
    Archetype {
        members: &[
            "Vayne", "Kog'Maw", "Kai'Sa", "Varus", "Trundle", "Camille", "Fiora", "Bel'Veth",
            "Kindred", "Gwen", "Cassiopeia", "Mel",
        ],
        adds: &["Anti-Tank", "%HP Damage"],
    },
    // Waveclear
    Archetype {
        members: &[
            "Anivia", "Viktor", "Orianna", "Azir", "Ziggs", "Lux", "Twisted Fate", "Zeri",
            "Seraphine", "Taliyah", "Ryze", "Syndra", "Vex", "Smolder", "Aurora",
        ],
        adds: &["Waveclear", "Anti-Siege"],
    },
    // Hypercarries
    Archetype {
        members: &[
            "Jinx", "Aphelios", "Kog'Maw", "Vayne", "Kai'Sa", "Smolder", "Yasuo", "Yone", "Kayle",
            "Akali", "Bel'Veth", "Master Yi", "Nasus", "Veigar", "Aurelion Sol", "Mel",
        ],
        adds: &["Hypercarry", "Scaling"],
    },
    // Assassins
    Archetype {
        members: &[
            "Zed", "Talon", "Kha'Zix", "Evelynn", "Rengar", "Akali", "LeBlanc", "Nocturne", "Fizz",
            "Qiyana", "Naafiri", "Kassadin", "Pyke", "Ekko",
        ],
        adds: &["Assassin", "Burst", "Pick"],
    },
    // Global presence
    Archetype {
        members: &[
            "Shen", "Twisted Fate", "Galio", "Nocturne", "Pantheon", "Tahm Kench", "Karthus",
            "Taliyah", "Sion", "Ryze",
        ],
        adds: &["Global", "Cross-map"],
    },
];

pub const TANK_HP: f64 = 650.0;
pub const TANK_ARMOR: f64 = 38.0;

// ============================================================================
// BUILDER
// ============================================================================

/// Ordered, de-duplicated tag list
#[derive(Default)]
struct TagSet(Vec<String>);

impl TagSet {
    fn add(&mut self, tags: &[&str]) {
        for tag in tags {
            if !self.0.iter().any(|t| t == tag) {
                self.0.push(tag.to_string());
            }
        }
    }
}

pub fn build_tags(source: &TagSource) -> Vec<String> {
    let mut tags = TagSet::default();

    for (class, adds) in &CLASS_TAGS {
        if source.has_class(class) {
            tags.add(adds);
        }
    }

    if source.has_role("Jungle") {
        tags.add(&["Jungle", "Skirmisher"]);
    }
    if source.has_role("Support") {
        tags.add(&["Peel", "Vision"]);
    }
    if source.has_role("Bottom") {
        tags.add(&["Botlane", "DPS"]);
    }
    if ["Top", "Middle", "Mid", "Middle Lane"].iter().any(|r| source.has_role(r)) {
        tags.add(&["Solo Lane"]);
    }
    if source.has_role("Jungle") && source.name == "Lee Sin" {
        tags.add(&["Early Game", "Playmaker"]);
    }

    for archetype in &ARCHETYPES {
        if archetype.members.contains(&source.name.as_str()) {
            tags.add(archetype.adds);
        }
    }

    if let (Some(hp), Some(armor)) = (source.hp, source.armor) {
        if hp > TANK_HP && armor > TANK_ARMOR {
            tags.add(&["Frontline", "Tank"]);
        }
    }

    tags.0
}
