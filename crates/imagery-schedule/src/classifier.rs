//! Classify a free-text heading into a capture equipment type.
//!
//! Headings are published in the page's own language, so each equipment
//! type carries a list of lower-case substrings, one or more per language.
//! Groups are tested in table order and the first hit wins.

use serde::{Deserialize, Serialize};

/// Capture equipment recognised in headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// Handheld tablet capture.
    Ipad,
    /// Backpack-mounted capture by pedestrians.
    Backpack,
    /// Vehicle-mounted capture.
    Vehicle,
}

impl Equipment {
    /// Tag written into `ScheduleRecord::kind`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Ipad => "ipad",
            Equipment::Backpack => "backpack",
            Equipment::Vehicle => "vehicle",
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table, checked top to bottom. All keywords are lower-case.
pub const EQUIPMENT_KEYWORDS: &[(Equipment, &[&str])] = &[
    (Equipment::Ipad, &["ipad"]),
    (
        Equipment::Backpack,
        &[
            "backpack",
            "batoh",
            "rucksack",
            "バックパック",
            "背包",
            "sac à dos",
            "ryggsäck",
            "vrsta",
            "pedestre",
            "plecak",
            "ryggsekk",
            "rugzak",
            "mochila",
            "apparati a spalla",
            "pedone",
            "hátizsák",
            "reppu",
            "ruksak",
            "раница",
            "σακίδιο",
        ],
    ),
    (
        Equipment::Vehicle,
        &[
            "vehicle",
            "vozidlo",
            "fahrzeug",
            "車両",
            "車輛",
            "véhicules",
            "fordon",
            "vozilo",
            "veículo",
            "pojazd",
            "kjøretøy",
            "voertuig",
            "vehículo",
            "veicoli",
            "veicolo",
            "jármű",
            "ajoneuvo",
            "priemonė",
            "sõiduk",
            "transportlīdzeklis",
            "vehiculelor",
            "όχημα",
        ],
    ),
];

/// Find the equipment a heading refers to, if any keyword occurs in it.
///
/// Matching is case-insensitive substring containment, not whole-word.
pub fn detect_equipment(heading: &str) -> Option<Equipment> {
    let lower = heading.to_lowercase();
    EQUIPMENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(equipment, _)| *equipment)
}

/// Map a heading to its equipment tag, or return the heading unchanged
/// when nothing matches.
pub fn classify(heading: &str) -> String {
    match detect_equipment(heading) {
        Some(equipment) => equipment.as_str().to_string(),
        None => heading.to_string(),
    }
}

/// Equipment tag for `heading`, present only when classification actually
/// changed the text.
///
/// A heading that is literally `"vehicle"` classifies to itself and so
/// yields `None`, same as an unrecognised heading.
pub fn resolve_kind(heading: &str) -> Option<String> {
    let classified = classify(heading);
    (classified != heading).then_some(classified)
}
