//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use remedy_finder::models::{RemedyProperty, RemedyRecord, SourceRefs};
use tempfile::TempDir;

/// Builder for catalog remedy records
pub struct RemedyBuilder {
    record: RemedyRecord,
}

impl RemedyBuilder {
    /// Create a new remedy with default values
    pub fn new(id: &str) -> Self {
        Self {
            record: RemedyRecord {
                id: id.to_string(),
                name: format!("Remedy {}", id),
                category: "infusion".to_string(),
                description: String::new(),
                symptoms: vec![],
                allergens: vec![],
                properties: vec![],
                contraindications: vec![],
                tips: vec![],
                uses: vec![],
                pregnancy_safe: None,
                children_minimum_age: None,
                verified_by_professional: false,
                sources: SourceRefs::default(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn symptoms(mut self, symptoms: &[&str]) -> Self {
        self.record.symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn allergens(mut self, allergens: &[&str]) -> Self {
        self.record.allergens = allergens.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn property(mut self, name: &str) -> Self {
        self.record.properties.push(RemedyProperty { name: name.to_string() });
        self
    }

    pub fn pregnancy_safe(mut self, safe: bool) -> Self {
        self.record.pregnancy_safe = Some(safe);
        self
    }

    pub fn children_minimum_age(mut self, age: u8) -> Self {
        self.record.children_minimum_age = Some(age);
        self
    }

    pub fn verified(mut self) -> Self {
        self.record.verified_by_professional = true;
        self
    }

    pub fn build(self) -> RemedyRecord {
        self.record
    }
}

/// A small catalog covering the common test scenarios: overlapping
/// symptoms, allergens, and every tag-filter dimension.
pub fn sample_catalog() -> Vec<RemedyRecord> {
    vec![
        RemedyBuilder::new("camomille")
            .name("Camomille")
            .symptoms(&["insomnie", "stress", "anxiété"])
            .pregnancy_safe(true)
            .children_minimum_age(3)
            .verified()
            .build(),
        RemedyBuilder::new("miel")
            .name("Miel de thym")
            .symptoms(&["toux", "mal de gorge"])
            .allergens(&["pollen"])
            .children_minimum_age(1)
            .build(),
        RemedyBuilder::new("lavande")
            .name("Lavande")
            .symptoms(&["stress", "insomnie", "maux de tête"])
            .pregnancy_safe(false)
            .verified()
            .build(),
        RemedyBuilder::new("menthe")
            .name("Menthe poivrée")
            .symptoms(&["nausée", "maux de tête"])
            .children_minimum_age(8)
            .build(),
    ]
}

/// Write a catalog to `<dir>/remedies.json` and return its path.
pub fn write_catalog_file(dir: &Path, catalog: &[RemedyRecord]) -> PathBuf {
    let path = dir.join("remedies.json");
    let json = serde_json::to_string_pretty(catalog).expect("Failed to serialize catalog");
    fs::write(&path, json).expect("Failed to write catalog file");
    path
}

/// Temp directory pair used by CLI tests: a catalog file plus an isolated
/// data directory for the file-backed store.
pub struct CliFixture {
    pub temp: TempDir,
    pub catalog_path: PathBuf,
    pub data_dir: PathBuf,
}

impl CliFixture {
    pub fn new(catalog: &[RemedyRecord]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = write_catalog_file(temp.path(), catalog);
        let data_dir = temp.path().join("data");
        Self { temp, catalog_path, data_dir }
    }
}
