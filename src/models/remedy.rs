use serde::{Deserialize, Serialize};

/// A single remedy from the static catalog.
///
/// Records are immutable once loaded. `symptoms` and `allergens` are sets
/// under matching-key comparison; duplicates within a record carry no
/// meaning. Catalog JSON uses camelCase field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub properties: Vec<RemedyProperty>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub uses: Vec<UsageSpec>,
    /// `None` means safety during pregnancy is unknown.
    #[serde(default)]
    pub pregnancy_safe: Option<bool>,
    /// Minimum age in years; `None` means unknown.
    #[serde(default)]
    pub children_minimum_age: Option<u8>,
    #[serde(default)]
    pub verified_by_professional: bool,
    #[serde(default)]
    pub sources: SourceRefs,
}

/// Named property of a remedy (e.g. "Anti-inflammatoire").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemedyProperty {
    pub name: String,
}

/// One way of preparing or applying a remedy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSpec {
    pub title: String,
    #[serde(default)]
    pub instructions: String,
}

/// References backing a remedy, split by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRefs {
    #[serde(default)]
    pub scientific: Vec<SourceRef>,
    #[serde(default)]
    pub traditional: Vec<SourceRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}
