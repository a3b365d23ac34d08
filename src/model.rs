//! Framework record shapes: persisted entity and wire DTO, with conversions between them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum length of a framework name, in characters (matches the `VARCHAR(30)` column).
pub const NAME_MAX_LEN: usize = 30;

/// A persisted framework record. `id` is assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framework {
    pub id: i64,
    pub name: String,
    pub versions: Vec<String>,
    pub deprecation_date: NaiveDate,
    pub hype_level: i32,
}

/// Validated mutable fields of a framework; input of insert and update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameworkFields {
    pub name: String,
    pub versions: Vec<String>,
    pub deprecation_date: NaiveDate,
    pub hype_level: i32,
}

impl FrameworkFields {
    pub fn with_id(self, id: i64) -> Framework {
        Framework {
            id,
            name: self.name,
            versions: self.versions,
            deprecation_date: self.deprecation_date,
            hype_level: self.hype_level,
        }
    }
}

/// Wire representation. Required fields are `Option` so a missing field reaches
/// the validator instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<Vec<String>>,
    #[serde(default)]
    pub deprecation_date: Option<NaiveDate>,
    #[serde(default)]
    pub hype_level: Option<i32>,
}

impl From<Framework> for FrameworkDto {
    fn from(f: Framework) -> Self {
        FrameworkDto {
            id: Some(f.id),
            name: Some(f.name),
            version: Some(f.versions),
            deprecation_date: Some(f.deprecation_date),
            hype_level: Some(f.hype_level),
        }
    }
}
