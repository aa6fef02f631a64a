//! Progress Document Schemas
//!
//! One typed document shape per module. Documents arrive as raw JSON,
//! are validated here at the service boundary, and are stored back as
//! JSON. Saves replace the whole document; there is no field-level
//! merge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::module_key::ModuleKey;
use crate::error::{ProgressError, ProgressResult};

// ============================================================================
// Per-Module Schemas
// ============================================================================

/// Groot module: leveling game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrootProgress {
    /// Current level, starts at 1
    pub level: u32,
    pub score: u64,
    pub achievements: Vec<String>,
}

impl Default for GrootProgress {
    fn default() -> Self {
        Self {
            level: 1,
            score: 0,
            achievements: Vec::new(),
        }
    }
}

/// Stark module: dashboard with alerts and reports
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct StarkProgress {
    pub dashboard_config: Map<String, Value>,
    pub alerts: Vec<Value>,
    pub reports: Vec<Value>,
}

/// One Spiderman mission entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mission {
    pub name: String,
    pub date: String,
}

/// Spiderman module: mission log and calendar
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SpidermanProgress {
    pub missions: Vec<Mission>,
    pub calendar_prefs: Map<String, Value>,
}

/// One DrStrange spellbook entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spellbook {
    pub title: String,
    pub power: String,
}

/// DrStrange module: spellbook library and search history
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct DrStrangeProgress {
    pub spellbooks: Vec<Spellbook>,
    pub search_history: Vec<Value>,
}

// ============================================================================
// Tagged Document
// ============================================================================

/// A validated progress document, tagged by module.
///
/// The tag never appears on the wire: clients send and receive the bare
/// document, and the module comes from the route.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleProgress {
    Groot(GrootProgress),
    Stark(StarkProgress),
    Spiderman(SpidermanProgress),
    DrStrange(DrStrangeProgress),
}

impl ModuleProgress {
    /// The document an account sees before its first save
    pub fn default_for(module: ModuleKey) -> Self {
        match module {
            ModuleKey::Groot => Self::Groot(GrootProgress::default()),
            ModuleKey::Stark => Self::Stark(StarkProgress::default()),
            ModuleKey::Spiderman => Self::Spiderman(SpidermanProgress::default()),
            ModuleKey::DrStrange => Self::DrStrange(DrStrangeProgress::default()),
        }
    }

    /// Validate a raw JSON document against the module's schema.
    ///
    /// All top-level fields are required and unknown fields are
    /// rejected, so a malformed save fails loudly instead of storing
    /// something a later read cannot interpret.
    pub fn from_value(module: ModuleKey, value: Value) -> ProgressResult<Self> {
        let invalid = |e: serde_json::Error| {
            ProgressError::InvalidDocument(format!("Invalid {module} progress document: {e}"))
        };

        let document = match module {
            ModuleKey::Groot => Self::Groot(serde_json::from_value(value).map_err(invalid)?),
            ModuleKey::Stark => Self::Stark(serde_json::from_value(value).map_err(invalid)?),
            ModuleKey::Spiderman => {
                Self::Spiderman(serde_json::from_value(value).map_err(invalid)?)
            }
            ModuleKey::DrStrange => {
                Self::DrStrange(serde_json::from_value(value).map_err(invalid)?)
            }
        };

        if let Self::Groot(groot) = &document
            && groot.level < 1
        {
            return Err(ProgressError::InvalidDocument(
                "Groot level must be at least 1".to_string(),
            ));
        }

        Ok(document)
    }

    /// Module this document belongs to
    pub fn module(&self) -> ModuleKey {
        match self {
            Self::Groot(_) => ModuleKey::Groot,
            Self::Stark(_) => ModuleKey::Stark,
            Self::Spiderman(_) => ModuleKey::Spiderman,
            Self::DrStrange(_) => ModuleKey::DrStrange,
        }
    }

    /// Serialize back to the storage/wire representation
    pub fn into_value(self) -> Value {
        let result = match self {
            Self::Groot(doc) => serde_json::to_value(doc),
            Self::Stark(doc) => serde_json::to_value(doc),
            Self::Spiderman(doc) => serde_json::to_value(doc),
            Self::DrStrange(doc) => serde_json::to_value(doc),
        };

        // Schema structs contain only JSON-representable types
        result.unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_groot_default_shape() {
        let value = ModuleProgress::default_for(ModuleKey::Groot).into_value();
        assert_eq!(
            value,
            json!({ "level": 1, "score": 0, "achievements": [] })
        );
    }

    #[test]
    fn test_stark_default_shape() {
        let value = ModuleProgress::default_for(ModuleKey::Stark).into_value();
        assert_eq!(
            value,
            json!({ "dashboardConfig": {}, "alerts": [], "reports": [] })
        );
    }

    #[test]
    fn test_spiderman_default_shape() {
        let value = ModuleProgress::default_for(ModuleKey::Spiderman).into_value();
        assert_eq!(value, json!({ "missions": [], "calendarPrefs": {} }));
    }

    #[test]
    fn test_drstrange_default_shape() {
        let value = ModuleProgress::default_for(ModuleKey::DrStrange).into_value();
        assert_eq!(value, json!({ "spellbooks": [], "searchHistory": [] }));
    }

    #[test]
    fn test_groot_valid_document() {
        let value = json!({
            "level": 2,
            "score": 500,
            "achievements": ["Milestone 2"]
        });

        let document = ModuleProgress::from_value(ModuleKey::Groot, value.clone()).unwrap();
        assert_eq!(document.module(), ModuleKey::Groot);
        assert_eq!(document.into_value(), value);
    }

    #[test]
    fn test_groot_level_zero_rejected() {
        let value = json!({ "level": 0, "score": 0, "achievements": [] });

        let result = ModuleProgress::from_value(ModuleKey::Groot, value);
        assert!(matches!(result, Err(ProgressError::InvalidDocument(_))));
    }

    #[test]
    fn test_missing_field_rejected() {
        let value = json!({ "level": 2, "score": 500 });

        let result = ModuleProgress::from_value(ModuleKey::Groot, value);
        assert!(matches!(result, Err(ProgressError::InvalidDocument(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let value = json!({
            "level": 2,
            "score": 500,
            "achievements": [],
            "rocket": true
        });

        let result = ModuleProgress::from_value(ModuleKey::Groot, value);
        assert!(matches!(result, Err(ProgressError::InvalidDocument(_))));
    }

    #[test]
    fn test_wrong_module_schema_rejected() {
        // A Groot document sent to the Stark endpoint
        let value = json!({ "level": 2, "score": 500, "achievements": [] });

        let result = ModuleProgress::from_value(ModuleKey::Stark, value);
        assert!(matches!(result, Err(ProgressError::InvalidDocument(_))));
    }

    #[test]
    fn test_spiderman_missions_validated() {
        let value = json!({
            "missions": [{ "name": "Rescue", "date": "2026-08-30" }],
            "calendarPrefs": { "view": "week" }
        });
        assert!(ModuleProgress::from_value(ModuleKey::Spiderman, value).is_ok());

        let missing_date = json!({
            "missions": [{ "name": "Rescue" }],
            "calendarPrefs": {}
        });
        assert!(matches!(
            ModuleProgress::from_value(ModuleKey::Spiderman, missing_date),
            Err(ProgressError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_drstrange_opaque_history_accepted() {
        let value = json!({
            "spellbooks": [{ "title": "Vishanti", "power": "high" }],
            "searchHistory": ["portals", { "query": "time stone", "hits": 3 }]
        });
        assert!(ModuleProgress::from_value(ModuleKey::DrStrange, value).is_ok());
    }

    #[test]
    fn test_non_object_rejected() {
        let result = ModuleProgress::from_value(ModuleKey::Groot, json!([1, 2, 3]));
        assert!(matches!(result, Err(ProgressError::InvalidDocument(_))));
    }
}
