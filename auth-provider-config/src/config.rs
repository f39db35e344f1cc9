use serde::{Deserialize, Serialize};

/// How strictly option objects are checked for required fields.
///
/// `Strict` is used for create requests. `Partial` accepts option objects that
/// only carry the fields being changed, for update requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    Strict,
    Partial,
}

impl ValidationMode {
    /// Whether an absent required field is tolerated.
    pub fn ignores_missing_fields(self) -> bool {
        matches!(self, ValidationMode::Partial)
    }
}

impl From<bool> for ValidationMode {
    fn from(ignore_missing_fields: bool) -> Self {
        if ignore_missing_fields {
            ValidationMode::Partial
        } else {
            ValidationMode::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ValidationMode::default(), ValidationMode::Strict);
        assert!(!ValidationMode::default().ignores_missing_fields());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(ValidationMode::from(true), ValidationMode::Partial);
        assert_eq!(ValidationMode::from(false), ValidationMode::Strict);
    }

    #[test]
    fn test_deserialize_snake_case() {
        let mode: ValidationMode = serde_json::from_str("\"partial\"").unwrap();
        assert!(mode.ignores_missing_fields());
    }
}
