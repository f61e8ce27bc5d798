use node::MIN_SIZE;
use serde::{Deserialize, Serialize};

/// Tunables for editing behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Smallest width or height a handle drag can produce.
    pub min_size: f32,
    /// Bound offered for `left`/`top` animations, in both directions.
    pub position_limit: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            position_limit: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: CanvasConfig = serde_json::from_str(r#"{ "min_size": 24 }"#).unwrap();
        assert_eq!(config.min_size, 24.0);
        assert_eq!(config.position_limit, 10_000.0);
    }
}
