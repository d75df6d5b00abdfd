use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Server-side limits applied to initialize requests.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub default_clicks: u32,
    pub max_dimension: u32,
    pub max_clicks: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            default_clicks: 10,
            max_dimension: 100,
            max_clicks: 10_000,
        }
    }
}

impl Validate for GameRules {
    fn validate(&self) -> Result<(), String> {
        if self.max_dimension == 0 {
            return Err("max_dimension must be greater than 0".to_string());
        }
        if self.default_clicks > self.max_clicks {
            return Err(format!(
                "default_clicks ({}) must not exceed max_clicks ({})",
                self.default_clicks, self.max_clicks
            ));
        }
        Ok(())
    }
}
