use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub length: u32,
    pub width: u32,
    pub clicks: u32,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.length == 0 || self.width == 0 {
            return Err("Board dimensions must be at least 1x1".to_string());
        }
        if self.length > 26 || self.width > 26 {
            return Err("Board dimensions must not exceed 26x26 in the terminal".to_string());
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            length: 10,
            width: 10,
            clicks: 10,
        }
    }
}
