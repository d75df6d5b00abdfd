use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    /// Base URL of the tiles server. `None` plays offline against the local engine.
    pub address: Option<String>,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(address) = &self.address
            && !(address.starts_with("http://") || address.starts_with("https://"))
        {
            return Err(format!(
                "server address must start with http:// or https://, got '{}'",
                address
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: Some("http://127.0.0.1:8080".to_string()),
        }
    }
}
