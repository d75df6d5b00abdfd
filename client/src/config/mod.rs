mod board_config;
mod config;
mod server_config;

pub use board_config::BoardConfig;
pub use config::{get_config_manager, Config};
pub use server_config::ServerConfig;
