mod board_view;
mod config;
mod game_loop;
mod move_input;
mod tile_service;

use clap::Parser;
use common::config::Validate;
use common::{GameRules, InitializeRequest, log, logger};

use config::{BoardConfig, Config};
use tile_service::{RemoteTileService, TileService};

#[derive(Parser)]
#[command(name = "tiles_client")]
#[command(about = "Play black/white tiles in the terminal")]
struct Args {
    /// Server base URL, overrides the config file
    #[arg(long, conflicts_with = "offline")]
    server: Option<String>,

    /// Play against the local engine without contacting a server
    #[arg(long)]
    offline: bool,

    /// Number of rows, defaults to the config file value
    #[arg(long)]
    length: Option<u32>,

    /// Number of columns, defaults to the config file value
    #[arg(long)]
    width: Option<u32>,

    /// Random presses used to scramble the board
    #[arg(long)]
    clicks: Option<u32>,

    /// Seed for a reproducible scramble
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn board_config(&self, config: &Config) -> Result<BoardConfig, String> {
        let board = BoardConfig {
            length: self.length.unwrap_or(config.board.length),
            width: self.width.unwrap_or(config.board.width),
            clicks: self.clicks.unwrap_or(config.board.clicks),
        };
        board.validate()?;
        Ok(board)
    }

    fn tile_service(&self, config: &Config) -> TileService {
        if self.offline {
            return TileService::Offline(GameRules::default());
        }
        match self.server.as_ref().or(config.server.address.as_ref()) {
            Some(address) => TileService::Remote(RemoteTileService::new(address)),
            None => TileService::Offline(GameRules::default()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(Some("Client".to_string()));

    let config = config::get_config_manager()
        .get_config()
        .unwrap_or_else(|e| {
            log!("Using default config: {}", e);
            Config::default()
        });

    let board_config = args.board_config(&config)?;
    let service = args.tile_service(&config);
    match &service {
        TileService::Remote(remote) => log!("Playing against {}", remote.base_url()),
        TileService::Offline(_) => log!("Playing offline"),
    }

    let request = InitializeRequest {
        clicks: Some(i64::from(board_config.clicks)),
        length: Some(i64::from(board_config.length)),
        width: Some(i64::from(board_config.width)),
        seed: args.seed,
    };
    let board = service.initialize(&request)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    game_loop::play(board, &service, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_dimensions_are_validated() {
        let args = Args::parse_from(["tiles_client", "--length", "40"]);
        assert!(args.board_config(&Config::default()).is_err());
    }

    #[test]
    fn test_command_line_overrides_config() {
        let args = Args::parse_from(["tiles_client", "--width", "4", "--clicks", "0"]);
        let board = args.board_config(&Config::default()).unwrap();
        assert_eq!(board, BoardConfig { length: 10, width: 4, clicks: 0 });
    }

    #[test]
    fn test_server_flag_and_offline_selection() {
        let args = Args::parse_from(["tiles_client", "--server", "http://example.test:9000/"]);
        match args.tile_service(&Config::default()) {
            TileService::Remote(remote) => {
                assert_eq!(remote.base_url(), "http://example.test:9000")
            }
            TileService::Offline(_) => panic!("expected a remote service"),
        }

        let args = Args::parse_from(["tiles_client", "--offline"]);
        assert!(matches!(args.tile_service(&Config::default()), TileService::Offline(_)));
    }

    #[test]
    fn test_server_and_offline_conflict() {
        let result = Args::try_parse_from(["tiles_client", "--offline", "--server", "http://x"]);
        assert!(result.is_err());
    }
}
