use common::games::SessionRng;
use common::games::black_white_tiles::{handle_move, initialize_game};
use common::{BoardSnapshot, ErrorResponse, GameRules, InitializeRequest, MoveRequest, TileError};
use serde::Serialize;

const INITIALIZE_PATH: &str = "/blackWhiteTile/initialize";
const HANDLE_CLICK_PATH: &str = "/blackWhiteTile/handleClick";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Tile(#[from] TileError),
}

/// Where the client sends its initialize and move requests.
pub enum TileService {
    Remote(RemoteTileService),
    Offline(GameRules),
}

impl TileService {
    pub fn initialize(&self, request: &InitializeRequest) -> Result<BoardSnapshot, ServiceError> {
        match self {
            Self::Remote(remote) => remote.post(INITIALIZE_PATH, request),
            Self::Offline(rules) => {
                let mut rng = SessionRng::from_seed_or_random(request.seed);
                Ok(initialize_game(request, rules, &mut rng)?)
            }
        }
    }

    pub fn apply_move(&self, request: MoveRequest) -> Result<BoardSnapshot, ServiceError> {
        match self {
            Self::Remote(remote) => remote.post(HANDLE_CLICK_PATH, &request),
            Self::Offline(_) => Ok(handle_move(request)?),
        }
    }
}

pub struct RemoteTileService {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl RemoteTileService {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<BoardSnapshot, ServiceError> {
        let url = format!("{}{}", self.base_url, path);
        let transport = |source| ServiceError::Transport {
            url: url.clone(),
            source,
        };

        let response = self.http.post(&url).json(body).send().map_err(transport)?;
        let status = response.status();
        if status.is_success() {
            return response.json::<BoardSnapshot>().map_err(transport);
        }

        let message = response
            .json::<ErrorResponse>()
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());
        Err(ServiceError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
