use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use common::games::SessionRng;
use common::games::black_white_tiles::{handle_move, initialize_game};
use common::{BoardSnapshot, InitializeRequest, MoveRequest, log};
use serde::Serialize;

use crate::api_error::ApiError;
use crate::web_server::WebServerState;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

pub async fn initialize(
    State(state): State<WebServerState>,
    payload: Result<Json<InitializeRequest>, JsonRejection>,
) -> Result<Json<BoardSnapshot>, ApiError> {
    let Json(request) = payload.inspect_err(|e| log!("Rejected initialize body: {}", e))?;
    let mut rng = SessionRng::from_seed_or_random(request.seed);

    match initialize_game(&request, &state.rules, &mut rng) {
        Ok(snapshot) => {
            log!(
                "Initialized {}x{} board, clicks={:?}, seed={}",
                snapshot.length,
                snapshot.width,
                request.clicks,
                rng.seed()
            );
            Ok(Json(snapshot))
        }
        Err(e) => {
            log!("Rejected initialize request: {}", e);
            Err(e.into())
        }
    }
}

pub async fn handle_click(
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<BoardSnapshot>, ApiError> {
    let Json(request) = payload.inspect_err(|e| log!("Rejected handleClick body: {}", e))?;

    handle_move(request)
        .map(Json)
        .inspect_err(|e| log!("Rejected move: {}", e))
        .map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use common::GameRules;

    fn state() -> WebServerState {
        common::logger::init_logger(Some("Test".to_string()));
        WebServerState {
            rules: GameRules::default(),
        }
    }

    async fn error_body(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ping() {
        let Json(response) = ping().await;
        assert_eq!(response.message, "pong");
    }

    #[tokio::test]
    async fn test_initialize_returns_requested_shape() {
        let request = InitializeRequest {
            clicks: Some(3),
            length: Some(4),
            width: Some(6),
            seed: Some(11),
        };
        let Json(snapshot) = initialize(State(state()), Ok(Json(request))).await.unwrap();
        assert_eq!(snapshot.length, 4);
        assert_eq!(snapshot.width, 6);
        assert_eq!(snapshot.tiles.len(), 4);
        assert!(snapshot.tiles.iter().all(|row| row.len() == 6));
    }

    #[tokio::test]
    async fn test_initialize_with_seed_is_reproducible() {
        let request = InitializeRequest {
            clicks: Some(8),
            length: Some(5),
            width: Some(5),
            seed: Some(2024),
        };
        let Json(first) = initialize(State(state()), Ok(Json(request.clone()))).await.unwrap();
        let Json(second) = initialize(State(state()), Ok(Json(request))).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_initialize_missing_width_is_bad_request() {
        let request = InitializeRequest {
            length: Some(3),
            ..InitializeRequest::default()
        };
        let err = initialize(State(state()), Ok(Json(request))).await.unwrap_err();
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing required parameter `width`");
    }

    #[tokio::test]
    async fn test_handle_click_flips_cross() {
        let request = MoveRequest::new(vec![vec![true; 3]; 3], 1, 1);
        let Json(snapshot) = handle_click(Ok(Json(request))).await.unwrap();
        assert_eq!(
            snapshot.tiles,
            vec![
                vec![true, false, true],
                vec![false, false, false],
                vec![true, false, true],
            ]
        );
    }

    #[tokio::test]
    async fn test_handle_click_out_of_bounds_is_bad_request() {
        let request = MoveRequest::new(vec![vec![true; 3]; 3], 0, -1);
        let err = handle_click(Ok(Json(request))).await.unwrap_err();
        let (status, body) = error_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("outside the 3x3 board"));
    }

    #[tokio::test]
    async fn test_handle_click_ragged_grid_is_bad_request() {
        let request = MoveRequest::new(vec![vec![true; 3], vec![true; 2]], 0, 0);
        let err = handle_click(Ok(Json(request))).await.unwrap_err();
        assert_eq!(err.message(), "grid row 1 has 2 tiles, expected 3");
    }
}
