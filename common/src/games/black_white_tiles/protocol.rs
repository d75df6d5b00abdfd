use serde::{Deserialize, Serialize};

/// Everything a client needs to keep playing; the server forgets the board once this is sent.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub length: usize,
    pub width: usize,
    pub tiles: Vec<Vec<bool>>,
}

/// Body of an initialize call. Every field is optional on the wire so that a missing
/// dimension can be reported as such instead of as a parse failure.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializeRequest {
    pub clicks: Option<i64>,
    pub length: Option<i64>,
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveRequest {
    pub tiles: Option<Vec<Vec<bool>>>,
    pub row: Option<i64>,
    pub col: Option<i64>,
}

impl MoveRequest {
    pub fn new(tiles: Vec<Vec<bool>>, row: i64, col: i64) -> Self {
        Self {
            tiles: Some(tiles),
            row: Some(row),
            col: Some(col),
        }
    }
}

/// Body of every rejected request.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
