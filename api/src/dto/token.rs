use serde::{Deserialize, Serialize};

use obc_shared::ErrorBody;

/// Query of `GET /jwt`
#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub email: Option<String>,
}

/// Body of `GET /jwt`
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl TokenResponse {
    pub fn issued(token: String) -> Self {
        Self {
            success: true,
            token: Some(token),
            error: None,
        }
    }

    pub fn failed(error: ErrorBody) -> Self {
        Self {
            success: false,
            token: None,
            error: Some(error),
        }
    }
}
