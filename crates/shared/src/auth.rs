use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthToken {
    pub token: String,
    pub client_id: String,
    pub issued_at: DateTime<Utc>,
}

impl OAuthToken {
    pub fn issue(token: String, client_id: String) -> Self {
        Self {
            token,
            client_id,
            issued_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{code}: {description}")]
pub struct OAuthError {
    pub code: String,
    pub description: String,
}

impl OAuthError {
    pub fn invalid_request(description: &str) -> Self {
        Self {
            code: "invalid_request".to_string(),
            description: description.to_string(),
        }
    }

    pub fn invalid_client(description: &str) -> Self {
        Self {
            code: "invalid_client".to_string(),
            description: description.to_string(),
        }
    }

    pub fn invalid_token(description: &str) -> Self {
        Self {
            code: "invalid_token".to_string(),
            description: description.to_string(),
        }
    }

    pub fn not_found(description: &str) -> Self {
        Self {
            code: "not_found".to_string(),
            description: description.to_string(),
        }
    }

    pub fn server_error(description: &str) -> Self {
        Self {
            code: "server_error".to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}
