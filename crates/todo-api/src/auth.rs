use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;

use shared::{Credentials, OAuthError, OAuthToken};
use todo_domain::json;

use crate::error::ApiError;
use crate::AppState;

/// 認証で照合するクライアント登録情報
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub client_id: String,
    pub client_secret: String,
}

impl AuthSettings {
    pub fn matches(&self, credentials: &Credentials) -> bool {
        self.client_id == credentials.client_id
            && self.client_secret == credentials.client_secret
    }
}

/// 検証済みトークンが認可するクライアント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub client_id: String,
}

#[async_trait]
impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            ApiError::Unauthorized(OAuthError::invalid_token("Missing bearer token"))
        })?;

        match state.tokens.find(token)? {
            Some(found) => Ok(ClientIdentity {
                client_id: found.client_id,
            }),
            None => Err(ApiError::Unauthorized(OAuthError::invalid_token(
                "Token was not recognised",
            ))),
        }
    }
}

pub async fn authenticate(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<OAuthToken>, ApiError> {
    let credentials: Credentials = json::decode(&body)?;

    if !state.auth.matches(&credentials) {
        return Err(ApiError::Unauthorized(OAuthError::invalid_client(
            "Unknown client or bad secret",
        )));
    }

    let token = OAuthToken::issue(state.ids.generate(), credentials.client_id);
    state.tokens.save(token.clone())?;

    // 送信元は転送ヘッダ優先、なければ接続情報。逆引きは監査ログ用で、
    // 失敗しても発行は成功させる。
    let origin = client_ip(&headers)
        .or_else(|| connect_info.map(|ConnectInfo(addr)| addr.ip().to_string()));
    if let Some(ip) = origin {
        let country = state
            .ip_lookup
            .lookup(&ip)
            .await
            .and_then(|info| info.country)
            .unwrap_or_else(|| "unknown".to_string());
        tracing::info!(client_id = %token.client_id, ip = %ip, country = %country, "Issued access token");
    } else {
        tracing::info!(client_id = %token.client_id, "Issued access token");
    }

    Ok(Json(token))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = forwarded.split(',').next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}
