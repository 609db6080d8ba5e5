//! Todo サービスの HTTP API（axum）
//!
//! 明示的なルート表でハンドラを束ね、ストアと ID 生成器は
//! `AppState` 経由で注入します。`/auth` で発行した Bearer トークンが
//! `/todos` 配下の全操作を保護します。

pub mod auth;
pub mod error;
pub mod handlers;
pub mod ip;
pub mod store;

use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use shared::{Config, IdGenerator, UuidGenerator};

use crate::auth::AuthSettings;
use crate::ip::IpLookup;
use crate::store::{InMemoryTodoStore, InMemoryTokenStore, TodoStore, TokenStore};

/// ルータを構築して返します。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/auth", post(auth::authenticate))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoStore>,
    pub tokens: Arc<dyn TokenStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub auth: AuthSettings,
    pub ip_lookup: Arc<IpLookup>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            todos: Arc::new(InMemoryTodoStore::default()),
            tokens: Arc::new(InMemoryTokenStore::default()),
            ids: Arc::new(UuidGenerator),
            auth: AuthSettings {
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
            },
            ip_lookup: Arc::new(IpLookup::new(config.ip_lookup_url.clone())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::from_env())
    }
}

async fn log_request(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let method = req.method().clone();
    tracing::info!(path = %path, method = %method, "Incoming request");
    next.run(req).await
}

/// サービス索引（名前とバージョン）
async fn index() -> impl IntoResponse {
    let body = ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    };
    (StatusCode::OK, Json(body))
}

/// ヘルスチェック用ハンドラ
async fn health() -> impl IntoResponse {
    let body = HealthBody { status: "ok" };
    (StatusCode::OK, Json(body))
}

#[derive(Debug, Serialize)]
struct ServiceInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    /// サービスの簡易ステータス
    status: &'static str,
}
