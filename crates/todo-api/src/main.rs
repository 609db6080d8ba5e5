//! todo-api バイナリのエントリポイント
//! ローカル開発用に HTTP サーバを起動します。

use std::net::SocketAddr;

use shared::{init_tracing, Config};
use todo_api::{app_with_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    // ポートや資格情報は環境変数から（なければ既定値）
    let config = Config::from_env();
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server starting");

    let router = app_with_state(AppState::from_config(&config));
    // 接続元アドレスを ConnectInfo としてハンドラへ渡す
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
