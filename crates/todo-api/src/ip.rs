//! 送信元 IP の逆引き（ベストエフォート）
//!
//! 外部の GeoIP エンドポイントへ問い合わせ、失敗はすべて `None` に
//! 丸めます。認証などの主処理を決してブロックしません。

use std::time::Duration;

use serde::Deserialize;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

/// 送信元アドレスの付帯情報
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IpInfo {
    /// 照会したアドレス（ip-api 互換の `query` キーも受け付ける）
    #[serde(alias = "query")]
    pub ip: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
}

pub struct IpLookup {
    client: reqwest::Client,
    base_url: String,
}

impl IpLookup {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// アドレスの付帯情報を引きます。接続失敗、非 2xx、本文の解析失敗は
    /// いずれも `None` になります。
    pub async fn lookup(&self, ip: &str) -> Option<IpInfo> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ip);

        let response = self
            .client
            .get(&url)
            .timeout(LOOKUP_TIMEOUT)
            .send()
            .await
            .ok()?;
        if !response.status().is_success() {
            return None;
        }

        response.json::<IpInfo>().await.ok()
    }
}
