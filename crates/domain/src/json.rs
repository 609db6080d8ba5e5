//! JSON コーデック
//!
//! ワイヤ表現（JSON 文字列）とドメイン型の相互変換。
//! デコード失敗は `DecodeError` に正規化し、上位レイヤで
//! 不正リクエストとして扱えるようにします。

use serde::de::DeserializeOwned;
use serde::Serialize;

/// デコード失敗（不正な JSON、フィールド欠落、型不一致など）
#[derive(Debug, thiserror::Error)]
#[error("failed to decode JSON body: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// 値を JSON 文字列へエンコードします。
pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// JSON 文字列を値へデコードします。
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(body)?)
}
