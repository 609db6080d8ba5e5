//! ドメインモデルと JSON ワイヤ表現
//!
//! Todo レコードと、その作成・更新ペイロード、および各レコードを
//! JSON 文字列と相互変換するコーデックを提供します。
//! 更新の適用（状態遷移）はこのクレートのみが担当します。

pub mod json;
pub mod todo;

pub use json::*;
pub use todo::*;
