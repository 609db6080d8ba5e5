//! ID 生成の抽象
//!
//! Todo の識別子とアクセストークン文字列は同じ生成器から払い出します。
//! 本番はランダム UUID、テストでは決定的な連番に差し替えます。

use std::sync::Mutex;

/// 不透明な識別子を払い出す能力
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// ランダムな UUID v4 を払い出す既定の実装
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// 決定的な連番（`id-1`, `id-2`, ...）を払い出す実装（テスト用）
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: Mutex<u64>,
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let mut next = self.next.lock().unwrap();
        *next += 1;
        format!("id-{next}")
    }
}
