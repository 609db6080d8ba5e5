//! Todo レコードと作成・更新ペイロード

use serde::{Deserialize, Serialize};

/// Todo レコード
/// （ワイヤ表現と同一フィールドを持つ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// 識別子（生成器が割り当てる）
    pub id: String,
    /// 本文
    pub text: String,
    /// 完了フラグ
    pub completed: bool,
}

impl Todo {
    /// 新規レコードを作成します。completed は false で開始します。
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// 更新ペイロードのうち、指定されたフィールドだけを適用します。
    /// `id` は変更しません。
    pub fn apply(&mut self, patch: &UpdateTodoRequest) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// 作成リクエストのペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    /// 本文（空文字は上位レイヤで拒否する）
    pub text: String,
}

/// 更新リクエストのペイロード
/// 省略されたフィールドは「変更なし」を意味します。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// どのフィールドも指定されていない場合に true を返します。
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_uncompleted() {
        let todo = Todo::new("1", "Buy milk");
        assert_eq!(todo.id, "1");
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn apply_text_only_keeps_completed() {
        let mut todo = Todo::new("1", "Buy milk");
        todo.completed = true;
        todo.apply(&UpdateTodoRequest {
            text: Some("Buy bread".into()),
            completed: None,
        });
        assert_eq!(todo.text, "Buy bread");
        assert!(todo.completed);
    }

    #[test]
    fn apply_completed_only_keeps_text() {
        let mut todo = Todo::new("1", "Buy milk");
        todo.apply(&UpdateTodoRequest {
            text: None,
            completed: Some(true),
        });
        assert_eq!(todo.text, "Buy milk");
        assert!(todo.completed);
    }

    #[test]
    fn apply_both_fields_and_preserves_id() {
        let mut todo = Todo::new("abc", "Buy milk");
        todo.apply(&UpdateTodoRequest {
            text: Some("Walk the dog".into()),
            completed: Some(true),
        });
        assert_eq!(todo.id, "abc");
        assert_eq!(todo.text, "Walk the dog");
        assert!(todo.completed);
    }

    #[test]
    fn apply_empty_patch_changes_nothing() {
        let mut todo = Todo::new("1", "Buy milk");
        let before = todo.clone();
        todo.apply(&UpdateTodoRequest::default());
        assert_eq!(todo, before);
    }

    #[test]
    fn is_empty_detects_missing_fields() {
        assert!(UpdateTodoRequest::default().is_empty());
        assert!(!UpdateTodoRequest {
            text: Some("x".into()),
            completed: None,
        }
        .is_empty());
        assert!(!UpdateTodoRequest {
            text: None,
            completed: Some(false),
        }
        .is_empty());
    }
}
