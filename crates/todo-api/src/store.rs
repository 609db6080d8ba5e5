use std::collections::HashMap;
use std::sync::Mutex;

use shared::OAuthToken;
use thiserror::Error;
use todo_domain::{Todo, UpdateTodoRequest};

/// ストア層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unexpected store error")]
    Unexpected,
}

/// Todo ストアの最小抽象
pub trait TodoStore: Send + Sync {
    fn list(&self) -> Result<Vec<Todo>, StoreError>;
    fn insert(&self, todo: Todo) -> Result<(), StoreError>;
    fn get(&self, id: &str) -> Result<Option<Todo>, StoreError>;
    /// 指定フィールドのみ適用し、更新後のレコードを返す（存在しなければ None）
    fn update(&self, id: &str, patch: &UpdateTodoRequest) -> Result<Option<Todo>, StoreError>;
    /// 削除できたら true、見つからなければ false
    fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// 発行済みトークンのストア
pub trait TokenStore: Send + Sync {
    fn save(&self, token: OAuthToken) -> Result<(), StoreError>;
    fn find(&self, token: &str) -> Result<Option<OAuthToken>, StoreError>;
}

/// 簡易な InMemory 実装（開発/テスト用）
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: Mutex<HashMap<String, Todo>>,
}

impl TodoStore for InMemoryTodoStore {
    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let map = self.todos.lock().unwrap();
        Ok(map.values().cloned().collect())
    }

    fn insert(&self, todo: Todo) -> Result<(), StoreError> {
        let mut map = self.todos.lock().unwrap();
        map.insert(todo.id.clone(), todo);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let map = self.todos.lock().unwrap();
        Ok(map.get(id).cloned())
    }

    fn update(&self, id: &str, patch: &UpdateTodoRequest) -> Result<Option<Todo>, StoreError> {
        let mut map = self.todos.lock().unwrap();
        match map.get_mut(id) {
            Some(todo) => {
                todo.apply(patch);
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut map = self.todos.lock().unwrap();
        Ok(map.remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryTokenStore {
    tokens: Mutex<HashMap<String, OAuthToken>>,
}

impl TokenStore for InMemoryTokenStore {
    fn save(&self, token: OAuthToken) -> Result<(), StoreError> {
        let mut map = self.tokens.lock().unwrap();
        map.insert(token.token.clone(), token);
        Ok(())
    }

    fn find(&self, token: &str) -> Result<Option<OAuthToken>, StoreError> {
        let map = self.tokens.lock().unwrap();
        Ok(map.get(token).cloned())
    }
}
