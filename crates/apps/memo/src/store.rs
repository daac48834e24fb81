//! Persistence contract for memos plus an in-memory implementation.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::memo::{extract_hashtags, Memo};

/// Object-safe boxed future used by [`MemoStore`] async methods.
pub type MemoStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Memo store failures.
pub enum MemoStoreError {
    /// Content was empty after trimming.
    #[error("memo content is empty")]
    EmptyContent,
    /// No memo has the given id.
    #[error("memo not found: {0}")]
    NotFound(String),
    /// The backing service failed.
    #[error("memo backend error: {0}")]
    Backend(String),
}

/// Storage service for the memo board.
pub trait MemoStore {
    /// Lists memos, newest first.
    fn list_memos<'a>(&'a self) -> MemoStoreFuture<'a, Result<Vec<Memo>, MemoStoreError>>;

    /// Stores a memo, extracting its hashtags, and returns the stored record.
    fn insert_memo<'a>(
        &'a self,
        content: &'a str,
        created_at: DateTime<Utc>,
    ) -> MemoStoreFuture<'a, Result<Memo, MemoStoreError>>;

    /// Deletes a memo by id.
    fn delete_memo<'a>(&'a self, id: &'a str) -> MemoStoreFuture<'a, Result<(), MemoStoreError>>;
}

#[derive(Debug, Default)]
struct MemoryMemoState {
    memos: Vec<Memo>,
    next_id: u64,
}

#[derive(Debug, Clone, Default)]
/// In-memory memo store; clones share the same memos.
pub struct MemoryMemoStore {
    inner: Rc<RefCell<MemoryMemoState>>,
}

impl MemoStore for MemoryMemoStore {
    fn list_memos<'a>(&'a self) -> MemoStoreFuture<'a, Result<Vec<Memo>, MemoStoreError>> {
        Box::pin(async move {
            let mut memos = self.inner.borrow().memos.clone();
            // Stable sort keeps posting order for memos created in the same instant.
            memos.reverse();
            memos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(memos)
        })
    }

    fn insert_memo<'a>(
        &'a self,
        content: &'a str,
        created_at: DateTime<Utc>,
    ) -> MemoStoreFuture<'a, Result<Memo, MemoStoreError>> {
        Box::pin(async move {
            if content.trim().is_empty() {
                return Err(MemoStoreError::EmptyContent);
            }
            let mut state = self.inner.borrow_mut();
            state.next_id += 1;
            let memo = Memo {
                id: format!("memo-{}", state.next_id),
                content: content.to_string(),
                hashtags: extract_hashtags(content),
                created_at,
            };
            state.memos.push(memo.clone());
            Ok(memo)
        })
    }

    fn delete_memo<'a>(&'a self, id: &'a str) -> MemoStoreFuture<'a, Result<(), MemoStoreError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            let before = state.memos.len();
            state.memos.retain(|memo| memo.id != id);
            if state.memos.len() == before {
                return Err(MemoStoreError::NotFound(id.to_string()));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_store_lists_newest_first() {
        block_on(async {
            let store = MemoryMemoStore::default();
            let now = Utc::now();
            store
                .insert_memo("older #draft", now - Duration::hours(2))
                .await
                .expect("insert older");
            store.insert_memo("newer", now).await.expect("insert newer");

            let memos = store.list_memos().await.expect("list");
            let contents: Vec<&str> = memos.iter().map(|m| m.content.as_str()).collect();
            assert_eq!(contents, vec!["newer", "older #draft"]);
            assert_eq!(memos[1].hashtags, vec!["draft".to_string()]);
        });
    }

    #[test]
    fn memory_store_rejects_blank_content() {
        block_on(async {
            let store = MemoryMemoStore::default();
            let err = store
                .insert_memo("  \n ", Utc::now())
                .await
                .expect_err("blank memo");
            assert_eq!(err, MemoStoreError::EmptyContent);
            assert!(store.list_memos().await.expect("list").is_empty());
        });
    }

    #[test]
    fn memory_store_delete_by_id() {
        block_on(async {
            let store = MemoryMemoStore::default();
            let memo = store.insert_memo("bye", Utc::now()).await.expect("insert");

            store.delete_memo(&memo.id).await.expect("delete");
            assert!(store.list_memos().await.expect("list").is_empty());

            let err = store.delete_memo(&memo.id).await.expect_err("second delete");
            assert_eq!(err, MemoStoreError::NotFound(memo.id.clone()));
        });
    }

    #[test]
    fn store_is_object_safe_and_clones_share_state() {
        block_on(async {
            let store = MemoryMemoStore::default();
            let shared: Rc<dyn MemoStore> = Rc::new(store.clone());
            shared.insert_memo("shared", Utc::now()).await.expect("insert");
            assert_eq!(store.list_memos().await.expect("list").len(), 1);
        });
    }
}
