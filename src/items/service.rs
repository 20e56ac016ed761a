use async_trait::async_trait;
use thiserror::Error;

use super::model::{BaseItem, Item, ParsedId};

/// Failure reported by an item store. The display text is what callers see.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemServiceError {
    #[error("Item {0} not found")]
    NotFound(ParsedId),

    #[error("{0}")]
    Storage(String),
}

pub type ItemServiceResult<T> = Result<T, ItemServiceError>;

/// Persistence port for items.
///
/// The HTTP layer only ever talks to this trait; the backing store owns id
/// assignment and its own concurrency discipline.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemService: Send + Sync {
    async fn find_all(&self) -> ItemServiceResult<Vec<Item>>;

    /// `Ok(None)` when nothing is stored under `id`
    async fn find(&self, id: ParsedId) -> ItemServiceResult<Option<Item>>;

    async fn create(&self, item: BaseItem) -> ItemServiceResult<Item>;

    async fn update(&self, id: ParsedId, update: BaseItem) -> ItemServiceResult<Item>;

    async fn remove(&self, id: ParsedId) -> ItemServiceResult<()>;
}
