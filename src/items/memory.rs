use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::instrument;

use super::model::{BaseItem, Item, ItemId, ParsedId};
use super::service::{ItemService, ItemServiceError, ItemServiceResult};

/// Process-local item store
#[derive(Debug, Default)]
pub struct InMemoryItemService {
    items: RwLock<BTreeMap<ItemId, Item>>,
}

impl InMemoryItemService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample menu (ids 1..=3)
    pub fn with_sample_items() -> Self {
        let items = sample_items()
            .into_iter()
            .map(|item| (item.id, item))
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }

    fn next_id(items: &BTreeMap<ItemId, Item>) -> ItemId {
        items.keys().next_back().map_or(1, |last| last + 1)
    }
}

#[async_trait]
impl ItemService for InMemoryItemService {
    #[instrument(skip(self))]
    async fn find_all(&self) -> ItemServiceResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find(&self, id: ParsedId) -> ItemServiceResult<Option<Item>> {
        let Some(id) = id.as_number() else {
            return Ok(None);
        };
        Ok(self.items.read().await.get(&id).cloned())
    }

    #[instrument(skip(self, item))]
    async fn create(&self, item: BaseItem) -> ItemServiceResult<Item> {
        let mut items = self.items.write().await;
        let id = Self::next_id(&items);
        let created = item.into_item(id);
        items.insert(id, created.clone());

        tracing::debug!("Created item {}", id);
        Ok(created)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: ParsedId, update: BaseItem) -> ItemServiceResult<Item> {
        let mut items = self.items.write().await;
        let existing = match id.as_number() {
            Some(key) => items.get_mut(&key),
            None => None,
        };
        let slot = existing.ok_or(ItemServiceError::NotFound(id))?;

        *slot = update.into_item(slot.id);
        Ok(slot.clone())
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: ParsedId) -> ItemServiceResult<()> {
        if let Some(key) = id.as_number() {
            if self.items.write().await.remove(&key).is_none() {
                tracing::debug!("Remove of unknown item {} ignored", key);
            }
        }
        Ok(())
    }
}

fn sample_items() -> Vec<Item> {
    let menu = [
        (1, json!({
            "name": "Burger",
            "price": 599,
            "description": "Tasty",
            "image": "https://cdn.auth0.com/blog/whatabyte/burger-sm.png"
        })),
        (2, json!({
            "name": "Pizza",
            "price": 299,
            "description": "Cheesy",
            "image": "https://cdn.auth0.com/blog/whatabyte/pizza-sm.png"
        })),
        (3, json!({
            "name": "Tea",
            "price": 199,
            "description": "Informative",
            "image": "https://cdn.auth0.com/blog/whatabyte/tea-sm.png"
        })),
    ];

    menu.into_iter()
        .filter_map(|(id, value)| match value {
            serde_json::Value::Object(attributes) => Some(Item { id, attributes }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn base(value: Value) -> BaseItem {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn sample_menu_is_seeded() {
        let service = InMemoryItemService::with_sample_items();
        let items = service.find_all().await.unwrap();
        let names: Vec<_> = items.iter().map(|i| i.attributes["name"].clone()).collect();
        assert_eq!(names, vec![json!("Burger"), json!("Pizza"), json!("Tea")]);
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_ignores_client_id() {
        let service = InMemoryItemService::with_sample_items();
        let created = service.create(base(json!({"id": 500, "name": "Salad"}))).await.unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(service.find(ParsedId::Number(4)).await.unwrap(), Some(created));
        assert_eq!(service.find(ParsedId::Number(500)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_store_starts_at_one() {
        let service = InMemoryItemService::new();
        let created = service.create(base(json!({"name": "Soup"}))).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn find_not_a_number_is_absent() {
        let service = InMemoryItemService::with_sample_items();
        assert_eq!(service.find(ParsedId::NotANumber).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_replaces_attributes_and_keeps_id() {
        let service = InMemoryItemService::with_sample_items();
        let updated = service
            .update(ParsedId::Number(2), base(json!({"name": "Calzone", "price": 399})))
            .await
            .unwrap();
        assert_eq!(serde_json::to_value(&updated).unwrap(), json!({"id": 2, "name": "Calzone", "price": 399}));
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let service = InMemoryItemService::new();
        let err = service.update(ParsedId::Number(8), BaseItem::default()).await.unwrap_err();
        assert_eq!(err, ItemServiceError::NotFound(ParsedId::Number(8)));
        assert_eq!(err.to_string(), "Item 8 not found");
    }

    #[tokio::test]
    async fn remove_is_silent_for_missing_items() {
        let service = InMemoryItemService::with_sample_items();
        service.remove(ParsedId::Number(1)).await.unwrap();
        service.remove(ParsedId::Number(1)).await.unwrap();
        service.remove(ParsedId::NotANumber).await.unwrap();
        assert_eq!(service.find_all().await.unwrap().len(), 2);
    }
}
