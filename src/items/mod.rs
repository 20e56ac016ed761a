pub mod memory;
pub mod model;
pub mod permission;
pub mod service;

pub use memory::InMemoryItemService;
pub use model::{BaseItem, Item, ItemId, ParsedId};
pub use permission::ItemPermission;
pub use service::{ItemService, ItemServiceError, ItemServiceResult};
