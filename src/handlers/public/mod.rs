// handlers/public/mod.rs - Read-only item endpoints, no authentication
pub mod items;

pub use items::get as items_get;
pub use items::list as items_list;
