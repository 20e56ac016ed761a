// handlers/protected/mod.rs - Mutating item endpoints
//
// Every route here sits behind jwt_auth_middleware and its own
// check_permissions gate (see handlers::protected_routes).
pub mod items;

pub use items::create as items_create;
pub use items::delete as items_delete;
pub use items::update as items_update;
