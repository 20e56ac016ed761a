pub mod auth;
pub mod permissions;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use permissions::check_permissions;
