pub mod auth;
pub mod guest;

pub use auth::{Auth, auth_middleware};
pub use guest::guest_middleware;
