pub mod auth;
pub mod mock_data;
pub mod notify;

pub use auth::{authenticate, AuthError};
