pub mod api_client;
pub mod session_service;

pub use api_client::ApiClient;
pub use session_service::{SessionService, StoredCredentials};
