pub mod api_key;

pub use api_key::{ApiKey, ApiKeyError, extract_api_key};
