//! Load language-model provider API keys from a local JSON file.
//!
//! [`load_llm_api_key_config`] never fails: a missing, unreadable or
//! malformed file yields `{}`, and the last two are reported through an
//! [`ErrorSink`]. Use [`ConfigLoader::try_load`] or
//! [`ConfigLoader::load_strict`] when the caller needs to know why.
//!
//! ```no_run
//! use llmkeys::{ApiKeys, load_llm_api_key_config};
//!
//! let config = load_llm_api_key_config("llm_models.json");
//! let keys = ApiKeys::from_mapping(&config);
//! if let Some(key) = keys.api_key("openai") {
//!     println!("openai key: {}", llmkeys::mask_key(key));
//! }
//! ```

pub mod error;
pub mod keys;
pub mod loader;
pub mod logging;
pub mod utils;

pub use error::ConfigError;
pub use keys::{ApiKeys, CredentialRecord, ProviderCredential, mask_key};
pub use loader::{ConfigLoader, ConfigMapping, load_llm_api_key_config};
pub use logging::{ErrorSink, TracingSink};
