use crate::error::{ConfigError, Result};
use crate::keys::ApiKeys;
use crate::logging::{ErrorSink, TracingSink};
use crate::utils;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::Path;

/// Parsed contents of a key config file. An empty object on every fallback path.
pub type ConfigMapping = Value;

/// Reads LLM provider keys from a local JSON file
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<S = TracingSink> {
    sink: S,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<S: ErrorSink> ConfigLoader<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    /// Load the file, falling back to `{}` on any failure.
    ///
    /// A missing file is silent. Read and parse failures are reported once
    /// through the sink. Any valid JSON is returned unchanged, arrays and
    /// scalars included.
    pub fn load(&self, path: impl AsRef<Path>) -> ConfigMapping {
        match self.try_load(path) {
            Ok(value) => value,
            Err(err) if err.is_not_found() => {
                tracing::debug!("{}", err);
                json!({})
            }
            Err(err) => {
                self.sink
                    .error(&format!("Failed to load LLM API Key config: {}", err));
                json!({})
            }
        }
    }

    /// Load the file, reporting what went wrong instead of falling back.
    ///
    /// Nothing is sent to the sink.
    pub fn try_load(&self, path: impl AsRef<Path>) -> Result<ConfigMapping> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded key config");
        Ok(value)
    }

    /// Like `try_load`, but the top level must be an object
    pub fn load_strict(&self, path: impl AsRef<Path>) -> Result<Map<String, Value>> {
        let path = path.as_ref();
        match self.try_load(path)? {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::NotAnObject {
                path: path.to_path_buf(),
                found: utils::json_kind(&other),
            }),
        }
    }

    /// `load` followed by the typed provider view
    pub fn load_keys(&self, path: impl AsRef<Path>) -> ApiKeys {
        ApiKeys::from_mapping(&self.load(path))
    }
}

/// Load LLM API keys from a local JSON file, logging failures through `tracing`
pub fn load_llm_api_key_config(path: impl AsRef<Path>) -> ConfigMapping {
    ConfigLoader::new().load(path)
}
