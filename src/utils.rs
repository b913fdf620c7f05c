use serde_json::Value;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "llm_models.json";

/// `<config dir>/llmkeys/llm_models.json`, or `llm_models.json` in the
/// working directory when the platform has no config dir
pub fn default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("llmkeys").join(DEFAULT_FILE_NAME),
        None => PathBuf::from(DEFAULT_FILE_NAME),
    }
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
