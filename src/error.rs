use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("raw trades must be a JSON array of objects, got {0}")]
    NotASequence(&'static str),

    #[error("raw trade at index {index} must be a JSON object, got {found}")]
    NotAMapping { index: usize, found: &'static str },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("the trade table is empty, no metrics can be computed")]
    EmptyInput,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("journal file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("journal file {path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("journal file {0} must hold a JSON array")]
    NotAnArray(String),

    #[error("trade is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("trade must be a JSON object")]
    NotAnObject,
}

/// Short JSON type name used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
