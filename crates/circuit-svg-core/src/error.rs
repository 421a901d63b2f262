pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Circuit JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Circuit JSON must be an array of elements, got {found}")]
    NotAnArray { found: &'static str },

    #[error("Malformed circuit element at index {index} ({element_type}): {message}")]
    MalformedElement {
        index: usize,
        element_type: String,
        message: String,
    },

    #[error("Invalid theme override: {message}")]
    InvalidTheme { message: String },
}
