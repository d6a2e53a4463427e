use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("{0}")]
    MissingConfig(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("GraphQL error: {0}")]
    GraphQLError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type LinkResult<T> = Result<T, LinkError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> LinkResult<T>;
    fn with_context<F>(self, f: F) -> LinkResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> LinkResult<T> {
        self.map_err(|e| LinkError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> LinkResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LinkError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> LinkResult<T> {
        self.ok_or_else(|| LinkError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> LinkResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| LinkError::Unknown(f()))
    }
}
