use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShareusError>;

#[derive(Error, Debug)]
pub enum ShareusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
