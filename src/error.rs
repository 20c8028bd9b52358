use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("expect github issue url as the first argument")]
    MissingArgument,

    #[error("please set {0} env")]
    MissingCredential(String),

    #[error("{url:?} does not match {pattern}")]
    InvalidUrl { url: String, pattern: String },

    #[error("invalid issue number: {0}")]
    NumberParse(#[from] ParseIntError),

    #[error("GitHub API error: {0}")]
    Api(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl From<octocrab::Error> for FetchError {
    fn from(err: octocrab::Error) -> Self {
        FetchError::Api(Box::new(err))
    }
}
