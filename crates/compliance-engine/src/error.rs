use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
