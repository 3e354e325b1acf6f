use thiserror::Error;

#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot parse input document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expectedResourceCount must be non-negative, got {0}")]
    NegativeExpectedCount(i64),
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Request carries no observed composite resource")]
    MissingObservedComposite,
}
