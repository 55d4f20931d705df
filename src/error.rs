//! Errors for API calls and the expense form.

/// Everything that can go wrong during a single request/response round trip.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    /// The server answered with a non-success status.
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The body of a successful response was not the JSON we expected.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Local validation failures on the add-expense form.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("Invalid splits JSON")]
    InvalidSplits,
}
