use thiserror::Error;

/// Failures surfaced by the provider layer. Unsupported labels are caught at
/// the dispatch boundary before any request is sent; everything else maps a
/// failure from the underlying HTTP call and propagates to the caller
/// untouched (no retries, no recovery).
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unsupported model choice: {0}")]
    UnsupportedProvider(String),

    #[error("Provider request failed: {0}")]
    Call(#[from] reqwest::Error),

    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },

    #[error("No completion text in {0} response")]
    EmptyResponse(&'static str),
}
