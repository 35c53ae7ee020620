use brandkit_core::error::CoreError;

/// Errors surfaced by resource contexts, uploaders and panels.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}) {code}: {message}")]
    Api {
        status: u16,
        /// Machine-readable code from the error body (`NOT_FOUND`, ...).
        code: String,
        message: String,
    },

    /// Rejected locally before anything was sent.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClientError::Api { status: 404, .. } | ClientError::Core(CoreError::NotFound { .. })
        )
    }
}
