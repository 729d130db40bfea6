use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageFxError>;

/// Errors raised while exchanging the session cookie for a bearer token.
#[derive(Error, Debug)]
pub enum AccountError {
    /// The cookie exchange was rejected, expired, or unreachable.
    ///
    /// `status` is the upstream HTTP status when one was received; `None`
    /// means the failure happened before a response arrived (transport
    /// error) or the response carried no usable session.
    #[error("{}", auth_failure_message(.status, .detail))]
    AuthenticationFailed {
        status: Option<u16>,
        detail: String,
    },
}

fn auth_failure_message(status: &Option<u16>, detail: &str) -> String {
    match status {
        Some(code) => format!("authentication failed (http {}): {}", code, detail),
        None => format!("authentication failed: {}", detail),
    }
}

/// Prompt construction validation errors. Raised before any network access.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("prompt text must be non-empty")]
    InvalidText,

    #[error("numberOfImages must be between 1 and 4, got {0}")]
    InvalidCount(u8),

    #[error("unknown {field} value: {value:?}")]
    InvalidEnumValue { field: &'static str, value: String },
}

/// Errors raised while parsing a single generated-image record.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("malformed image record at index {index}: {detail}")]
    MalformedRecord { index: usize, detail: String },

    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Top-level error type surfaced by [`crate::ImageFx`].
#[derive(Error, Debug)]
pub enum ImageFxError {
    /// Token refresh failed; carries the underlying [`AccountError`].
    #[error(transparent)]
    AuthenticationFailed(#[from] AccountError),

    /// Invalid prompt parameters, surfaced before any network access.
    #[error("invalid prompt: {0}")]
    Prompt(#[from] PromptError),

    /// Upstream answered the generation call with a non-success status.
    /// Includes quota exhaustion, blocked prompt content, and server errors.
    #[error("generation request rejected (http {status}): {detail}")]
    GenerationFailed { status: u16, detail: String },

    /// Upstream answered with a success status but a body that does not
    /// match the expected response contract.
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),

    /// Transport-level failure (connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<ImageError> for ImageFxError {
    fn from(err: ImageError) -> Self {
        ImageFxError::InvalidResponse(err.to_string())
    }
}

impl ImageFxError {
    /// Returns true if the failure came from the cookie/token exchange or
    /// the upstream explicitly rejected our credential.
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            ImageFxError::AuthenticationFailed(_) => true,
            ImageFxError::GenerationFailed { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns true if upstream throttled the generation call.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ImageFxError::GenerationFailed { status: 429, .. })
    }

    /// Returns true if upstream failed on its side.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ImageFxError::GenerationFailed { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_error_display_with_status() {
        let err = AccountError::AuthenticationFailed {
            status: Some(401),
            detail: "cookie rejected".into(),
        };
        assert_eq!(
            err.to_string(),
            "authentication failed (http 401): cookie rejected"
        );
    }

    #[test]
    fn test_account_error_display_without_status() {
        let err = AccountError::AuthenticationFailed {
            status: None,
            detail: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "authentication failed: connection refused");
    }

    #[test]
    fn test_image_error_maps_to_invalid_response() {
        let err: ImageFxError = ImageError::MalformedRecord {
            index: 1,
            detail: "missing encodedImage".into(),
        }
        .into();
        assert!(matches!(err, ImageFxError::InvalidResponse(_)));
    }

    #[test]
    fn test_classification_helpers() {
        let rate_limited = ImageFxError::GenerationFailed {
            status: 429,
            detail: "quota".into(),
        };
        assert!(rate_limited.is_rate_limited());
        assert!(!rate_limited.is_server_error());

        let server = ImageFxError::GenerationFailed {
            status: 503,
            detail: "overloaded".into(),
        };
        assert!(server.is_server_error());

        let auth = ImageFxError::AuthenticationFailed(AccountError::AuthenticationFailed {
            status: None,
            detail: "no token".into(),
        });
        assert!(auth.is_authentication_failure());
        assert!(!auth.is_rate_limited());
    }
}
