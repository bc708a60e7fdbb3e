use botgram_types::ResponseParameters;
use thiserror::Error;

/// Everything a Bot API call can fail with. Errors pass through typed; the
/// library never retries on its own.
#[derive(Error, Debug)]
pub enum BotApiError {
    /// The service answered `ok: false`.
    #[error("Bot API error {}: {}", .0.error_code, .0.description)]
    Api(ApiError),

    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was neither a success nor an error envelope.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// `ok: true` but no `result` payload.
    #[error("ok response without result payload")]
    EmptyResponse,

    #[error("config error: {0}")]
    Config(String),
}

/// The service's error envelope: HTTP-style code, human-readable
/// description, and optional machine-readable parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub error_code: i32,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    /// Flood-control hint: seconds to wait before retrying, when provided.
    pub fn retry_after(&self) -> Option<u32> {
        self.parameters.and_then(|p| p.retry_after)
    }

    /// Supergroup id to repeat the request against after a group migration.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.and_then(|p| p.migrate_to_chat_id)
    }

    /// Invalid bot token.
    pub fn is_unauthorized(&self) -> bool {
        self.error_code == 401
    }

    /// Bot was blocked, kicked, or lacks the required right.
    pub fn is_forbidden(&self) -> bool {
        self.error_code == 403
    }

    pub fn is_not_found(&self) -> bool {
        self.error_code == 404
    }

    pub fn is_too_many_requests(&self) -> bool {
        self.error_code == 429
    }
}

pub type Result<T> = std::result::Result<T, BotApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_read_response_parameters() {
        let error = ApiError {
            error_code: 429,
            description: "Too Many Requests: retry after 14".to_string(),
            parameters: Some(ResponseParameters {
                migrate_to_chat_id: None,
                retry_after: Some(14),
            }),
        };
        assert!(error.is_too_many_requests());
        assert_eq!(error.retry_after(), Some(14));
        assert_eq!(error.migrate_to_chat_id(), None);
    }

    #[test]
    fn display_carries_code_and_description() {
        let error = BotApiError::Api(ApiError {
            error_code: 403,
            description: "Forbidden: bot was blocked by the user".to_string(),
            parameters: None,
        });
        assert_eq!(
            error.to_string(),
            "Bot API error 403: Forbidden: bot was blocked by the user"
        );
    }
}
