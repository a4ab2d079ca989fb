//! # Backend failure taxonomy
//!
//! | Variant | Cause | Effect on the session |
//! |---------|-------|-----------------------|
//! | [`ApiError::Unauthorized`] | HTTP 401: the backend does not accept the token (or, on login, the credentials) | teardown |
//! | [`ApiError::Rejected`] | any other non-success status | none; message surfaced |
//! | [`ApiError::Transport`] | request never completed (DNS, CORS, offline) | none; connectivity message |
//! | [`ApiError::Decode`] | success status but an unexpected body | none; fallback message |

use serde::Deserialize;
use thiserror::Error;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expirée. Veuillez vous reconnecter.";
pub const CONNECTIVITY_MESSAGE: &str = "Erreur de connexion au serveur";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("session rejected by the backend")]
    Unauthorized { message: Option<String> },

    #[error("backend rejected the request ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Error payload shape used by the backend (`{"error": ..}` or `{"message": ..}`).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response from its status code and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty());
        if status == 401 {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Rejected { status, message }
        }
    }

    /// Whether this error means the session is no longer valid.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Message carried in the response body, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Rejected { message, .. } => {
                message.as_deref()
            }
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// Text shown to the user: the backend message when one was given,
    /// otherwise `fallback`. A rejected token always reads as an expired
    /// session.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { .. } => SESSION_EXPIRED_MESSAGE.to_string(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { message: None, .. } | ApiError::Decode(_) => fallback.to_string(),
            ApiError::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_is_unauthorized() {
        let err = ApiError::from_response(401, r#"{"error":"jwt expired"}"#);
        assert!(err.is_session_expired());
        assert_eq!(err.user_message("x"), SESSION_EXPIRED_MESSAGE);
        assert_eq!(err.backend_message(), Some("jwt expired"));
    }

    #[test]
    fn test_backend_message_wins_over_fallback() {
        let err = ApiError::from_response(409, r#"{"error":"Email déjà utilisé"}"#);
        assert_eq!(err.user_message("Erreur lors de la création"), "Email déjà utilisé");

        let err = ApiError::from_response(400, r#"{"message":"Identifiants invalides"}"#);
        assert_eq!(err.user_message("Échec de la connexion"), "Identifiants invalides");
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let err = ApiError::from_response(500, "<html>Bad gateway</html>");
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Erreur lors de la soumission"), "Erreur lors de la soumission");
        assert!(!err.is_session_expired());
    }

    #[test]
    fn test_transport_uses_connectivity_message() {
        let err = ApiError::Transport("dns".into());
        assert_eq!(err.user_message("ignored"), CONNECTIVITY_MESSAGE);
    }
}
