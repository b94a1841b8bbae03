use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Logout failed: {0}")]
    Logout(String),

    #[error("Could not load current user: {0}")]
    CurrentUser(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),
}

impl From<SessionError> for String {
    fn from(err: SessionError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_url() {
        let err = ApiError::Status {
            status: 503,
            url: "/api/auth/logout".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected status 503 from /api/auth/logout");
    }

    #[test]
    fn test_session_error_into_string() {
        let msg: String = SessionError::Logout("connection reset".to_string()).into();
        assert_eq!(msg, "Logout failed: connection reset");
    }
}
