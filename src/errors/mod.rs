use thiserror::Error;

/// Result type alias for state-layer operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures surfaced to the user, one per attempted operation
#[derive(Error, Debug)]
pub enum AppError {
    /// Input rejected before any gateway call
    #[error("{0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The gateway rejected the call; the reason is opaque
    #[error("Gateway call failed: {0:#}")]
    Gateway(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn not_found(kind: &'static str, id: &str) -> Self {
        AppError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::validation("Please enter a player name").to_string(),
            "Please enter a player name"
        );
        assert_eq!(AppError::not_found("Player", "p1").to_string(), "Player not found: p1");

        let err: AppError = anyhow!("connection refused").context("Failed to list players").into();
        assert_eq!(
            err.to_string(),
            "Gateway call failed: Failed to list players: connection refused"
        );
    }
}
