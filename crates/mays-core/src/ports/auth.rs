//! Identity ports. Tokens are issued by the identity provider; this
//! service validates them.

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// The `Id` claim. Tokens without one still authenticate, but the
    /// holder owns nothing.
    pub user_id: Option<String>,
    pub user_name: String,
    pub roles: Vec<String>,
    pub exp: i64,
}

/// Token service trait for JWT operations.
pub trait TokenService: Send + Sync {
    /// Sign a token for the given identity.
    fn generate_token(
        &self,
        user_id: Option<&str>,
        user_name: &str,
        roles: Vec<String>,
    ) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
