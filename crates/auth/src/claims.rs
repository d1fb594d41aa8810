use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PrincipalId, Role};

/// JWT claims model (transport-agnostic).
///
/// This is the minimal set of claims the service expects once a token has
/// been decoded/verified by whatever transport/security layer is in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    /// RBAC roles granted to the principal.
    pub roles: Vec<Role>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate JWT claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// is handled by [`crate::jwt`].
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn claims(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> JwtClaims {
        JwtClaims {
            sub: PrincipalId::new(),
            roles: vec![Role::new("staff")],
            issued_at,
            expires_at,
        }
    }

    #[test]
    fn accepts_token_inside_window() {
        let now = Utc::now();
        let c = claims(now - Duration::minutes(1), now + Duration::minutes(10));
        assert_eq!(validate_claims(&c, now), Ok(()));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let c = claims(now - Duration::minutes(20), now - Duration::minutes(10));
        assert_eq!(validate_claims(&c, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn rejects_token_from_the_future() {
        let now = Utc::now();
        let c = claims(now + Duration::minutes(5), now + Duration::minutes(15));
        assert_eq!(validate_claims(&c, now), Err(TokenValidationError::NotYetValid));
    }

    #[test]
    fn rejects_inverted_time_window() {
        let now = Utc::now();
        let c = claims(now, now - Duration::minutes(1));
        assert_eq!(
            validate_claims(&c, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
