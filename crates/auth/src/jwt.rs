//! Token verification (HS256 over a shared secret).

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, JwtClaims, TokenValidationError};

/// Token verification boundary used by the HTTP layer.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token or signature mismatch.
    #[error("token is malformed or has an invalid signature")]
    Invalid,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// HS256 validator over a shared secret.
pub struct Hs256JwtValidator {
    key: DecodingKey,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            key: DecodingKey::from_secret(&secret),
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        // Claims carry RFC 3339 timestamps rather than the numeric `exp`/`iat`
        // registered claims, so the time window is checked by
        // `validate_claims` after signature verification.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};

    use super::*;
    use crate::{PrincipalId, Role};

    fn mint(secret: &str, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> String {
        let claims = JwtClaims {
            sub: PrincipalId::new(),
            roles: vec![Role::new("admin")],
            issued_at,
            expires_at,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to encode jwt")
    }

    #[test]
    fn accepts_token_signed_with_same_secret() {
        let now = Utc::now();
        let token = mint("secret", now - Duration::minutes(1), now + Duration::minutes(10));

        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        let claims = validator.validate(&token, now).unwrap();
        assert!(claims.roles.iter().any(|r| r.as_str() == "admin"));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let now = Utc::now();
        let token = mint("secret", now - Duration::minutes(1), now + Duration::minutes(10));

        let validator = Hs256JwtValidator::new(b"other-secret".to_vec());
        assert_eq!(validator.validate(&token, now), Err(TokenError::Invalid));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let token = mint("secret", now - Duration::minutes(20), now - Duration::minutes(10));

        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        assert_eq!(
            validator.validate(&token, now),
            Err(TokenError::Claims(TokenValidationError::Expired))
        );
    }

    #[test]
    fn rejects_garbage_token() {
        let validator = Hs256JwtValidator::new(b"secret".to_vec());
        assert_eq!(
            validator.validate("garbage", Utc::now()),
            Err(TokenError::Invalid)
        );
    }
}
