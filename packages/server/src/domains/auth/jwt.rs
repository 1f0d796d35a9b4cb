use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,      // Subject (account_id as string)
    pub account_id: Uuid, // Account UUID
    pub iat: i64,         // Issued at timestamp
    pub iss: String,      // Issuer
    pub jti: String,      // JWT ID (unique token identifier)
}

/// JWT Service - creates and verifies JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    ///
    /// The secret comes from configuration at startup; a missing secret is a
    /// fatal configuration error, never a per-request one.
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a new JWT token bound to an account id.
    ///
    /// No expiry claim is issued; a token stays valid until the signing
    /// secret rotates.
    pub fn create_token(&self, account_id: Uuid) -> Result<String> {
        let now = chrono::Utc::now();

        let claims = Claims {
            sub: account_id.to_string(),
            account_id,
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Checks signature and issuer. Expiration is not validated because no
    /// `exp` claim is issued.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = false;
        validation.required_spec_claims.remove("exp");

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let account_id = Uuid::new_v4();

        let token = service.create_token(account_id).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.account_id, account_id);
        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_invalid_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let result = service.verify_token("invalid_token");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1", "test_issuer".to_string());
        let service2 = JwtService::new("secret2", "test_issuer".to_string());

        let token = service1.create_token(Uuid::new_v4()).unwrap();

        // Token created with secret1 should not verify with secret2
        let result = service2.verify_token(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_tokens_are_unique_per_issue() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let account_id = Uuid::new_v4();

        let first = service.create_token(account_id).unwrap();
        let second = service.create_token(account_id).unwrap();

        // The jti claim makes every issued token distinct.
        assert_ne!(first, second);
    }
}
