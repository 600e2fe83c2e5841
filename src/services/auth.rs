use crate::{config::Config, error::Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub email: Option<String>,
}

/// Verifies dashboard bearer tokens. Session issuance lives in the auth
/// collaborator; this service only checks signatures and expiry.
#[derive(Clone)]
pub struct AuthService {
    config: Config,
}

impl AuthService {
    pub async fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn verify_jwt(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn config_with_secret(secret: &str) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            environment: "test".to_string(),
            database_url: "http://localhost:8000".to_string(),
            database_namespace: "wasl".to_string(),
            database_name: "admin".to_string(),
            database_username: "root".to_string(),
            database_password: "root".to_string(),
            jwt_secret: secret.to_string(),
            default_notifications_per_page: 20,
            cors_allowed_origins: "*".to_string(),
        }
    }

    fn token_for(sub: &str, secret: &str) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            iat: now,
            exp: now + 3600,
            email: None,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_verify_jwt_roundtrip() {
        let service = AuthService::new(&config_with_secret("s3cret")).await.unwrap();
        let claims = service.verify_jwt(&token_for("user:1", "s3cret")).unwrap();
        assert_eq!(claims.sub, "user:1");
    }

    #[tokio::test]
    async fn test_verify_jwt_rejects_wrong_secret() {
        let service = AuthService::new(&config_with_secret("s3cret")).await.unwrap();
        assert!(service.verify_jwt(&token_for("user:1", "other")).is_err());
    }
}
