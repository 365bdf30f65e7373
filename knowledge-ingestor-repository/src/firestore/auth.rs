//! GCP service account authentication.
//!
//! Discovers a service account key ambiently (explicit path or
//! `GOOGLE_APPLICATION_CREDENTIALS`), signs a JWT with it, and exchanges
//! the JWT for an OAuth2 access token. Tokens are cached and refreshed
//! shortly before expiry.

use std::env;
use std::time::{Duration, Instant};

use base64::Engine;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::StoreError;

/// Environment variable pointing at the service account key file.
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// OAuth2 scope covering Firestore access.
const FIRESTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// Refresh tokens this long before they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    token_uri: String,
    #[serde(default)]
    project_id: Option<String>,
}

#[derive(Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Service account credential manager for the Firestore client.
pub struct GcpAuth {
    key: ServiceAccountKey,
    http: reqwest::Client,
    token: RwLock<Option<CachedToken>>,
}

impl GcpAuth {
    /// Discover credentials from the explicit path or the ambient
    /// environment variable.
    ///
    /// A missing variable or key file maps to `CredentialsMissing`; a key
    /// file that exists but cannot be parsed maps to `ConnectionError`.
    pub async fn discover(credentials_path: Option<&str>) -> Result<Self, StoreError> {
        let key_path = match credentials_path {
            Some(path) => path.to_string(),
            None => env::var(CREDENTIALS_ENV).map_err(|_| {
                StoreError::credentials_missing(format!("{} is not set", CREDENTIALS_ENV))
            })?,
        };

        let key_content = tokio::fs::read_to_string(&key_path).await.map_err(|e| {
            StoreError::credentials_missing(format!(
                "cannot read service account key {}: {}",
                key_path, e
            ))
        })?;

        let key: ServiceAccountKey = serde_json::from_str(&key_content).map_err(|e| {
            StoreError::connection(format!("invalid service account key format: {}", e))
        })?;

        debug!(client_email = %key.client_email, "Loaded service account key");

        Ok(Self {
            key,
            http: reqwest::Client::new(),
            token: RwLock::new(None),
        })
    }

    /// Project id recorded in the key file, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.key.project_id.as_deref()
    }

    /// Get a valid access token, refreshing the cached one if needed.
    pub async fn access_token(&self) -> Result<String, StoreError> {
        {
            let token = self.token.read().await;
            if let Some(cached) = token.as_ref() {
                if cached.expires_at > Instant::now() + EXPIRY_MARGIN {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let (access_token, lifetime) = self.exchange_jwt().await?;

        {
            let mut token = self.token.write().await;
            *token = Some(CachedToken {
                access_token: access_token.clone(),
                expires_at: Instant::now() + lifetime,
            });
        }

        Ok(access_token)
    }

    /// Sign a service account JWT and exchange it for an access token.
    async fn exchange_jwt(&self) -> Result<(String, Duration), StoreError> {
        let now = chrono::Utc::now().timestamp();
        let claims = serde_json::json!({
            "iss": self.key.client_email,
            "scope": FIRESTORE_SCOPE,
            "aud": self.key.token_uri,
            "iat": now,
            "exp": now + 3600,
        });

        let jwt = self.sign_jwt(&claims)?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", jwt.as_str()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::connection(format!("token exchange request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::connection(format!(
                "token exchange failed ({}): {}",
                status, body
            )));
        }

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            #[serde(default = "default_token_lifetime")]
            expires_in: u64,
        }

        fn default_token_lifetime() -> u64 {
            3600
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| StoreError::parse(format!("invalid token response: {}", e)))?;

        Ok((
            token.access_token,
            Duration::from_secs(token.expires_in),
        ))
    }

    /// Sign the claims with the service account's RSA key (RS256).
    fn sign_jwt(&self, claims: &serde_json::Value) -> Result<String, StoreError> {
        let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = b64.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = b64.encode(claims.to_string().as_bytes());
        let signing_input = format!("{}.{}", header, payload);

        let pem_key = self.key.private_key.replace("\\n", "\n");
        let parsed = pem::parse(&pem_key)
            .map_err(|e| StoreError::connection(format!("invalid private key PEM: {}", e)))?;

        let key_pair = ring::signature::RsaKeyPair::from_pkcs8(parsed.contents())
            .map_err(|e| StoreError::connection(format!("invalid private key: {:?}", e)))?;

        let mut signature = vec![0u8; key_pair.public().modulus_len()];
        key_pair
            .sign(
                &ring::signature::RSA_PKCS1_SHA256,
                &ring::rand::SystemRandom::new(),
                signing_input.as_bytes(),
                &mut signature,
            )
            .map_err(|e| StoreError::connection(format!("JWT signing failed: {:?}", e)))?;

        Ok(format!("{}.{}", signing_input, b64.encode(&signature)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_discover_missing_key_file_is_credentials_error() {
        let result = GcpAuth::discover(Some("/nonexistent/key.json")).await;
        match result {
            Err(StoreError::CredentialsMissing(msg)) => {
                assert!(msg.contains("/nonexistent/key.json"));
            }
            other => panic!("expected CredentialsMissing, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_discover_invalid_key_is_connection_error() {
        let dir = std::env::temp_dir().join("knowledge-ingestor-auth-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("not-a-key.json");
        tokio::fs::write(&path, b"{\"unexpected\": true}").await.unwrap();

        let result = GcpAuth::discover(Some(path.to_str().unwrap())).await;
        assert!(matches!(result, Err(StoreError::ConnectionError(_))));
    }
}
