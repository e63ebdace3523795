use super::model::AuthenticatedUser;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use super::jwks::JwksClient;

/// Algorithms accepted for session tokens issued by the auth provider
const ALLOWED_ALGORITHMS: [Algorithm; 2] = [Algorithm::RS256, Algorithm::ES256];

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    /// Provider-level role (e.g. "authenticated"), not an application role
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    app_metadata: AppMetadata,
}

/// Server-controlled metadata; only the provider's admin API can write it
#[derive(Debug, Clone, Default, Deserialize)]
struct AppMetadata {
    #[serde(default)]
    roles: Vec<String>,
}

impl JwtValidator {
    pub fn new(
        jwks_client: Arc<JwksClient>,
        issuer: String,
        audience: String,
        leeway: Duration,
    ) -> Self {
        Self {
            jwks_client,
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if !ALLOWED_ALGORITHMS.contains(&header.alg) {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self
            .jwks_client
            .get_key(&kid)
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let mut validation = Validation::new(header.alg);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        Ok(into_user(token_data.claims))
    }
}

fn into_user(claims: Claims) -> AuthenticatedUser {
    if claims.role.as_deref() == Some("anon") {
        tracing::debug!("Anonymous session token presented for {}", claims.sub);
    }

    AuthenticatedUser {
        sub: claims.sub,
        email: claims.email,
        roles: claims.app_metadata.roles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_come_from_app_metadata() {
        let claims: Claims = serde_json::from_value(serde_json::json!({
            "sub": "user-1",
            "email": "admin@librairie.ma",
            "role": "authenticated",
            "app_metadata": { "roles": ["admin"], "provider": "email" },
            "user_metadata": { "roles": ["ignored"] }
        }))
        .unwrap();

        let user = into_user(claims);
        assert_eq!(user.sub, "user-1");
        assert_eq!(user.email.as_deref(), Some("admin@librairie.ma"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_missing_metadata_means_no_roles() {
        let claims: Claims =
            serde_json::from_value(serde_json::json!({ "sub": "user-2" })).unwrap();
        let user = into_user(claims);
        assert!(user.roles.is_empty());
        assert!(!user.is_admin());
    }
}
