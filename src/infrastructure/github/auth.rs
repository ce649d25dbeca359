//! Request authentication for the GitHub API.
//!
//! Two mechanisms, chosen once per run from [`Credentials`]:
//!
//! - token auth: a static `authorization: token <value>` header on every call;
//! - App auth: a short-lived RS256 JWT signed with the App's private key is
//!   exchanged for an installation access token, which then signs every call.
//!
//! The installation token is fetched lazily on the first request and reused
//! for the remainder of the run. A run is three sequential calls, so no
//! refresh handling is needed.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use super::error::GithubApiError;
use crate::domain::models::Credentials;

/// JWT lifetime. GitHub caps App JWTs at 10 minutes.
const JWT_EXPIRY_SECS: u64 = 9 * 60;

/// Issued-at backdate to absorb clock drift between us and GitHub.
const JWT_DRIFT_SECS: u64 = 60;

/// Claims of a GitHub App JWT
#[derive(Debug, Serialize)]
struct AppClaims {
    /// Issued at (Unix timestamp, backdated)
    iat: u64,
    /// Expiration time (Unix timestamp)
    exp: u64,
    /// Issuer: the App's numeric id
    iss: String,
}

/// Response of the installation access-token exchange.
#[derive(Debug, Deserialize)]
struct InstallationToken {
    token: String,
}

/// Produces the `authorization` header value for every outgoing request.
pub struct AuthProvider {
    credentials: Credentials,
    api_url: String,
    http: reqwest::Client,
    /// Lazily fetched installation token (App auth only).
    installation_token: OnceCell<String>,
}

impl AuthProvider {
    /// Create a provider for the given credentials.
    ///
    /// `api_url` is the REST base (e.g. `https://api.github.com`), used only
    /// for the App token exchange.
    pub fn new(credentials: Credentials, api_url: String, http: reqwest::Client) -> Self {
        info!("Using {} credentials for this integration", credentials.kind());
        Self {
            credentials,
            api_url,
            http,
            installation_token: OnceCell::new(),
        }
    }

    /// Resolve the `authorization` header value for the next request.
    pub async fn authorization_header(&self) -> Result<String, GithubApiError> {
        match &self.credentials {
            Credentials::Token(token) => Ok(format!("token {token}")),
            Credentials::App { .. } => {
                let token = self
                    .installation_token
                    .get_or_try_init(|| self.fetch_installation_token())
                    .await?;
                Ok(format!("token {token}"))
            }
        }
    }

    /// Exchange a signed App JWT for an installation access token.
    async fn fetch_installation_token(&self) -> Result<String, GithubApiError> {
        let Credentials::App {
            app_id,
            installation_id,
            private_key,
        } = &self.credentials
        else {
            // authorization_header only reaches here for App credentials
            return Err(GithubApiError::AppToken(
                "installation token requested for token credentials".to_string(),
            ));
        };

        let jwt = sign_app_jwt(app_id, private_key)?;
        let url = format!(
            "{}/app/installations/{installation_id}/access_tokens",
            self.api_url
        );

        debug!(%url, app_id, "Exchanging App JWT for installation token");

        let response = self
            .http
            .post(&url)
            .header("authorization", format!("Bearer {jwt}"))
            .header("accept", "application/vnd.github+json")
            .header("user-agent", "project-assigner")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(GithubApiError::AppToken(format!(
                "access_tokens returned {status}: {body}"
            )));
        }

        let token: InstallationToken = response.json().await?;
        debug!("Installation token acquired");
        Ok(token.token)
    }
}

/// Sign a short-lived RS256 JWT with the App's private key.
fn sign_app_jwt(app_id: &str, private_key: &str) -> Result<String, GithubApiError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| GithubApiError::AppToken("system clock before Unix epoch".to_string()))?
        .as_secs();

    let claims = AppClaims {
        iat: now.saturating_sub(JWT_DRIFT_SECS),
        exp: now + JWT_EXPIRY_SECS,
        iss: app_id.to_string(),
    };

    let key = EncodingKey::from_rsa_pem(private_key.as_bytes())?;
    Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
}
