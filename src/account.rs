use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use reqwest::header::COOKIE;
use tokio::sync::Mutex;

use crate::config::ImageFxConfig;
use crate::error::{AccountError, ImageFxError};
use crate::models::response::SessionResponse;

const SESSION_PATH: &str = "/fx/api/auth/session";

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Owns the caller-supplied session cookie and exchanges it for short-lived
/// bearer tokens, refreshing on demand.
///
/// The cookie is opaque input: it is never mutated and never logged in
/// cleartext. One refresh HTTP call is made at most per [`get_token`]
/// invocation; cache hits touch the network not at all. Concurrent callers
/// may race into independent refreshes; the last successful one wins and
/// readers never observe a torn token/expiry pair.
///
/// [`get_token`]: Account::get_token
pub struct Account {
    cookie: String,
    http: reqwest::Client,
    session_url: String,
    refresh_margin: Duration,
    cached: Mutex<Option<CachedToken>>,
}

impl Account {
    pub fn new(cookie: impl Into<String>, config: &ImageFxConfig) -> Result<Self, ImageFxError> {
        let http = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Account {
            cookie: cookie.into(),
            http,
            session_url: format!(
                "{}{}",
                config.auth_base_url.trim_end_matches('/'),
                SESSION_PATH
            ),
            refresh_margin: Duration::seconds(config.token_refresh_margin_secs),
            cached: Mutex::new(None),
        })
    }

    /// Returns a bearer token that is valid for at least the configured
    /// refresh margin, exchanging the cookie upstream when the cached one
    /// is absent or about to expire. A failed exchange is not sticky; the
    /// next call attempts a fresh one.
    pub async fn get_token(&self) -> Result<String, AccountError> {
        let now = Utc::now();

        {
            let cached = self.cached.lock().await;
            if let Some(entry) = cached.as_ref() {
                if now + self.refresh_margin < entry.expires_at {
                    log::debug!("bearer token cache hit, expires at {}", entry.expires_at);
                    return Ok(entry.token.clone());
                }
                log::debug!("cached bearer token expired or expiring, refreshing");
            }
        }

        // The exchange happens outside the lock so concurrent callers are
        // never serialized behind a slow upstream. Last writer wins.
        let fresh = self.refresh().await?;
        let token = fresh.token.clone();
        *self.cached.lock().await = Some(fresh);
        Ok(token)
    }

    async fn refresh(&self) -> Result<CachedToken, AccountError> {
        log::debug!(
            "exchanging session cookie ({} bytes) for a bearer token",
            self.cookie.len()
        );

        let response = self
            .http
            .get(&self.session_url)
            .header(COOKIE, &self.cookie)
            .send()
            .await
            .map_err(|e| AccountError::AuthenticationFailed {
                status: None,
                detail: format!("session request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AccountError::AuthenticationFailed {
                status: Some(status.as_u16()),
                detail: if detail.is_empty() {
                    "session endpoint rejected the cookie".to_string()
                } else {
                    detail
                },
            });
        }

        let session: SessionResponse =
            response
                .json()
                .await
                .map_err(|e| AccountError::AuthenticationFailed {
                    status: Some(status.as_u16()),
                    detail: format!("malformed session response: {}", e),
                })?;

        let token = match session.access_token {
            Some(token) if !token.is_empty() => token,
            // An expired or invalid cookie comes back as a 200 with an
            // empty session object.
            _ => {
                return Err(AccountError::AuthenticationFailed {
                    status: Some(status.as_u16()),
                    detail: "session carried no access token; the cookie is likely expired"
                        .to_string(),
                })
            }
        };

        let raw_expiry = session
            .expires
            .ok_or_else(|| AccountError::AuthenticationFailed {
                status: Some(status.as_u16()),
                detail: "session carried no expiry".to_string(),
            })?;

        let expires_at = DateTime::parse_from_rfc3339(&raw_expiry)
            .map_err(|e| AccountError::AuthenticationFailed {
                status: Some(status.as_u16()),
                detail: format!("unparseable session expiry {:?}: {}", raw_expiry, e),
            })?
            .with_timezone(&Utc);

        log::info!("obtained bearer token, valid until {}", expires_at);
        Ok(CachedToken { token, expires_at })
    }
}
