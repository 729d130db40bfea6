use std::time::Duration as StdDuration;

use chrono::Utc;
use reqwest::header::{HeaderMap, ORIGIN, REFERER};
use uuid::Uuid;

use crate::account::Account;
use crate::config::ImageFxConfig;
use crate::error::{ImageFxError, Result};
use crate::models::common::LABS_ORIGIN;
use crate::models::image::Image;
use crate::models::response::{ErrorEnvelope, GenerationResponse};
use crate::prompt::Prompt;

const GENERATION_PATH: &str = "/v1:runImageFx";

/// The public entry point: owns the [`Account`] for one session cookie and
/// turns a validated [`Prompt`] into an ordered batch of [`Image`] results.
///
/// # Example
///
/// ```rust,no_run
/// use imgfx::{ImageFx, Prompt};
///
/// # async fn run() -> Result<(), imgfx::ImageFxError> {
/// let fx = ImageFx::new("__Secure-next-auth.session-token=...")?;
/// let prompt = Prompt::new("a red fox in the snow")?;
/// let images = fx.generate_image(&prompt).await?;
/// for image in &images {
///     println!("{} bytes of base64", image.encoded_image().len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ImageFx {
    account: Account,
    http: reqwest::Client,
    generation_url: String,
}

impl ImageFx {
    /// Creates a client against the real upstream endpoints.
    pub fn new(cookie: impl Into<String>) -> Result<Self> {
        Self::with_config(cookie, ImageFxConfig::default())
    }

    /// Creates a client with explicit endpoints, timeout, and token refresh
    /// margin.
    pub fn with_config(cookie: impl Into<String>, config: ImageFxConfig) -> Result<Self> {
        let account = Account::new(cookie, &config)?;
        let http = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(config.timeout_secs))
            .build()?;

        Ok(ImageFx {
            account,
            http,
            generation_url: format!(
                "{}{}",
                config.api_base_url.trim_end_matches('/'),
                GENERATION_PATH
            ),
        })
    }

    /// The credential holder backing this client.
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Runs one generation request: obtains a valid bearer token (refreshing
    /// it if needed), posts the serialized prompt, and parses the response
    /// into an ordered `Vec<Image>`.
    ///
    /// A single logical attempt per invocation; nothing in here retries.
    /// Upstream decides how many records come back (normally
    /// `prompt.image_count()`, but its word is authoritative). A batch
    /// either parses fully or the whole call fails.
    pub async fn generate_image(&self, prompt: &Prompt) -> Result<Vec<Image>> {
        let request_id = Uuid::new_v4();
        let session_id = format!(";{}", Utc::now().timestamp_millis());
        let payload = prompt.to_request(session_id);

        log::info!(
            "[{}] requesting {} image(s), model {}, ratio {}",
            request_id,
            prompt.image_count(),
            prompt.model(),
            prompt.aspect_ratio()
        );

        let token = self.account.get_token().await?;

        let response = self
            .http
            .post(&self.generation_url)
            .headers(self.build_headers())
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_detail(&body);
            log::warn!("[{}] generation rejected: http {} - {}", request_id, status, detail);
            return Err(ImageFxError::GenerationFailed {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        let parsed: GenerationResponse = serde_json::from_str(&body)
            .map_err(|e| ImageFxError::InvalidResponse(format!("bad generation body: {}", e)))?;

        let records = parsed
            .image_panels
            .into_iter()
            .flat_map(|panel| panel.generated_images);

        let mut images = Vec::new();
        for (index, record) in records.enumerate() {
            images.push(Image::from_record(record, index)?);
        }

        log::info!("[{}] received {} image(s)", request_id, images.len());
        Ok(images)
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, LABS_ORIGIN.parse().unwrap());
        headers.insert(REFERER, LABS_ORIGIN.parse().unwrap());
        headers
    }
}

/// Non-success bodies usually carry a JSON error envelope; fall back to the
/// raw body when they do not.
fn extract_error_detail(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(message) = envelope.error.message {
            return message;
        }
        if let Some(status) = envelope.error.status {
            return status;
        }
    }
    if body.is_empty() {
        "no error detail from upstream".to_string()
    } else {
        body.to_string()
    }
}
