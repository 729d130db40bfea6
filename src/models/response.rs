use serde::Deserialize;

/// Body of a successful `v1:runImageFx` response. Upstream groups results
/// into panels, one per input prompt; we always send a single prompt but
/// keep the nesting as the protocol defines it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub image_panels: Vec<ImagePanel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePanel {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub generated_images: Vec<GeneratedImage>,
}

/// One raw generated-image record. Everything except `encodedImage` is
/// optional on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    #[serde(default)]
    pub encoded_image: Option<String>,
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub media_generation_id: Option<String>,
    #[serde(default)]
    pub model_name_type: Option<String>,
    #[serde(default)]
    pub workflow_id: Option<String>,
}

/// Body of the session-exchange response. An authenticated session carries
/// both fields; an expired or bogus cookie yields an empty object with a
/// 200 status, which is why both are optional here.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires: Option<String>,
}

/// Error envelope upstream attaches to non-success generation responses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
