use serde::Serialize;

use super::common::{AspectRatio, Model};

/// Full body of the `v1:runImageFx` POST. Field names and nesting are fixed
/// by the upstream protocol.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub user_input: UserInput,
    pub client_context: ClientContext,
    pub model_input: ModelInput,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub candidates_count: u8,
    pub prompts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext {
    pub session_id: String,
    pub tool: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInput {
    pub model_name_type: Model,
}
