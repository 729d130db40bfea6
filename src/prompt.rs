use crate::error::PromptError;
use crate::models::common::{AspectRatio, Model, TOOL_NAME};
use crate::models::request::{ClientContext, GenerationRequest, ModelInput, UserInput};

pub const MIN_IMAGE_COUNT: u8 = 1;
pub const MAX_IMAGE_COUNT: u8 = 4;
pub const DEFAULT_IMAGE_COUNT: u8 = 2;

/// A validated, immutable image-generation request.
///
/// Construction is fail-fast: empty text or an out-of-range image count is
/// rejected before any network access happens. Omitted fields fall back to
/// fixed defaults ([`Model::Imagen3_5`], [`AspectRatio::Landscape`], two
/// images).
#[derive(Debug, Clone)]
pub struct Prompt {
    text: String,
    model: Model,
    aspect_ratio: AspectRatio,
    image_count: u8,
    seed: Option<u32>,
}

impl Prompt {
    /// Builds a prompt with all defaults.
    pub fn new(text: impl Into<String>) -> Result<Self, PromptError> {
        Self::builder(text).build()
    }

    pub fn builder(text: impl Into<String>) -> PromptBuilder {
        PromptBuilder {
            text: text.into(),
            model: Model::default(),
            aspect_ratio: AspectRatio::default(),
            image_count: DEFAULT_IMAGE_COUNT,
            seed: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn image_count(&self) -> u8 {
        self.image_count
    }

    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Serializes this prompt into the exact wire payload the generation
    /// endpoint expects. Pure: the caller supplies the session id.
    pub fn to_request(&self, session_id: impl Into<String>) -> GenerationRequest {
        GenerationRequest {
            user_input: UserInput {
                candidates_count: self.image_count,
                prompts: vec![self.text.clone()],
                seed: self.seed,
            },
            client_context: ClientContext {
                session_id: session_id.into(),
                tool: TOOL_NAME.to_string(),
            },
            model_input: ModelInput {
                model_name_type: self.model,
            },
            aspect_ratio: self.aspect_ratio,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    text: String,
    model: Model,
    aspect_ratio: AspectRatio,
    image_count: u8,
    seed: Option<u32>,
}

impl PromptBuilder {
    pub fn model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn image_count(mut self, count: u8) -> Self {
        self.image_count = count;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates and freezes the prompt. Out-of-range values fail here,
    /// never silently clamped.
    pub fn build(self) -> Result<Prompt, PromptError> {
        if self.text.trim().is_empty() {
            return Err(PromptError::InvalidText);
        }
        if !(MIN_IMAGE_COUNT..=MAX_IMAGE_COUNT).contains(&self.image_count) {
            return Err(PromptError::InvalidCount(self.image_count));
        }

        Ok(Prompt {
            text: self.text,
            model: self.model,
            aspect_ratio: self.aspect_ratio,
            image_count: self.image_count,
            seed: self.seed,
        })
    }
}
