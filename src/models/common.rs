use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PromptError;

/// Session endpoint that exchanges the browser cookie for a bearer token.
pub const DEFAULT_AUTH_BASE_URL: &str = "https://labs.google";

/// Generation API host.
pub const DEFAULT_API_BASE_URL: &str = "https://aisandbox-pa.googleapis.com";

/// `Origin`/`Referer` value the generation endpoint expects on every call.
pub const LABS_ORIGIN: &str = "https://labs.google";

/// Tool identifier sent in the request `clientContext`.
pub const TOOL_NAME: &str = "IMAGE_FX";

/// Image generation model. Values mirror the upstream wire strings exactly;
/// unknown strings are rejected at the boundary rather than passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "IMAGEN_2")]
    Imagen2,
    #[serde(rename = "IMAGEN_3")]
    Imagen3,
    #[serde(rename = "IMAGEN_3_1")]
    Imagen3_1,
    #[serde(rename = "IMAGEN_3_5")]
    Imagen3_5,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Imagen2 => "IMAGEN_2",
            Model::Imagen3 => "IMAGEN_3",
            Model::Imagen3_1 => "IMAGEN_3_1",
            Model::Imagen3_5 => "IMAGEN_3_5",
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Imagen3_5
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IMAGEN_2" => Ok(Model::Imagen2),
            "IMAGEN_3" => Ok(Model::Imagen3),
            "IMAGEN_3_1" => Ok(Model::Imagen3_1),
            "IMAGEN_3_5" => Ok(Model::Imagen3_5),
            _ => Err(PromptError::InvalidEnumValue {
                field: "generationModel",
                value: s.to_string(),
            }),
        }
    }
}

/// Aspect ratio of the generated images, in upstream wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "IMAGE_ASPECT_RATIO_SQUARE")]
    Square,
    #[serde(rename = "IMAGE_ASPECT_RATIO_PORTRAIT")]
    Portrait,
    #[serde(rename = "IMAGE_ASPECT_RATIO_LANDSCAPE")]
    Landscape,
    #[serde(rename = "IMAGE_ASPECT_RATIO_PORTRAIT_THREE_FOUR")]
    PortraitThreeFour,
    #[serde(rename = "IMAGE_ASPECT_RATIO_LANDSCAPE_FOUR_THREE")]
    LandscapeFourThree,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "IMAGE_ASPECT_RATIO_SQUARE",
            AspectRatio::Portrait => "IMAGE_ASPECT_RATIO_PORTRAIT",
            AspectRatio::Landscape => "IMAGE_ASPECT_RATIO_LANDSCAPE",
            AspectRatio::PortraitThreeFour => "IMAGE_ASPECT_RATIO_PORTRAIT_THREE_FOUR",
            AspectRatio::LandscapeFourThree => "IMAGE_ASPECT_RATIO_LANDSCAPE_FOUR_THREE",
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Landscape
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IMAGE_ASPECT_RATIO_SQUARE" => Ok(AspectRatio::Square),
            "IMAGE_ASPECT_RATIO_PORTRAIT" => Ok(AspectRatio::Portrait),
            "IMAGE_ASPECT_RATIO_LANDSCAPE" => Ok(AspectRatio::Landscape),
            "IMAGE_ASPECT_RATIO_PORTRAIT_THREE_FOUR" => Ok(AspectRatio::PortraitThreeFour),
            "IMAGE_ASPECT_RATIO_LANDSCAPE_FOUR_THREE" => Ok(AspectRatio::LandscapeFourThree),
            _ => Err(PromptError::InvalidEnumValue {
                field: "aspectRatio",
                value: s.to_string(),
            }),
        }
    }
}

/// Output container format, used when rendering a data URI for callers that
/// persist results the way the ImageFX web gallery does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Png,
    Jpeg,
    Webp,
}

impl ImageType {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpeg => "image/jpeg",
            ImageType::Webp => "image/webp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_wire_values() {
        assert_eq!(
            serde_json::to_value(Model::Imagen3_5).unwrap(),
            serde_json::json!("IMAGEN_3_5")
        );
        assert_eq!("IMAGEN_3_1".parse::<Model>().unwrap(), Model::Imagen3_1);
        assert_eq!(Model::Imagen2.to_string(), "IMAGEN_2");
    }

    #[test]
    fn test_model_rejects_unknown_value() {
        let err = "IMAGEN_99".parse::<Model>().unwrap_err();
        assert!(matches!(
            err,
            PromptError::InvalidEnumValue {
                field: "generationModel",
                ..
            }
        ));
    }

    #[test]
    fn test_aspect_ratio_wire_values() {
        assert_eq!(
            serde_json::to_value(AspectRatio::Landscape).unwrap(),
            serde_json::json!("IMAGE_ASPECT_RATIO_LANDSCAPE")
        );
        assert_eq!(
            "IMAGE_ASPECT_RATIO_SQUARE".parse::<AspectRatio>().unwrap(),
            AspectRatio::Square
        );
    }

    #[test]
    fn test_aspect_ratio_rejects_unknown_value() {
        assert!("16:9".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Model::default(), Model::Imagen3_5);
        assert_eq!(AspectRatio::default(), AspectRatio::Landscape);
    }

    #[test]
    fn test_image_type_mime() {
        assert_eq!(ImageType::Png.mime(), "image/png");
        assert_eq!(ImageType::Jpeg.mime(), "image/jpeg");
    }
}
