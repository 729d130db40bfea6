use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose};

use crate::error::ImageError;
use crate::models::common::ImageType;
use crate::models::response::GeneratedImage;

// Upstream omits padding on some records, so decoding must not insist on it.
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// One generated image, parsed out of a raw upstream record. Immutable once
/// constructed; `request_index` ties it back to its position in the batch.
#[derive(Debug, Clone)]
pub struct Image {
    encoded_image: String,
    seed: Option<i64>,
    media_generation_id: Option<String>,
    model_name_type: Option<String>,
    workflow_id: Option<String>,
    request_index: usize,
}

impl Image {
    /// Parses one response record. The base64 payload is mandatory and must
    /// be base64-shaped text; all metadata fields are optional.
    pub fn from_record(record: GeneratedImage, request_index: usize) -> Result<Self, ImageError> {
        let encoded_image = record.encoded_image.ok_or_else(|| ImageError::MalformedRecord {
            index: request_index,
            detail: "missing encodedImage field".to_string(),
        })?;

        if encoded_image.is_empty() {
            return Err(ImageError::MalformedRecord {
                index: request_index,
                detail: "empty encodedImage field".to_string(),
            });
        }

        if !is_base64_shaped(&encoded_image) {
            return Err(ImageError::MalformedRecord {
                index: request_index,
                detail: "encodedImage is not base64 text".to_string(),
            });
        }

        Ok(Image {
            encoded_image,
            seed: record.seed,
            media_generation_id: record.media_generation_id,
            model_name_type: record.model_name_type,
            workflow_id: record.workflow_id,
            request_index,
        })
    }

    /// Raw base64 payload as received from upstream.
    pub fn encoded_image(&self) -> &str {
        &self.encoded_image
    }

    /// Upstream-provided seed, when present.
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Opaque upstream identifier for this generation, when present.
    pub fn media_generation_id(&self) -> Option<&str> {
        self.media_generation_id.as_deref()
    }

    pub fn model_name_type(&self) -> Option<&str> {
        self.model_name_type.as_deref()
    }

    pub fn workflow_id(&self) -> Option<&str> {
        self.workflow_id.as_deref()
    }

    /// Position of this image within the returned batch.
    pub fn request_index(&self) -> usize {
        self.request_index
    }

    /// Decodes the base64 payload into raw image bytes.
    pub fn decoded(&self) -> Result<Vec<u8>, ImageError> {
        Ok(BASE64_LENIENT.decode(self.encoded_image.as_bytes())?)
    }

    /// Renders the payload as a `data:` URI, the shape browser-side callers
    /// persist into their local history.
    pub fn as_data_uri(&self, image_type: ImageType) -> String {
        format!("data:{};base64,{}", image_type.mime(), self.encoded_image)
    }
}

fn is_base64_shaped(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=' | b'-' | b'_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(encoded: Option<&str>) -> GeneratedImage {
        GeneratedImage {
            encoded_image: encoded.map(String::from),
            seed: None,
            media_generation_id: None,
            model_name_type: None,
            workflow_id: None,
        }
    }

    #[test]
    fn test_parse_full_record() {
        let raw = GeneratedImage {
            encoded_image: Some("aGVsbG8=".to_string()),
            seed: Some(99),
            media_generation_id: Some("mg-1".to_string()),
            model_name_type: Some("IMAGEN_3_5".to_string()),
            workflow_id: Some("wf-1".to_string()),
        };

        let image = Image::from_record(raw, 3).unwrap();
        assert_eq!(image.encoded_image(), "aGVsbG8=");
        assert_eq!(image.seed(), Some(99));
        assert_eq!(image.media_generation_id(), Some("mg-1"));
        assert_eq!(image.request_index(), 3);
        assert_eq!(image.decoded().unwrap(), b"hello");
    }

    #[test]
    fn test_metadata_is_optional() {
        let image = Image::from_record(record(Some("AAA")), 0).unwrap();
        assert_eq!(image.seed(), None);
        assert_eq!(image.media_generation_id(), None);
    }

    #[test]
    fn test_missing_payload_is_malformed() {
        let err = Image::from_record(record(None), 1).unwrap_err();
        assert!(matches!(err, ImageError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn test_empty_payload_is_malformed() {
        assert!(Image::from_record(record(Some("")), 0).is_err());
    }

    #[test]
    fn test_non_base64_payload_is_malformed() {
        let err = Image::from_record(record(Some("not base64!!")), 2).unwrap_err();
        assert!(matches!(err, ImageError::MalformedRecord { index: 2, .. }));
    }

    #[test]
    fn test_decode_tolerates_missing_padding() {
        // "AAA" decodes to two zero bytes without padding.
        let image = Image::from_record(record(Some("AAA")), 0).unwrap();
        assert_eq!(image.decoded().unwrap(), vec![0u8, 0u8]);
    }

    #[test]
    fn test_data_uri() {
        let image = Image::from_record(record(Some("AAA")), 0).unwrap();
        assert_eq!(image.as_data_uri(ImageType::Png), "data:image/png;base64,AAA");
    }
}
