use serde::{Deserialize, Serialize};

/// Default placement when the form leaves the body part blank.
pub const DEFAULT_BODY_PART: &str = "back";
/// Default number of images when the form leaves the count blank.
pub const DEFAULT_IMAGE_COUNT: u32 = 2;

/// A validated generation request. Built fresh for every submission, either
/// through [`crate::validate::TattooForm::validate`] or directly via the
/// builders here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: String,
    pub body_part: Option<String>,
    pub image_count: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            style: style.into(),
            body_part: None,
            image_count: None,
        }
    }

    pub fn with_body_part(mut self, body_part: impl Into<String>) -> Self {
        self.body_part = Some(body_part.into());
        self
    }

    pub fn with_image_count(mut self, image_count: u32) -> Self {
        self.image_count = Some(image_count);
        self
    }
}

/// Wire body for the generation endpoint. Field names match the service
/// handler exactly; defaults are applied here so the payload is always
/// complete on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPayload {
    pub prompt: String,
    pub body_part: String,
    pub style: String,
    pub n_images: u32,
}

impl From<&GenerationRequest> for GenerationPayload {
    fn from(request: &GenerationRequest) -> Self {
        Self {
            prompt: request.prompt.clone(),
            body_part: request
                .body_part
                .clone()
                .unwrap_or_else(|| DEFAULT_BODY_PART.to_string()),
            style: request.style.clone(),
            n_images: request.image_count.unwrap_or(DEFAULT_IMAGE_COUNT),
        }
    }
}

/// Raw service reply: base64-encoded PNG payloads, no data-URI prefix.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    pub images: Vec<String>,
}

/// Renderable result handed to the UI. Each entry is a
/// `data:image/png;base64,...` string, in the order the service returned
/// them. The service may return fewer or more images than requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub images: Vec<String>,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_body_part_and_count() {
        let request = GenerationRequest::new("dragon", "Blackwork");
        let payload = GenerationPayload::from(&request);

        assert_eq!(payload.prompt, "dragon");
        assert_eq!(payload.style, "Blackwork");
        assert_eq!(payload.body_part, "back");
        assert_eq!(payload.n_images, 2);
    }

    #[test]
    fn payload_keeps_explicit_values() {
        let request = GenerationRequest::new("rose", "Fine Line")
            .with_body_part("forearm")
            .with_image_count(4);
        let payload = GenerationPayload::from(&request);

        assert_eq!(payload.body_part, "forearm");
        assert_eq!(payload.n_images, 4);
    }

    #[test]
    fn payload_serializes_wire_field_names() {
        let request = GenerationRequest::new("dragon", "Blackwork");
        let value = serde_json::to_value(GenerationPayload::from(&request)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "prompt": "dragon",
                "body_part": "back",
                "style": "Blackwork",
                "n_images": 2
            })
        );
    }

    #[test]
    fn images_response_deserializes() {
        let response: ImagesResponse =
            serde_json::from_str(r#"{ "images": ["AAA=", "BBB="] }"#).unwrap();
        assert_eq!(response.images, vec!["AAA=", "BBB="]);
    }
}
