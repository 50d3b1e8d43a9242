use crate::models::GenerationRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingField,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Field-indexed validation failures, so a form can render a message next to
/// the control that caused it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn kind_for(&self, field: &str) -> Option<ValidationErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.kind)
    }

    fn push(&mut self, field: &'static str, kind: ValidationErrorKind, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            kind,
            message: message.into(),
        });
    }
}

/// Raw form values exactly as text controls produce them. Empty strings mean
/// the field was left blank.
#[derive(Debug, Clone, Default)]
pub struct TattooForm {
    pub prompt: String,
    pub style: String,
    pub body_part: String,
    pub image_count: String,
}

impl TattooForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_body_part(mut self, body_part: impl Into<String>) -> Self {
        self.body_part = body_part.into();
        self
    }

    pub fn with_image_count(mut self, image_count: impl Into<String>) -> Self {
        self.image_count = image_count.into();
        self
    }

    /// Pure validation: either a well-typed [`GenerationRequest`] or the full
    /// set of per-field errors. Callers must not issue a request on failure.
    pub fn validate(&self) -> Result<GenerationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            errors.push(
                "prompt",
                ValidationErrorKind::MissingField,
                "Please enter a prompt.",
            );
        }

        // Style is free text; the UI may offer a preset list but anything
        // non-empty passes through as-is.
        let style = self.style.trim();

        let body_part = self.body_part.trim();

        let image_count = match self.image_count.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => Some(n),
                _ => {
                    errors.push(
                        "image_count",
                        ValidationErrorKind::InvalidFormat,
                        "Image count must be a positive whole number.",
                    );
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut request = GenerationRequest::new(prompt, style);
        if !body_part.is_empty() {
            request = request.with_body_part(body_part);
        }
        if let Some(n) = image_count {
            request = request.with_image_count(n);
        }
        Ok(request)
    }
}
