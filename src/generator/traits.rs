use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResult},
};
use async_trait::async_trait;

/// The executor seam the state controller depends on. Production code uses
/// [`crate::generator::ImageClient`]; tests substitute scripted fakes.
#[async_trait]
pub trait GenerateImages: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult>;
}
