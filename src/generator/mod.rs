pub mod image_client;
pub mod traits;

use crate::{config::GeneratorConfig, controller::GenerationController, error::Result};
use std::sync::Arc;

pub use image_client::{ImageClient, DATA_URI_PREFIX};
pub use traits::GenerateImages;

/// Facade over the generation service. One instance per configured endpoint;
/// controllers created from it share the same underlying HTTP client.
#[derive(Clone)]
pub struct TattooClient {
    image_client: ImageClient,
}

impl TattooClient {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            image_client: ImageClient::new(config)?,
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    /// A fresh, locally-owned state controller. Each view component should
    /// hold its own rather than share one.
    pub fn controller(&self) -> GenerationController {
        GenerationController::new(Arc::new(self.image_client.clone()))
    }
}
