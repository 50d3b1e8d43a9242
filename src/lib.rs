pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod validate;

pub use config::GeneratorConfig;
pub use controller::GenerationController;
pub use error::{ErrorInfo, ErrorKind, GeneratorError, Result};
pub use generator::{GenerateImages, ImageClient, TattooClient, DATA_URI_PREFIX};
pub use models::*;
pub use validate::{FieldError, TattooForm, ValidationErrorKind, ValidationErrors};
