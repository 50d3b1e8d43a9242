use crate::{
    config::{GeneratorConfig, DEFAULT_TIMEOUT_SECS},
    error::{GeneratorError, Result},
    generator::traits::GenerateImages,
    models::{GenerationPayload, GenerationRequest, GenerationResult, ImagesResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Media-type marker prepended to each base64 payload so the result is
/// directly renderable by an <img> element.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

const GENERATION_PATH: &str = "/tattoo";

/// The request executor: one HTTP POST per invocation, no retries, no
/// caching.
#[derive(Clone, Debug)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
}

impl ImageClient {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| GeneratorError::Config("generation service base URL is required".into()))?;

        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeneratorError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), GENERATION_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let payload = GenerationPayload::from(request);

        log::info!(
            "Requesting {} image(s) for body part '{}'",
            payload.n_images,
            payload.body_part
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Transport(format!("request timed out: {}", e))
                } else {
                    GeneratorError::Transport(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // The service replies with a JSON error body (e.g. a missing
            // prompt); surface it verbatim.
            let message = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Transport(format!("failed to read body: {}", e)))?;

        let images_response: ImagesResponse = serde_json::from_str(&body)
            .map_err(|e| GeneratorError::MalformedResponse(e.to_string()))?;

        log::debug!("Service returned {} image(s)", images_response.images.len());

        Ok(GenerationResult {
            images: images_response
                .images
                .into_iter()
                .map(|img| format!("{}{}", DATA_URI_PREFIX, img))
                .collect(),
        })
    }
}

#[async_trait]
impl GenerateImages for ImageClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        ImageClient::generate(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one HTTP response on an ephemeral local port and
    /// returns the base URL to point the client at.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> ImageClient {
        let config = GeneratorConfig::new()
            .with_base_url(base_url)
            .with_timeout_secs(5);
        ImageClient::new(&config).unwrap()
    }

    #[test]
    fn new_requires_base_url() {
        let err = ImageClient::new(&GeneratorConfig::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn endpoint_appends_path_once() {
        let client = client_for("http://localhost:9000/".to_string());
        assert_eq!(client.endpoint(), "http://localhost:9000/tattoo");
    }

    #[tokio::test]
    async fn decodes_images_into_ordered_data_uris() {
        let base_url = serve_once("200 OK", r#"{ "images": ["AAA=", "BBB="] }"#).await;
        let client = client_for(base_url);

        let result = client
            .generate(&GenerationRequest::new("dragon", "Blackwork"))
            .await
            .unwrap();

        assert_eq!(
            result.images,
            vec![
                "data:image/png;base64,AAA=".to_string(),
                "data:image/png;base64,BBB=".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn non_2xx_status_is_service_error() {
        let base_url = serve_once(
            "400 Bad Request",
            r#"{ "error": "Please provide a prompt" }"#,
        )
        .await;
        let client = client_for(base_url);

        let err = client
            .generate(&GenerationRequest::new("dragon", "Blackwork"))
            .await
            .unwrap_err();

        match err {
            GeneratorError::Service { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("Please provide a prompt"));
            }
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn invalid_json_body_is_malformed_response() {
        let base_url = serve_once("200 OK", "<html>not json</html>").await;
        let client = client_for(base_url);

        let err = client
            .generate(&GenerationRequest::new("dragon", "Blackwork"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn missing_images_field_is_malformed_response() {
        let base_url = serve_once("200 OK", r#"{ "pictures": [] }"#).await;
        let client = client_for(base_url);

        let err = client
            .generate(&GenerationRequest::new("dragon", "Blackwork"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        // Bind then drop so the port is closed when the client connects.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client
            .generate(&GenerationRequest::new("dragon", "Blackwork"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
