use crate::config::ClientConfig;
use crate::document::SelectedFile;
use crate::error::{ClientError, Result};
use crate::models::*;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

/// HTTP client for the document question-answering backend.
pub struct BackendClient {
    client: Client,
    config: ClientConfig,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends the file as the `file` field of a multipart form and returns
    /// the backend's document id.
    pub async fn upload(&self, file: &SelectedFile) -> Result<String> {
        let bytes = file.read_bytes().await?;
        log::info!("Uploading {} ({})", file.name, file.display_size());

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.config.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            log::error!("Upload error ({}): {}", status, body);
            return Err(ClientError::UploadRejected { status, body });
        }

        let upload: UploadResponse = response.json().await?;
        log::info!("Indexed {} as document {}", file.name, upload.document_id);
        Ok(upload.document_id)
    }

    pub async fn ask(&self, document_id: &str, question: &str) -> Result<String> {
        let request = AskRequest {
            document_id: document_id.to_string(),
            question: question.to_string(),
        };
        log::debug!("Asking document {}: {}", document_id, question);

        let response = self
            .client
            .post(self.config.endpoint("ask"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Ask failed with status {}", status);
            return Err(ClientError::AskRejected { status });
        }

        let answer: AskResponse = response.json().await?;
        log::info!("Received answer ({} chars)", answer.result.chars().count());
        Ok(answer.result)
    }

    pub async fn health(&self) -> Result<String> {
        let response = self
            .client
            .get(self.config.endpoint("/"))
            .send()
            .await?
            .error_for_status()?;

        let health: HealthResponse = response.json().await?;
        Ok(health.message)
    }
}
