use crate::backend_client::BackendClient;
use crate::document::SelectedFile;
use crate::error::ClientError;
use crate::models::*;
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file was selected, nothing was sent.
    Skipped,
    Indexed {
        document_id: String,
        alert: Option<Alert>,
    },
    Failed(Alert),
}

/// Client-side state of one chat screen: the picked file, the indexed
/// document and the conversation about it.
#[derive(Debug)]
pub struct ChatSession {
    profile: Profile,
    file: Option<SelectedFile>,
    document_id: Option<String>,
    chat: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            file: None,
            document_id: None,
            chat: Vec::new(),
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn is_ready(&self) -> bool {
        self.document_id.is_some()
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub async fn upload(&mut self, client: &BackendClient) -> UploadOutcome {
        let Some(file) = self.file.as_ref() else {
            return UploadOutcome::Skipped;
        };

        let result = client.upload(file).await;
        match result {
            Ok(document_id) => {
                self.document_id = Some(document_id.clone());
                self.chat.clear();
                self.file = None;
                UploadOutcome::Indexed {
                    document_id,
                    alert: self.profile.upload_success_alert(),
                }
            }
            Err(ClientError::UploadRejected { body, .. }) => {
                UploadOutcome::Failed(self.profile.upload_rejected_alert(&body))
            }
            Err(e) => {
                log::error!("Upload failed: {}", e);
                UploadOutcome::Failed(self.profile.upload_network_alert())
            }
        }
    }

    /// Appends the question and its answer (or the failure notice) to the
    /// chat. Returns the assistant message, or `None` when nothing was asked.
    pub async fn ask(&mut self, client: &BackendClient, question: &str) -> Option<ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let document_id = self.document_id.clone()?;

        self.chat.push(ChatMessage::user(question));
        let reply = match client.ask(&document_id, question).await {
            Ok(answer) => ChatMessage::assistant(answer),
            Err(e) => {
                log::warn!("Failed to fetch answer: {}", e);
                ChatMessage::assistant(self.profile.ask_failed_message())
            }
        };
        self.chat.push(reply.clone());
        Some(reply)
    }
}
