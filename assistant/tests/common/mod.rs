#![allow(dead_code)]

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use paper_assistant::{
    AskRequest, AskResponse, ClientConfig, HealthResponse, Profile, SelectedFile, UploadResponse,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct ReceivedUpload {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct MockState {
    pub uploads: Mutex<Vec<ReceivedUpload>>,
    pub questions: Mutex<Vec<AskRequest>>,
    pub reject_upload: Mutex<Option<(StatusCode, String)>>,
    pub fail_ask: Mutex<bool>,
}

/// Stand-in for the question-answering service, bound to an ephemeral port.
pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/", get(root))
            .route("/upload", post(upload))
            .route("/ask", post(ask))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn config(&self, profile: Profile) -> ClientConfig {
        ClientConfig::new(profile, &self.base_url).unwrap()
    }

    pub fn reject_uploads(&self, status: StatusCode, body: &str) {
        *self.state.reject_upload.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn fail_asks(&self) {
        *self.state.fail_ask.lock().unwrap() = true;
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.state.uploads.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<AskRequest> {
        self.state.questions.lock().unwrap().clone()
    }
}

/// Config for a backend that refuses connections.
pub async fn unreachable_config(profile: Profile) -> ClientConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ClientConfig::new(profile, &format!("http://{}", addr)).unwrap()
}

pub fn write_pdf(dir: &Path, name: &str, content: &[u8]) -> SelectedFile {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    SelectedFile::pick(&path).unwrap()
}

async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Server running successfully".to_string(),
    })
}

async fn upload(
    State(state): State<Arc<MockState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    let rejection = state.reject_upload.lock().unwrap().clone();
    if let Some(rejection) = rejection {
        return Err(rejection);
    }

    let field = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
        .ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    let name = field.name().unwrap_or_default().to_string();
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let bytes = field
        .bytes()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut uploads = state.uploads.lock().unwrap();
    uploads.push(ReceivedUpload {
        field: name,
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    });

    Ok(Json(UploadResponse {
        document_id: format!("doc-{}", uploads.len()),
    }))
}

async fn ask(
    State(state): State<Arc<MockState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, StatusCode> {
    let fail = *state.fail_ask.lock().unwrap();
    state.questions.lock().unwrap().push(request.clone());
    if fail {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    Ok(Json(AskResponse {
        result: format!("[{}] {}", request.document_id, request.question),
    }))
}
