pub mod backend_client;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod profile;
pub mod session;

pub use backend_client::BackendClient;
pub use config::ClientConfig;
pub use document::{format_file_size, SelectedFile};
pub use error::{ClientError, Result};
pub use models::*;
pub use profile::Profile;
pub use session::{ChatSession, UploadOutcome};
