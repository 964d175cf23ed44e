use crate::document::format_file_size;
use crate::error::ClientError;
use crate::models::Alert;
use std::fmt;
use std::str::FromStr;

/// Which front-end the client behaves like. Both talk to the same backend;
/// they differ in default address and in the wording shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Web,
    Mobile,
}

impl Profile {
    pub fn default_backend_url(self) -> &'static str {
        match self {
            Profile::Web => "http://127.0.0.1:8000",
            Profile::Mobile => "http://192.168.1.6:8000",
        }
    }

    /// Alert for an `/upload` that came back with a non-2xx status.
    pub fn upload_rejected_alert(self, body: &str) -> Alert {
        match self {
            Profile::Web => Alert::new(format!("Upload failed: {}", body)),
            Profile::Mobile => {
                let message = if body.is_empty() { "Server error" } else { body };
                Alert::with_message("Upload Failed", message)
            }
        }
    }

    /// Alert for an upload that never got a usable response.
    pub fn upload_network_alert(self) -> Alert {
        match self {
            Profile::Web => Alert::new("Upload failed"),
            Profile::Mobile => Alert::with_message("Network Error", "Check connection and server."),
        }
    }

    pub fn upload_success_alert(self) -> Option<Alert> {
        match self {
            Profile::Web => None,
            Profile::Mobile => Some(Alert::with_message(
                "Success 🎉",
                "Paper indexed! Ready for questions.",
            )),
        }
    }

    pub fn pick_failed_alert(self) -> Alert {
        match self {
            Profile::Web => Alert::new("Upload failed"),
            Profile::Mobile => Alert::with_message("Error", "Failed to pick PDF file"),
        }
    }

    /// Chat text appended when a question could not be answered.
    pub fn ask_failed_message(self) -> &'static str {
        match self {
            Profile::Web => "⚠️ Failed to fetch answer.",
            Profile::Mobile => "⚠️ Failed to get answer.",
        }
    }

    /// Size shown next to the selected file. The mobile picker may not
    /// report a size, so zero shows nothing there.
    pub fn file_size_label(self, bytes: u64) -> String {
        match self {
            Profile::Mobile if bytes == 0 => String::new(),
            _ => format_file_size(bytes),
        }
    }

    pub fn indexing_label(self) -> &'static str {
        match self {
            Profile::Web => "Indexing Paper...",
            Profile::Mobile => "Indexing...",
        }
    }
}

impl FromStr for Profile {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web" => Ok(Profile::Web),
            "mobile" => Ok(Profile::Mobile),
            other => Err(ClientError::Config(format!(
                "unknown profile '{}', expected 'web' or 'mobile'",
                other
            ))),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Web => write!(f, "web"),
            Profile::Mobile => write!(f, "mobile"),
        }
    }
}
