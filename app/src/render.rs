use paper_assistant::{
    Alert, ChatMessage, ChatSession, ClientConfig, Profile, Role, SelectedFile, EXAMPLE_QUESTIONS,
};

const USER_PREFIX: &str = "You › ";
const ASSISTANT_PREFIX: &str = "Assistant › ";

pub fn header() -> String {
    "Research Paper Assistant\nUpload a PDF and explore it with AI-powered questions".to_string()
}

pub fn help() -> String {
    [
        "/open <file.pdf>    select a PDF",
        "/drop               forget the selected PDF",
        "/upload [file.pdf]  upload and index the selected PDF",
        "/examples           list example questions",
        "/example <n>        ask example question n",
        "/history            show the conversation",
        "/status             show backend and document",
        "/health             check that the backend is up",
        "/quit               leave",
        "anything else is sent as a question",
    ]
    .join("\n")
}

pub fn selected_file(file: &SelectedFile, profile: Profile) -> String {
    let size = profile.file_size_label(file.size);
    if size.is_empty() {
        format!("📄 {}", file.name)
    } else {
        format!("📄 {} ({})", file.name, size)
    }
}

pub fn ready_banner() -> String {
    "✅ Paper successfully indexed and ready for questions!".to_string()
}

pub fn empty_chat() -> String {
    let mut out = String::from("Ask anything about your paper\nTry one of these examples:");
    for (i, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, question));
    }
    out
}

/// Renders one chat turn; continuation lines line up under the first.
pub fn message(message: &ChatMessage) -> String {
    let prefix = match message.role {
        Role::User => USER_PREFIX,
        Role::Assistant => ASSISTANT_PREFIX,
    };
    let indent = " ".repeat(prefix.chars().count());

    let mut out = String::new();
    for (i, line) in message.content.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(&indent);
        } else {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    if out.is_empty() {
        out.push_str(prefix.trim_end());
    }
    out
}

pub fn history(session: &ChatSession) -> String {
    if session.chat().is_empty() {
        return empty_chat();
    }
    session
        .chat()
        .iter()
        .map(message)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn thinking() -> String {
    format!("{}Thinking...", ASSISTANT_PREFIX)
}

pub fn alert(alert: &Alert) -> String {
    match &alert.message {
        Some(message) => format!("⚠ {}: {}", alert.title, message),
        None => format!("⚠ {}", alert.title),
    }
}

pub fn status(session: &ChatSession, config: &ClientConfig) -> String {
    let file = session
        .selected_file()
        .map(|file| selected_file(file, session.profile()))
        .unwrap_or_else(|| "none".to_string());
    let document = session.document_id().unwrap_or("not uploaded");
    format!(
        "backend:  {} ({} profile)\nselected: {}\ndocument: {}\nmessages: {}",
        config.backend_url,
        config.profile,
        file,
        document,
        session.chat().len()
    )
}

pub fn prompt(session: &ChatSession) -> &'static str {
    if session.is_ready() {
        "ask> "
    } else {
        "upload> "
    }
}
