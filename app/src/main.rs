mod input;
mod render;

use anyhow::Result;
use input::Command;
use paper_assistant::{
    BackendClient, ChatMessage, ChatSession, ClientConfig, SelectedFile, UploadOutcome,
    EXAMPLE_QUESTIONS,
};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = ClientConfig::from_env()?;
    let mut session = ChatSession::new(config.profile);
    let client = BackendClient::new(config)?;

    println!("{}\n", render::header());
    log::info!("Using backend {}", client.config().backend_url);

    if let Some(path) = std::env::args().nth(1) {
        select_file(&mut session, Path::new(&path));
    } else {
        println!("Select a PDF with /open <file.pdf> (type /help for all commands)");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    show_prompt(&session)?;
    while let Some(line) = lines.next_line().await? {
        match input::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => handle(command, &mut session, &client).await,
            Err(e) => println!("{}", e),
        }
        show_prompt(&session)?;
    }

    Ok(())
}

async fn handle(command: Command, session: &mut ChatSession, client: &BackendClient) {
    match command {
        Command::Open(path) => {
            select_file(session, &path);
        }
        Command::Drop => {
            session.clear_file();
            println!("Selection cleared");
        }
        Command::Upload(path) => {
            if let Some(path) = path {
                if !select_file(session, &path) {
                    return;
                }
            }
            upload(session, client).await;
        }
        Command::Examples => println!("{}", render::empty_chat()),
        Command::Example(index) => ask(session, client, EXAMPLE_QUESTIONS[index]).await,
        Command::Ask(question) => ask(session, client, &question).await,
        Command::Status => println!("{}", render::status(session, client.config())),
        Command::History => println!("{}", render::history(session)),
        Command::Health => match client.health().await {
            Ok(message) => println!("Backend says: {}", message),
            Err(e) => println!("Backend unreachable: {}", e),
        },
        Command::Help => println!("{}", render::help()),
        Command::Quit | Command::Empty => {}
    }
}

/// Returns whether a file is now selected.
fn select_file(session: &mut ChatSession, path: &Path) -> bool {
    match SelectedFile::pick(path) {
        Ok(file) => {
            println!("{}", render::selected_file(&file, session.profile()));
            println!("Type /upload to index it");
            session.select_file(file);
            true
        }
        Err(e) => {
            log::warn!("Could not select {}: {}", path.display(), e);
            println!("{}", render::alert(&session.profile().pick_failed_alert()));
            println!("  {}", e);
            false
        }
    }
}

async fn upload(session: &mut ChatSession, client: &BackendClient) {
    if session.selected_file().is_none() {
        println!("Select a PDF first with /open <file.pdf>");
        return;
    }

    println!("{}", session.profile().indexing_label());
    match session.upload(client).await {
        UploadOutcome::Indexed { alert, .. } => {
            if let Some(alert) = alert {
                println!("{}", render::alert(&alert));
            }
            println!("{}\n", render::ready_banner());
            println!("{}", render::empty_chat());
        }
        UploadOutcome::Failed(alert) => println!("{}", render::alert(&alert)),
        UploadOutcome::Skipped => {}
    }
}

async fn ask(session: &mut ChatSession, client: &BackendClient, question: &str) {
    if !session.is_ready() {
        println!("Upload a PDF before asking questions (/open <file.pdf>, then /upload)");
        return;
    }

    println!("{}", render::message(&ChatMessage::user(question.trim())));
    println!("{}", render::thinking());
    if let Some(reply) = session.ask(client, question).await {
        println!("{}\n", render::message(&reply));
    }
}

fn show_prompt(session: &ChatSession) -> Result<()> {
    print!("{}", render::prompt(session));
    std::io::stdout().flush()?;
    Ok(())
}
