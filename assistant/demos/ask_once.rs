//! Uploads one PDF and asks one question about it.
//!
//! cargo run -p paper_assistant --example ask_once -- paper.pdf "What methods were used?"

use anyhow::Context;
use paper_assistant::{BackendClient, ClientConfig, SelectedFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: ask_once <file.pdf> [question]")?;
    let question = args
        .next()
        .unwrap_or_else(|| "What is the main contribution?".to_string());

    let config = ClientConfig::from_env()?;
    println!("🔍 Backend: {} ({} profile)", config.backend_url, config.profile);
    let client = BackendClient::new(config)?;

    let file = SelectedFile::pick(&path)?;
    println!("\n📄 Uploading {} ({})", file.name, file.display_size());
    let document_id = client.upload(&file).await?;
    println!("Document id: {}", document_id);

    println!("\n❓ {}", question);
    let answer = client.ask(&document_id, &question).await?;
    println!("{}", answer);

    Ok(())
}
