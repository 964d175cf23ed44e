use anyhow::{anyhow, bail, Result};
use paper_assistant::EXAMPLE_QUESTIONS;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    Drop,
    Upload(Option<PathBuf>),
    Examples,
    /// Index into `EXAMPLE_QUESTIONS`.
    Example(usize),
    Status,
    History,
    Health,
    Help,
    Quit,
    Ask(String),
    Empty,
}

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Ask(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "open" => Command::Open(path_arg(arg).ok_or_else(|| anyhow!("usage: /open <file.pdf>"))?),
        "drop" => Command::Drop,
        "upload" => Command::Upload(path_arg(arg)),
        "examples" => Command::Examples,
        "example" => Command::Example(example_index(arg)?),
        "status" => Command::Status,
        "history" => Command::History,
        "health" => Command::Health,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command /{} (try /help)", other),
    };
    Ok(command)
}

fn path_arg(arg: &str) -> Option<PathBuf> {
    // Paths pasted from a file manager often arrive quoted.
    let arg = arg.trim_matches(|c| c == '"' || c == '\'');
    (!arg.is_empty()).then(|| PathBuf::from(arg))
}

fn example_index(arg: &str) -> Result<usize> {
    let n: usize = arg
        .parse()
        .map_err(|_| anyhow!("usage: /example <1-{}>", EXAMPLE_QUESTIONS.len()))?;
    if n == 0 || n > EXAMPLE_QUESTIONS.len() {
        bail!("pick an example between 1 and {}", EXAMPLE_QUESTIONS.len());
    }
    Ok(n - 1)
}
