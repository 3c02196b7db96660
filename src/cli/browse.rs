use std::io;
use std::sync::Arc;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::search::open_result;
use crate::books::BooksClient;
use crate::core::AppConfig;
use crate::ui::state::{self, SavedState};
use crate::ui::{EmptyState, SearchSession, SystemViewer, TcpProbe};

const HELP: &str = "Type a title or author to search, :open N to open result N, :quit to exit.";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Search(String),
    Open(usize),
    Quit,
    Help,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if let Some(command) = line.strip_prefix(':') {
            let mut parts = command.split_whitespace();
            return match (parts.next(), parts.next()) {
                (Some("quit" | "q"), None) => Some(Input::Quit),
                (Some("open" | "o"), Some(n)) => match n.parse::<usize>() {
                    Ok(n) if n > 0 => Some(Input::Open(n)),
                    _ => Some(Input::Help),
                },
                _ => Some(Input::Help),
            };
        }
        Some(Input::Search(line.to_string()))
    }
}

async fn search(session: &mut SearchSession, query: &str, state_path: &str) -> Result<()> {
    if let Err(e) = state::save(
        state_path,
        &SavedState {
            query: query.to_string(),
        },
    ) {
        tracing::warn!(path = state_path, "Failed to save search state: {}", e);
    }

    if session.submit(query).await.is_some() {
        println!("{}", EmptyState::Loading.message());
        session.wait_latest().await;
    }
    session.render(&mut io::stdout().lock())
}

pub async fn run(config: AppConfig, resume: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let state_path = config.state_file();

    let probe = TcpProbe::for_url(&config.api_base_url, config.connect_timeout)?;
    let client = BooksClient::new(&config)?;
    let mut session = SearchSession::new(client, Arc::new(probe), Box::new(SystemViewer));

    println!("{}", HELP);

    if resume && let Some(saved) = state::load(&state_path)? {
        println!("Resuming search for \"{}\"", saved.query);
        search(&mut session, &saved.query, &state_path).await?;
    }

    loop {
        let readline = rl.readline("book> ");
        match readline {
            Ok(line) => {
                let Some(input) = Input::parse(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(line.trim());
                match input {
                    Input::Search(query) => search(&mut session, &query, &state_path).await?,
                    Input::Open(n) => {
                        open_result(&session, n, &mut io::stdout().lock())?;
                    }
                    Input::Quit => break,
                    Input::Help => println!("{}", HELP),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    session.reset();
    Ok(())
}
