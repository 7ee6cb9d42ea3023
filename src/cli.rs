// SPDX-License-Identifier: GPL-3.0-only

use std::{path::PathBuf, sync::Arc};

use anywho::{Error, anywho};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    app::{self, Effect, Message, PaginationAction, ViewState, runtime::Dispatcher, view},
    config::Config,
    core::{DataSource, PokeApi, load_page, pokemon_url, resolve_detail},
};

#[derive(Parser)]
#[command(name = "dexview")]
#[command(about = "Browse the Pokédex from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file, defaults to the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Per request timeout, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive browser (default)
    Browse {
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Print one page of the Pokédex
    Page {
        page: u32,

        #[arg(long)]
        search: Option<String>,
    },

    /// Print the details of one Pokémon, by name, id or url
    Show { pokemon: String },

    /// Print the effective configuration
    Config {
        /// Save it to the configuration file instead
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// `--config`, or the file in the user config directory
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Config::default_path)
    }

    /// The configuration file with the command line overrides applied
    pub fn load_config(&self) -> Result<Config, Error> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(page_size) = self.page_size {
            config.items_per_page = page_size.max(1);
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if self.no_color {
            config.colored = false;
        }

        Ok(config)
    }
}

pub async fn run(cli: Cli) -> Result<(), Error> {
    let config = cli.load_config()?;
    let config_path = cli.config_path();

    match cli.command.unwrap_or(Commands::Browse { page: 1 }) {
        Commands::Config { write: true } => {
            let path = config_path
                .ok_or_else(|| anywho!("no configuration directory, pass --config"))?;
            config.save(&path)?;
            println!("Configuration written to {}", path.display());
            Ok(())
        }
        Commands::Config { write: false } => {
            print!("{}", config.to_ron()?);
            println!();
            Ok(())
        }
        Commands::Page { page, search } => {
            let api = PokeApi::new(&config)?;
            print_page(&api, &config, page, search.unwrap_or_default()).await;
            Ok(())
        }
        Commands::Show { pokemon } => {
            let api = PokeApi::new(&config)?;
            let url = detail_url(&pokemon);
            let resolved = resolve_detail(&api, &url, config.max_concurrent_requests).await?;
            print!("{}", view::render_details(&resolved, config.colored));
            Ok(())
        }
        Commands::Browse { page } => {
            let api = Arc::new(PokeApi::new(&config)?);
            browse(api, &config, page).await
        }
    }
}

/// Names and ids are turned into PokéApi urls, urls are kept as they are
fn detail_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        pokemon_url(input)
    }
}

async fn print_page<S: DataSource>(source: &S, config: &Config, page: u32, search: String) {
    let (state, effect) = ViewState::new(config, page);
    let Effect::LoadPage {
        generation,
        page,
        page_size,
    } = effect
    else {
        return;
    };

    let summaries = load_page(source, page, page_size, config.max_concurrent_requests).await;
    let (state, _) = app::update(
        &state,
        Message::PageLoaded {
            generation,
            summaries,
        },
    );
    let (state, _) = app::update(&state, Message::Search(search));

    print!("{}", view::render_list(&state, config.colored));
}

/// What a line typed in the interactive browser asks for
#[derive(Debug)]
pub enum Input {
    Message(Message),
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Nothing;
    }

    if let Some(query) = line.strip_prefix('/') {
        return Input::Message(Message::Search(query.trim().to_string()));
    }

    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match (command.to_lowercase().as_str(), argument) {
        ("n" | "next", "") => Input::Message(Message::Paginate(PaginationAction::Next)),
        ("p" | "prev" | "back", "") => Input::Message(Message::Paginate(PaginationAction::Back)),
        ("page", argument) => match argument.parse::<u32>() {
            Ok(page) => Input::Message(Message::GoTo(page)),
            Err(_) => Input::Unknown(line.to_string()),
        },
        ("s" | "search", query) => Input::Message(Message::Search(query.to_string())),
        ("o" | "open", "") => Input::Unknown(line.to_string()),
        ("o" | "open", target) => match target.parse::<usize>() {
            Ok(0) => Input::Unknown(line.to_string()),
            Ok(card) => Input::Message(Message::OpenCard(card - 1)),
            Err(_) => Input::Message(Message::Open(detail_url(target))),
        },
        ("c" | "close" | "esc", "") => Input::Message(Message::Close),
        ("r" | "reload", "") => Input::Message(Message::Reload),
        ("h" | "help" | "?", "") => Input::Help,
        ("q" | "quit" | "exit", "") => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

const HELP: &str = "\
Commands:
  n, next            next page
  p, prev            previous page
  page N             go to page N
  /TEXT, search TEXT search the current page (empty clears)
  open N             open the N-th card of the list
  open NAME|URL      open a Pokémon by name, id or url
  close, esc         close the details
  reload             reload the current page
  q, quit            exit";

/// Interactive browser: reads commands from stdin and renders every new state
pub async fn browse<S>(source: Arc<S>, config: &Config, page: u32) -> Result<(), Error>
where
    S: DataSource + 'static,
{
    let (mut dispatcher, mut messages) = Dispatcher::new(source, config.max_concurrent_requests);
    let (mut state, effect) = ViewState::new(config, page);
    dispatcher.dispatch(effect);

    println!("{}", view::render(&state, config.colored));
    println!("Type `help` for the list of commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let message = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_input(&line) {
                    Input::Message(message) => message,
                    Input::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    Input::Quit => break,
                    Input::Nothing => continue,
                    Input::Unknown(input) => {
                        println!("Unknown command `{input}`, type `help` for the list of commands.");
                        continue;
                    }
                }
            }
            Some(message) = messages.recv() => message,
        };

        let (next, effect) = app::update(&state, message);
        if let Some(effect) = effect {
            dispatcher.dispatch(effect);
        }

        if next != state {
            state = next;
            println!("{}", view::render(&state, config.colored));
        }
    }

    Ok(())
}
