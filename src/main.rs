// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use env_logger::Env;

use dexview::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level.as_str())).init();

    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
