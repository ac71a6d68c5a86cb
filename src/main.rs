// Author: Dustin Pilgrim
// License: MIT

use clap::Parser;
use skip_prompt::{app, cli};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let args = cli::Args::parse();

    app::logging::init(args.verbose);

    app::command::run(args).await
}
