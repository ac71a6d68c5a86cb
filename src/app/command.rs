// Author: Dustin Pilgrim
// License: MIT

use crate::cli::{Args, Command};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

pub async fn run(args: Args) -> Result<(), AnyError> {
    let config = args.config.as_deref();

    match args.command {
        Command::Info { json } => {
            let loaded = crate::config::load(config)?;
            print!("{}", crate::app::info::render(&loaded, json));
            Ok(())
        }

        Command::Play { script } => {
            crate::app::play::run(config, &script).await?;
            Ok(())
        }
    }
}
