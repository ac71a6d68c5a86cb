// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "skip-prompt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Skip-intro / skip-credits prompt controller"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Show the effective controller configuration")]
    Info {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Replay a scripted playback scenario against the controller")]
    Play {
        #[arg(value_name = "FILE")]
        script: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_with_global_flags() {
        let args = Args::try_parse_from(["skip-prompt", "-v", "-c", "a.rune", "play", "s.txt"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("a.rune")));
        assert!(matches!(args.command, Command::Play { script } if script == PathBuf::from("s.txt")));
    }

    #[test]
    fn parses_info_json() {
        let args = Args::try_parse_from(["skip-prompt", "info", "--json"]).unwrap();
        assert!(matches!(args.command, Command::Info { json: true }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Args::try_parse_from(["skip-prompt"]).is_err());
    }
}
