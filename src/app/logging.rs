// Author: Dustin Pilgrim
// License: MIT

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// `SKIP_PROMPT_LOG` wins over `RUST_LOG`; without either, `--verbose`
/// selects debug and the default is info.
pub fn init(verbose: bool) {
    let filter = std::env::var("SKIP_PROMPT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(if verbose { "debug" } else { "info" }),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("skip-prompt: failed to set up logging: {err}");
    }
}
