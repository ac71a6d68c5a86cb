// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;
use std::time::Duration;

use eyre::{Result, WrapErr};
use tokio::time::{Instant, sleep_until};

use crate::app::scenario::{self, Op, Step};
use crate::daemon::{SkipPrompt, SkipPromptHandle};

/// Replays a scenario file against a live controller in real time.
pub async fn run(config: Option<&Path>, script: &Path) -> Result<()> {
    let loaded = crate::config::load(config)?;

    let text = std::fs::read_to_string(script)
        .wrap_err_with(|| format!("failed to read scenario {}", script.display()))?;
    let steps = scenario::parse(&text)
        .wrap_err_with(|| format!("invalid scenario {}", script.display()))?;

    tracing::info!("play: {} steps from {}", steps.len(), script.display());

    let (handle, driver) = SkipPrompt::spawn(loaded.cfg)?;

    let watcher = tokio::spawn(log_prompt_changes(handle.clone()));
    let mut skips = handle.on_skip().await?;
    let skip_logger = tokio::spawn(async move {
        while let Ok(req) = skips.recv().await {
            tracing::info!("playback: seek to {}ms", req.to_ms);
        }
    });

    let outcome = tokio::select! {
        res = replay(&handle, &steps) => Some(res),

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received Ctrl+C, shutting down");
            None
        }
    };

    handle.dispose();
    let _ = driver.await;
    let _ = watcher.await;
    let _ = skip_logger.await;

    let Some(failed) = outcome.transpose()? else {
        return Ok(());
    };

    if failed > 0 {
        return Err(eyre::eyre!("{failed} expectation(s) failed"));
    }

    println!("scenario passed ({} steps)", steps.len());
    Ok(())
}

/// Applies each step at its offset and returns how many `expect` lines failed.
pub async fn replay(handle: &SkipPromptHandle, steps: &[Step]) -> Result<usize> {
    let start = Instant::now();
    let mut failed = 0;

    for step in steps {
        sleep_until(start + Duration::from_millis(step.at_ms)).await;

        match step.op {
            Op::Position(ms) => handle.set_current_position(ms).await?,
            Op::Target(ms) => handle.set_target(ms).await?,
            Op::Enabled(b) => handle.set_enabled(b).await?,
            Op::Skip => handle.skip().await?,
            Op::Expect(want) => {
                let got = handle.visible().await?;
                if got != want {
                    failed += 1;
                    tracing::warn!(
                        "line {} @{}ms: expected {}, prompt is {}",
                        step.line,
                        step.at_ms,
                        describe(want),
                        describe(got)
                    );
                }
            }
        }
    }

    Ok(failed)
}

async fn log_prompt_changes(handle: SkipPromptHandle) {
    let mut views = handle.subscribe();
    drop(handle);

    while views.changed().await.is_ok() {
        let view = views.borrow_and_update().clone();
        match view.label {
            Some(label) if view.visible => tracing::info!("prompt: shown (skip to {label})"),
            _ => tracing::info!("prompt: hidden (target {:?})", view.target_ms),
        }
    }
}

fn describe(visible: bool) -> &'static str {
    if visible { "visible" } else { "hidden" }
}
