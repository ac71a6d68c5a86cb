// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

use futures::StreamExt;
use tokio::time::sleep;

use crate::core::{config::ControllerConfig, driver_msg::SkipRequest, error::Error};

use super::{SkipPrompt, SkipPromptHandle};

fn cfg() -> ControllerConfig {
    ControllerConfig {
        min_skip: Duration::from_millis(5_000),
        display: Duration::from_millis(8_000),
        initial_enabled: true,
    }
}

fn spawn() -> (SkipPromptHandle, tokio::task::JoinHandle<()>) {
    SkipPrompt::spawn(cfg()).unwrap()
}

async fn advance_ms(ms: u64) {
    sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn hides_after_display_duration() {
    let (h, _join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();
    h.set_current_position(50_000).await.unwrap();
    assert!(h.visible().await.unwrap());

    advance_ms(7_999).await;
    assert!(h.visible().await.unwrap());

    advance_ms(2).await;
    assert!(!h.visible().await.unwrap());
    assert_eq!(h.view().await.unwrap().target_ms, None);
}

#[tokio::test(start_paused = true)]
async fn rearm_pushes_the_hide_out() {
    let (h, _join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();
    advance_ms(4_000).await;
    h.set_target(Some(120_000)).await.unwrap();

    // The first countdown would have fired at 8000.
    advance_ms(4_001).await;
    assert!(h.visible().await.unwrap());

    advance_ms(3_998).await;
    assert!(h.visible().await.unwrap());

    advance_ms(2).await;
    assert!(!h.visible().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn position_ticks_do_not_rearm() {
    let (h, _join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();
    for _ in 0..7 {
        advance_ms(1_000).await;
        h.set_current_position(10_000).await.unwrap();
    }
    assert!(h.visible().await.unwrap());

    advance_ms(1_001).await;
    assert!(!h.visible().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn concrete_scenario() {
    let (h, _join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();

    h.set_current_position(54_000).await.unwrap();
    assert!(h.visible().await.unwrap());

    h.set_current_position(56_000).await.unwrap();
    assert!(!h.visible().await.unwrap());

    h.set_current_position(50_000).await.unwrap();
    assert!(h.visible().await.unwrap());

    advance_ms(8_001).await;
    assert!(!h.visible().await.unwrap());

    // Seeking back into the old window does not bring it back.
    h.set_current_position(10_000).await.unwrap();
    assert!(!h.visible().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn toggling_enabled_restarts_countdown() {
    let (h, _join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();
    advance_ms(6_000).await;

    h.set_enabled(false).await.unwrap();
    assert!(!h.visible().await.unwrap());
    h.set_enabled(true).await.unwrap();
    assert!(h.visible().await.unwrap());

    advance_ms(7_000).await;
    assert!(h.visible().await.unwrap());

    advance_ms(1_001).await;
    assert!(!h.visible().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn observe_visible_settles_on_last_value() {
    let (h, join) = spawn();
    let mut stream = Box::pin(h.observe_visible());
    assert_eq!(stream.next().await, Some(false));

    h.set_target(Some(60_000)).await.unwrap();
    for pos in [10_000, 58_000, 20_000, 59_000, 30_000] {
        h.set_current_position(pos).await.unwrap();
    }
    assert!(h.visible().await.unwrap());

    h.dispose();
    join.await.unwrap();

    let seen: Vec<bool> = stream.collect().await;
    assert_eq!(seen.last(), Some(&true));

    let mut prev = false;
    for v in seen {
        assert_ne!(v, prev, "consecutive duplicate emitted");
        prev = v;
    }
}

#[tokio::test(start_paused = true)]
async fn dispose_applies_writes_already_accepted() {
    let (h, join) = spawn();
    let mut stream = Box::pin(h.observe_visible());
    assert_eq!(stream.next().await, Some(false));

    h.set_target(Some(60_000)).await.unwrap();
    h.dispose();
    join.await.unwrap();

    let rest: Vec<bool> = stream.collect().await;
    assert_eq!(rest, vec![true]);
}

#[tokio::test(start_paused = true)]
async fn same_target_write_restarts_countdown() {
    let (h, _join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();
    advance_ms(6_000).await;
    h.set_target(Some(60_000)).await.unwrap();

    advance_ms(4_000).await;
    assert!(h.visible().await.unwrap());

    advance_ms(3_999).await;
    assert!(h.visible().await.unwrap());

    advance_ms(2).await;
    assert!(!h.visible().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn subscribe_publishes_label() {
    let (h, _join) = spawn();
    let mut rx = h.subscribe();

    h.set_target(Some(90_000)).await.unwrap();
    rx.changed().await.unwrap();

    let view = rx.borrow_and_update().clone();
    assert!(view.visible);
    assert_eq!(view.label.as_deref(), Some("01:30"));
}

#[tokio::test(start_paused = true)]
async fn skip_forwards_request_and_hides() {
    let (h, _join) = spawn();
    let mut skips = h.on_skip().await.unwrap();

    h.set_target(Some(60_000)).await.unwrap();

    // Past the window: hidden, so the skip is dropped.
    h.set_current_position(58_000).await.unwrap();
    h.skip().await.unwrap();

    h.set_current_position(12_000).await.unwrap();
    h.skip().await.unwrap();
    assert!(!h.visible().await.unwrap());

    // Target is gone now; a second press does nothing.
    h.skip().await.unwrap();
    assert!(!h.visible().await.unwrap());

    assert_eq!(skips.recv().await.unwrap(), SkipRequest { to_ms: 60_000 });
    assert!(skips.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn dispose_is_idempotent_and_rejects_writes() {
    let (h, join) = spawn();
    let other = h.clone();

    h.set_target(Some(60_000)).await.unwrap();

    h.dispose();
    other.dispose();
    join.await.unwrap();
    h.dispose();

    assert!(h.is_disposed());
    assert_eq!(other.set_target(None).await, Err(Error::Disposed));
    assert_eq!(h.set_current_position(1).await, Err(Error::Disposed));
    assert_eq!(h.visible().await, Err(Error::Disposed));
}

#[tokio::test(start_paused = true)]
async fn dropping_every_handle_stops_the_driver() {
    let (h, join) = spawn();

    h.set_target(Some(60_000)).await.unwrap();
    drop(h);

    join.await.unwrap();
}

#[tokio::test]
async fn zero_display_duration_is_rejected() {
    let bad = ControllerConfig {
        display: Duration::ZERO,
        ..cfg()
    };
    assert!(SkipPrompt::spawn(bad).is_err());
}
