// Author: Dustin Pilgrim
// License: MIT

use crate::config::{ConfigSource, LoadedConfig};

const LABELS: [&str; 4] = ["Source", "MinSkip", "Display", "Enabled"];

pub fn render(loaded: &LoadedConfig, json: bool) -> String {
    if json {
        format!("{}\n", render_json(loaded))
    } else {
        render_pretty(loaded)
    }
}

pub fn render_json(loaded: &LoadedConfig) -> serde_json::Value {
    let source = match &loaded.source {
        ConfigSource::File(path) => serde_json::Value::String(path.display().to_string()),
        ConfigSource::BuiltIn => serde_json::Value::Null,
    };

    serde_json::json!({
        "source": source,
        "min_skip_ms": loaded.cfg.min_skip_ms(),
        "display_ms": loaded.cfg.display_ms(),
        "enabled": loaded.cfg.initial_enabled,
    })
}

pub fn render_pretty(loaded: &LoadedConfig) -> String {
    let width = LABELS.iter().map(|s| s.len()).max().unwrap_or(0);

    let source = match &loaded.source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::BuiltIn => "built-in defaults".to_string(),
    };

    let rows = [
        source,
        format!("{}ms", loaded.cfg.min_skip_ms()),
        format!("{}ms", loaded.cfg.display_ms()),
        loaded.cfg.initial_enabled.to_string(),
    ];

    let mut out = String::new();
    for (label, value) in LABELS.iter().zip(rows) {
        out.push_str(&format!("  {:<width$}    │ {}\n", label, value, width = width));
    }
    out
}
