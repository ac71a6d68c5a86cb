// Author: Dustin Pilgrim
// License: MIT

//! Scripted playback timelines for `skip-prompt play`.
//!
//! ```text
//! # at_ms  instruction
//! 0        target 60000
//! 0        position 54000
//! 100      expect visible
//! 200      position 56000
//! 300      expect hidden
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Position(u64),
    Target(Option<u64>),
    Enabled(bool),
    Skip,
    /// `true` for `expect visible`, `false` for `expect hidden`.
    Expect(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Offset from the start of the replay.
    pub at_ms: u64,
    pub op: Op,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScenarioError {}

pub fn parse(text: &str) -> Result<Vec<Step>, ScenarioError> {
    let mut steps = Vec::new();
    let mut last_at = 0u64;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let err = |message: String| ScenarioError { line, message };

        let mut parts = content.split_whitespace();

        let at_ms = parts
            .next()
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| err(format!("expected a millisecond offset, got `{content}`")))?;

        if at_ms < last_at {
            return Err(err(format!(
                "offset {at_ms} goes backwards (previous step at {last_at})"
            )));
        }
        last_at = at_ms;

        let keyword = parts
            .next()
            .ok_or_else(|| err("missing instruction".to_string()))?;
        let arg = parts.next();

        if let Some(extra) = parts.next() {
            return Err(err(format!("unexpected trailing `{extra}`")));
        }

        let op = match (keyword, arg) {
            ("position", Some(v)) => Op::Position(parse_ms(v).map_err(err)?),
            ("target", Some("none")) => Op::Target(None),
            ("target", Some(v)) => Op::Target(Some(parse_ms(v).map_err(err)?)),
            ("enabled", Some("true")) => Op::Enabled(true),
            ("enabled", Some("false")) => Op::Enabled(false),
            ("skip", None) => Op::Skip,
            ("expect", Some("visible")) => Op::Expect(true),
            ("expect", Some("hidden")) => Op::Expect(false),
            (kw, arg) => {
                return Err(err(format!(
                    "unknown instruction `{kw}{}`",
                    arg.map(|a| format!(" {a}")).unwrap_or_default()
                )));
            }
        };

        steps.push(Step { at_ms, op, line });
    }

    Ok(steps)
}

fn parse_ms(v: &str) -> Result<u64, String> {
    v.parse::<u64>()
        .map_err(|_| format!("expected a non-negative millisecond value, got `{v}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_instruction() {
        let text = "\
# concrete scenario
0 target 60000
0 position 54000   # inside the window
10 expect visible
20 enabled false
30 enabled true
40 skip
50 target none
60 expect hidden
";
        let steps = parse(text).unwrap();
        let ops: Vec<Op> = steps.iter().map(|s| s.op).collect();

        assert_eq!(
            ops,
            vec![
                Op::Target(Some(60_000)),
                Op::Position(54_000),
                Op::Expect(true),
                Op::Enabled(false),
                Op::Enabled(true),
                Op::Skip,
                Op::Target(None),
                Op::Expect(false),
            ]
        );
        assert_eq!(steps[0].line, 2);
        assert_eq!(steps[7].at_ms, 60);
    }

    #[test]
    fn demo_scenario_parses() {
        let steps = parse(include_str!("../../demos/intro.scenario")).unwrap();
        assert!(steps.iter().any(|s| s.op == Op::Skip));
        assert!(steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
    }

    #[test]
    fn rejects_backwards_offsets() {
        let err = parse("100 position 1\n50 position 2\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("backwards"));
    }

    #[test]
    fn rejects_negative_positions() {
        let err = parse("0 position -5\n").unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn rejects_unknown_and_malformed_lines() {
        assert!(parse("0 rewind 10\n").is_err());
        assert!(parse("zero position 10\n").is_err());
        assert!(parse("0 skip now\n").is_err());
        assert!(parse("0 enabled maybe\n").is_err());
        assert!(parse("0 position 1 2\n").is_err());
        assert_eq!(parse("\n\n  0\n").unwrap_err().line, 3);
    }
}
