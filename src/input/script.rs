//! Line-oriented touch scripts for driving a surface without a device.
//!
//! ```text
//! # comment
//! resize 1080 1920
//! down 100 100
//! move 140 120 16
//! up 140 120
//! frame
//! ```

use super::events::{TouchAction, TouchEvent};
use crate::host::Size;
use thiserror::Error;

/// A single host event read from a script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEvent {
    /// Surface size changed
    Resize(Size),
    /// Touch sample
    Touch(TouchEvent),
    /// Display refresh tick: the host may render now
    Frame,
}

/// Errors produced while parsing a touch script.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown event '{verb}'")]
    UnknownEvent { line: usize, verb: String },

    #[error("line {line}: expected {expected} arguments, found {found}")]
    ArgumentCount {
        line: usize,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: coordinate '{value}' is not finite")]
    NonFiniteCoordinate { line: usize, value: String },
}

/// Parses a complete script. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }
        events.push(parse_line(index + 1, text)?);
    }
    Ok(events)
}

fn parse_line(line: usize, text: &str) -> Result<ScriptEvent, ScriptError> {
    let mut parts = text.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    if verb == "frame" {
        expect_args(line, &args, 0..=0, "0")?;
        return Ok(ScriptEvent::Frame);
    }

    if verb == "resize" {
        expect_args(line, &args, 2..=2, "2")?;
        let width = parse_number::<i32>(line, args[0])?;
        let height = parse_number::<i32>(line, args[1])?;
        return Ok(ScriptEvent::Resize(Size::new(width, height)));
    }

    let action = TouchAction::from_verb(&verb).ok_or_else(|| ScriptError::UnknownEvent {
        line,
        verb: verb.clone(),
    })?;
    expect_args(line, &args, 2..=3, "2 or 3")?;
    let mut event = TouchEvent::new(
        action,
        parse_coordinate(line, args[0])?,
        parse_coordinate(line, args[1])?,
    );
    if let Some(raw) = args.get(2) {
        event = event.with_timestamp(parse_number::<u64>(line, raw)?);
    }
    Ok(ScriptEvent::Touch(event))
}

fn expect_args(
    line: usize,
    args: &[&str],
    range: std::ops::RangeInclusive<usize>,
    expected: &'static str,
) -> Result<(), ScriptError> {
    if range.contains(&args.len()) {
        Ok(())
    } else {
        Err(ScriptError::ArgumentCount {
            line,
            expected,
            found: args.len(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

// `f64::from_str` accepts "inf" and "NaN"; neither can be traced into a path.
fn parse_coordinate(line: usize, value: &str) -> Result<f64, ScriptError> {
    let coordinate = parse_number::<f64>(line, value)?;
    if coordinate.is_finite() {
        Ok(coordinate)
    } else {
        Err(ScriptError::NonFiniteCoordinate {
            line,
            value: value.to_string(),
        })
    }
}
