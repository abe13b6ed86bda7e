//! Scripted tap replays
//!
//! A script is a list of `button@millis` entries separated by commas or
//! whitespace, e.g. `short@0, short@200, long@350`. Times must not decrease.

use crate::activity::{ButtonId, MainActivity};
use crate::toast::{RecordingSurface, ShownToast};
use rapidclick::ManualClock;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("tap script is empty")]
    Empty,

    #[error("malformed tap '{0}': expected <button>@<millis>")]
    Malformed(String),

    #[error("unknown button '{0}': expected 'short' or 'long'")]
    UnknownButton(String),

    #[error("invalid time in tap '{entry}'")]
    BadTime {
        entry: String,
        #[source]
        source: ParseIntError,
    },

    #[error("tap at {at_ms}ms comes before the previous tap at {previous_ms}ms")]
    OutOfOrder { previous_ms: u64, at_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub button: ButtonId,
    pub at_ms: u64,
}

/// What a single tap produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapOutcome {
    pub tap: Tap,
    /// The toast shown for this tap, `None` if the tap was swallowed
    pub shown: Option<ShownToast>,
}

pub fn parse_script(script: &str) -> Result<Vec<Tap>, ScriptError> {
    let mut taps: Vec<Tap> = Vec::new();

    for entry in script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|e| !e.is_empty())
    {
        let (name, time) = entry
            .split_once('@')
            .ok_or_else(|| ScriptError::Malformed(entry.to_string()))?;

        let button =
            ButtonId::from_name(name).ok_or_else(|| ScriptError::UnknownButton(name.to_string()))?;
        let at_ms: u64 = time.parse().map_err(|source| ScriptError::BadTime {
            entry: entry.to_string(),
            source,
        })?;

        if let Some(previous) = taps.last() {
            if at_ms < previous.at_ms {
                return Err(ScriptError::OutOfOrder {
                    previous_ms: previous.at_ms,
                    at_ms,
                });
            }
        }

        taps.push(Tap { button, at_ms });
    }

    if taps.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(taps)
}

/// Replay taps against an activity
///
/// `clock` must be the clock the activity's guards read, and `surface` the
/// surface its buttons show toasts on.
pub fn replay(
    activity: &mut MainActivity,
    clock: &ManualClock,
    surface: &RecordingSurface,
    taps: &[Tap],
) -> Vec<TapOutcome> {
    taps.iter()
        .map(|&tap| {
            clock.set(tap.at_ms);
            let before = surface.len();
            activity.click(tap.button);
            let shown = (surface.len() > before).then(|| surface.last()).flatten();
            TapOutcome { tap, shown }
        })
        .collect()
}
