//! One-shot numeric count-up, fired by the first visibility of its host element.

use crate::foundation::ease;
use crate::sections::props::MainProps;
use serde_json::Value;
use std::time::Duration;

/// The displayed value stops easing once it is this close to the target.
const SNAP_DISTANCE: f64 = 0.5;

/// An authored count-up value. Formatting follows the form it was authored in.
#[derive(Clone, Debug, PartialEq)]
pub enum CountValue {
    Number(f64),
    Text(String),
}

impl CountValue {
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Self::Text(s.clone()),
            _ => Self::Text(String::new()),
        }
    }

    /// Numeric target. Unparseable text counts to zero.
    pub fn target(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => *n,
            Self::Number(_) => 0.0,
            Self::Text(s) => parse_numeric(s).unwrap_or(0.0),
        }
    }

    /// Render `n` the way the authored value was written.
    pub fn format(&self, n: f64) -> String {
        match self {
            Self::Number(original) => {
                if original.fract() == 0.0 {
                    format!("{:.0}", n.floor())
                } else {
                    format!("{n:.2}")
                }
            }
            Self::Text(original) => {
                let rounded = n.round();
                let formatted = format!("{rounded:.0}");
                if original.contains(',') && rounded >= 1000.0 {
                    group_thousands(&formatted)
                } else {
                    formatted
                }
            }
        }
    }
}

/// Keep digits and dots, then read the longest leading decimal number.
fn parse_numeric(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    let prefix = numeric_prefix(&cleaned);
    if !prefix.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

fn numeric_prefix(cleaned: &str) -> &str {
    let end = cleaned
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(cleaned.len());
    cleaned[..end].trim_end_matches('.')
}

fn group_thousands(int: &str) -> String {
    let mut out = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountState {
    Idle,
    Running,
    Done,
}

/// Animates from zero to the parsed target over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    value: CountValue,
    target: f64,
    duration: Duration,
    ghost: Duration,
    elapsed: Duration,
    since_done: Duration,
    state: CountState,
    cancelled: bool,
}

impl CountUp {
    pub fn new(value: CountValue, duration: Duration, ghost: Duration) -> Self {
        Self {
            target: value.target(),
            value,
            duration,
            ghost,
            elapsed: Duration::ZERO,
            since_done: Duration::ZERO,
            state: CountState::Idle,
            cancelled: false,
        }
    }

    pub fn from_props(value: CountValue, props: &MainProps) -> Self {
        Self::new(
            value,
            Duration::from_millis(props.count_up_duration_ms),
            Duration::from_millis(props.count_up_ghost_ms),
        )
    }

    pub fn state(&self) -> CountState {
        self.state
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Report visibility. Only the first visible report starts the animation.
    pub fn set_visible(&mut self, visible: bool) {
        if !visible || self.cancelled || self.state != CountState::Idle {
            return;
        }
        self.state = CountState::Running;
        if self.duration.is_zero() {
            self.state = CountState::Done;
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.cancelled {
            return;
        }
        match self.state {
            CountState::Idle => {}
            CountState::Running => {
                self.elapsed += dt;
                if self.elapsed >= self.duration {
                    self.since_done = self.elapsed - self.duration;
                    self.elapsed = self.duration;
                    self.state = CountState::Done;
                }
            }
            CountState::Done => self.since_done += dt,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Current numeric value.
    pub fn current(&self) -> f64 {
        match self.state {
            CountState::Idle => 0.0,
            CountState::Done => self.target,
            CountState::Running => {
                let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
                let v = self.target * ease::standard(t);
                if (self.target - v).abs() <= SNAP_DISTANCE {
                    self.target
                } else {
                    v
                }
            }
        }
    }

    pub fn display(&self) -> String {
        self.value.format(self.current())
    }

    pub fn ghost_visible(&self) -> bool {
        self.state == CountState::Done && self.since_done < self.ghost
    }

    /// The final value echoed by the ghost, while it is visible.
    pub fn ghost_text(&self) -> Option<String> {
        self.ghost_visible().then(|| self.value.format(self.target))
    }
}
