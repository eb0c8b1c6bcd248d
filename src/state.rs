//! Application state - single source of truth

use clap::ValueEnum;

use crate::icons::Icon;

/// Unit system for the API request and the display suffix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Unit {
    #[default]
    Imperial,
    Metric,
}

impl Unit {
    pub fn toggle(&self) -> Self {
        match self {
            Unit::Imperial => Unit::Metric,
            Unit::Metric => Unit::Imperial,
        }
    }

    /// Value of the `units` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            Unit::Imperial => "imperial",
            Unit::Metric => "metric",
        }
    }

    /// Temperature suffix shown next to the reading
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Imperial => "°F",
            Unit::Metric => "°C",
        }
    }
}

/// Current conditions for one city - the most recent successful fetch
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    /// Raw reading floored to an integer
    pub temperature: i32,
    pub humidity: u8,
    /// Unit-dependent reading as returned by the API
    pub wind_speed: f64,
    /// Display name returned by the API, may differ from the query
    pub location: String,
    pub icon: Icon,
}

/// Severity of a user-facing message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Api,
}

/// A user-facing message shown in the notice line
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Validation,
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Api,
            message: message.into(),
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Unit preference, applied to the request and the suffix
    pub unit: Unit,

    /// City recorded by the last accepted search; re-fetched on unit change
    pub city: Option<String>,

    /// At most one report, cleared entirely on any fetch failure
    pub report: Option<WeatherReport>,

    /// Validation or API message, if any
    pub notice: Option<Notice>,

    /// Owned search-input buffer
    pub input: String,

    /// Cursor position in `input`, in characters
    pub cursor: usize,

    /// Sequence number of the latest issued fetch; stale completions are dropped
    pub request_seq: u64,
}

impl AppState {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Sequence number for the next fetch
    pub fn next_seq(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }
}
