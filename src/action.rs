//! Actions - user intents and async results

use crate::api::FetchFailure;
use crate::state::WeatherReport;

/// Everything that can happen to the widget
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Search input edited (new buffer and cursor position)
    InputEdited { value: String, cursor: usize },

    /// Submit a search. The Enter path clears the input afterward,
    /// the search-glyph path keeps it.
    SearchSubmit { query: String, clear_input: bool },

    /// Result: a fetch finished, successfully or not
    FetchCompleted {
        seq: u64,
        result: Result<WeatherReport, FetchFailure>,
    },

    /// Flip imperial/metric, re-fetching the current city if one is set
    ToggleUnit,

    /// Exit the application
    Quit,
}
