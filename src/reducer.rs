//! Reducer - pure function: (state, action) -> DispatchResult

use crate::action::Action;
use crate::api::FetchFailure;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::{AppState, Notice};

/// Shown when a search is submitted with an empty query
pub const EMPTY_QUERY_NOTICE: &str = "Enter City Name";

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::InputEdited { value, cursor } => {
            state.input = value;
            state.cursor = cursor.min(state.input.chars().count());
            DispatchResult::changed()
        }

        Action::SearchSubmit { query, clear_input } => {
            if clear_input {
                state.input.clear();
                state.cursor = 0;
            }

            let query = query.trim().to_string();
            if query.is_empty() {
                state.notice = Some(Notice::validation(EMPTY_QUERY_NOTICE));
                return DispatchResult::changed();
            }

            state.notice = None;
            state.city = Some(query.clone());
            let seq = state.next_seq();
            DispatchResult::changed_with(Effect::FetchWeather {
                city: query,
                unit: state.unit,
                seq,
            })
        }

        Action::FetchCompleted { seq, result } => {
            if seq != state.request_seq {
                // Superseded by a newer request
                return DispatchResult::unchanged();
            }

            match result {
                Ok(report) => {
                    state.report = Some(report);
                    state.notice = None;
                }
                Err(FetchFailure::Api { message }) => {
                    state.report = None;
                    state.notice = Some(Notice::api(message));
                }
                Err(FetchFailure::Silent) => {
                    state.report = None;
                    state.notice = None;
                }
            }
            DispatchResult::changed()
        }

        Action::ToggleUnit => {
            state.unit = state.unit.toggle();
            let Some(city) = state.city.clone() else {
                return DispatchResult::changed();
            };
            let seq = state.next_seq();
            DispatchResult::changed_with(Effect::FetchWeather {
                city,
                unit: state.unit,
                seq,
            })
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
