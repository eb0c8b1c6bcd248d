pub mod search_bar;
pub mod weather_panel;

use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Render + event seam for the widget's pieces.
///
/// Components receive read-only props and communicate upward by
/// returning actions; only the reducer mutates state.
pub trait Component<A> {
    type Props<'a>;

    fn handle_event(&mut self, _event: &Event, _props: Self::Props<'_>) -> Vec<A> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_panel::{WeatherPanel, WeatherPanelProps};
