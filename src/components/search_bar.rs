use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::state::Unit;

/// Rows the bar occupies (bordered single-line widgets)
pub const SEARCH_BAR_HEIGHT: u16 = 3;

const UNIT_BUTTON_WIDTH: u16 = 6;
const SEARCH_BUTTON_WIDTH: u16 = 10;
const SEARCH_BUTTON_LABEL: &str = "Search";
const PLACEHOLDER: &str = "Search";

/// The search bar: unit button, input field, search button.
///
/// Button areas are recorded at render time so mouse clicks can be
/// hit-tested in `handle_event`.
#[derive(Default)]
pub struct SearchBar {
    unit_area: Option<Rect>,
    button_area: Option<Rect>,
}

pub struct SearchBarProps<'a> {
    pub input: &'a str,
    pub cursor: usize,
    pub unit: Unit,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle_key(
        code: KeyCode,
        modifiers: KeyModifiers,
        props: &SearchBarProps<'_>,
    ) -> Option<Action> {
        match code {
            KeyCode::Enter => Some(Action::SearchSubmit {
                query: props.input.to_string(),
                clear_input: true,
            }),
            KeyCode::Tab => Some(Action::ToggleUnit),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::CONTROL) => {
                let (value, cursor) = insert_at(props.input, props.cursor, ch);
                Some(Action::InputEdited { value, cursor })
            }
            KeyCode::Backspace => {
                let (value, cursor) = remove_before(props.input, props.cursor);
                Some(Action::InputEdited { value, cursor })
            }
            KeyCode::Delete => Some(Action::InputEdited {
                value: remove_at(props.input, props.cursor),
                cursor: props.cursor,
            }),
            KeyCode::Left => Some(Action::InputEdited {
                value: props.input.to_string(),
                cursor: props.cursor.saturating_sub(1),
            }),
            KeyCode::Right => Some(Action::InputEdited {
                value: props.input.to_string(),
                cursor: (props.cursor + 1).min(props.input.chars().count()),
            }),
            KeyCode::Home => Some(Action::InputEdited {
                value: props.input.to_string(),
                cursor: 0,
            }),
            KeyCode::End => Some(Action::InputEdited {
                value: props.input.to_string(),
                cursor: props.input.chars().count(),
            }),
            _ => None,
        }
    }

    fn handle_mouse(&self, mouse: &MouseEvent, props: &SearchBarProps<'_>) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.button_area.is_some_and(|area| area.contains(position)) {
            // Glyph path: submit without clearing the input
            return Some(Action::SearchSubmit {
                query: props.input.to_string(),
                clear_input: false,
            });
        }
        if self.unit_area.is_some_and(|area| area.contains(position)) {
            return Some(Action::ToggleUnit);
        }
        None
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(&mut self, event: &Event, props: Self::Props<'_>) -> Vec<Action> {
        let action = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Self::handle_key(key.code, key.modifiers, &props)
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse, &props),
            _ => None,
        };
        action.into_iter().collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Length(UNIT_BUTTON_WIDTH),
            Constraint::Min(10),
            Constraint::Length(SEARCH_BUTTON_WIDTH),
        ])
        .split(area);

        self.unit_area = Some(chunks[0]);
        self.button_area = Some(chunks[2]);

        let button_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let unit_button = Paragraph::new(Line::from(props.unit.suffix()).centered())
            .style(button_style)
            .block(Block::bordered());
        frame.render_widget(unit_button, chunks[0]);

        let input = if props.input.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.input)
        };
        frame.render_widget(input.block(Block::bordered()), chunks[1]);

        // Cursor sits inside the input border
        let cursor_x = chunks[1].x + 1 + props.cursor.min(props.input.chars().count()) as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(chunks[1].right().saturating_sub(2)),
            chunks[1].y + 1,
        ));

        let search_button = Paragraph::new(Line::from(SEARCH_BUTTON_LABEL).centered())
            .style(button_style)
            .block(Block::bordered());
        frame.render_widget(search_button, chunks[2]);
    }
}

fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

fn insert_at(value: &str, cursor: usize, ch: char) -> (String, usize) {
    let mut out = value.to_string();
    out.insert(byte_index(value, cursor), ch);
    (out, cursor + 1)
}

fn remove_before(value: &str, cursor: usize) -> (String, usize) {
    if cursor == 0 {
        return (value.to_string(), 0);
    }
    let mut out = value.to_string();
    out.remove(byte_index(value, cursor - 1));
    (out, cursor - 1)
}

fn remove_at(value: &str, cursor: usize) -> String {
    if cursor >= value.chars().count() {
        return value.to_string();
    }
    let mut out = value.to_string();
    out.remove(byte_index(value, cursor));
    out
}
