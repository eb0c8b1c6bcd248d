use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Component;
use crate::action::Action;
use crate::state::{AppState, NoticeKind, WeatherReport};

/// Fixed wind-speed label, regardless of unit system
pub const WIND_LABEL: &str = "mph";

/// The data region: a notice line plus either nothing or the current report
#[derive(Default)]
pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);

        if let Some(notice) = &props.state.notice {
            let style = match notice.kind {
                NoticeKind::Validation => Style::default().fg(Color::Yellow),
                NoticeKind::Api => Style::default().fg(Color::Red),
            };
            let line = Line::styled(notice.message.clone(), style).centered();
            frame.render_widget(Paragraph::new(line), chunks[0]);
        }

        // No report, no data region
        if let Some(report) = &props.state.report {
            render_report(frame, chunks[1], props.state, report);
        }
    }
}

fn render_report(frame: &mut Frame, area: Rect, state: &AppState, report: &WeatherReport) {
    let icon_height = report.icon.art_height();
    let use_sprite = area.height >= icon_height + 7;
    let icon_rows = if use_sprite { icon_height } else { 1 };

    let chunks = Layout::vertical([
        Constraint::Length(icon_rows), // Icon
        Constraint::Length(1),         // Blank
        Constraint::Length(1),         // Temperature
        Constraint::Length(1),         // Location
        Constraint::Length(1),         // Blank
        Constraint::Length(2),         // Humidity / wind columns
    ])
    .flex(Flex::Center)
    .split(area);

    if use_sprite {
        frame.render_widget(
            Paragraph::new(report.icon.art()).alignment(Alignment::Center),
            chunks[0],
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(report.icon.emoji()).centered()),
            chunks[0],
        );
    }

    let temperature = Line::from(vec![Span::styled(
        format!("{}{}", report.temperature, state.unit.suffix()),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )])
    .centered();
    frame.render_widget(Paragraph::new(temperature), chunks[2]);

    let location = Line::from(vec![Span::styled(
        report.location.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(location), chunks[3]);

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[5]);
    render_stat(frame, columns[0], format!("{} %", report.humidity), "Humidity");
    render_stat(
        frame,
        columns[1],
        format!("{} {}", report.wind_speed, WIND_LABEL),
        "Wind Speed",
    );
}

fn render_stat(frame: &mut Frame, area: Rect, value: String, label: &str) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
    frame.render_widget(
        Paragraph::new(Line::from(value).centered()),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                label.to_string(),
                Style::default().fg(Color::DarkGray),
            )])
            .centered(),
        ),
        rows[1],
    );
}
