//! Weather icons with ASCII-art sprites
//!
//! Sprites are loaded from text files at compile time using `include_str!`.
//! The condition-code table is static configuration: a closed set of known
//! OpenWeatherMap codes, with everything else falling back to `Clear`.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};

mod sprite_data {
    pub const CLEAR: &str = include_str!("../icons/clear.txt");
    pub const CLOUD: &str = include_str!("../icons/cloud.txt");
    pub const DRIZZLE: &str = include_str!("../icons/drizzle.txt");
    pub const RAIN: &str = include_str!("../icons/rain.txt");
    pub const SNOW: &str = include_str!("../icons/snow.txt");
}

/// The fixed set of renderable icons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Clear,
    Cloud,
    Drizzle,
    Rain,
    Snow,
}

impl Icon {
    /// Map an OpenWeatherMap condition code to an icon.
    ///
    /// Codes outside the table (`02n` and the `50*` mist codes included)
    /// fall back to `Clear`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => Icon::Clear,
            "02d" => Icon::Cloud,
            "03d" | "03n" => Icon::Cloud,
            "04d" | "04n" => Icon::Drizzle,
            "09d" | "09n" => Icon::Rain,
            "10d" | "10n" => Icon::Rain,
            "13d" | "13n" => Icon::Snow,
            _ => Icon::Clear,
        }
    }

    fn content(self) -> &'static str {
        match self {
            Icon::Clear => sprite_data::CLEAR,
            Icon::Cloud => sprite_data::CLOUD,
            Icon::Drizzle => sprite_data::DRIZZLE,
            Icon::Rain => sprite_data::RAIN,
            Icon::Snow => sprite_data::SNOW,
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Clear => Color::Yellow,
            Icon::Cloud => Color::Rgb(170, 170, 185),
            Icon::Drizzle => Color::Rgb(130, 170, 200),
            Icon::Rain => Color::Rgb(80, 140, 200),
            Icon::Snow => Color::Rgb(200, 220, 255),
        }
    }

    /// Emoji representation for when the sprite doesn't fit
    pub fn emoji(self) -> &'static str {
        match self {
            Icon::Clear => "\u{2600}\u{fe0f}",
            Icon::Cloud => "\u{2601}\u{fe0f}",
            Icon::Drizzle => "\u{1f326}\u{fe0f}",
            Icon::Rain => "\u{1f327}\u{fe0f}",
            Icon::Snow => "\u{2744}\u{fe0f}",
        }
    }

    /// Sprite art in the icon's color
    pub fn art(self) -> Text<'static> {
        let style = Style::default().fg(self.color());
        let lines = self
            .content()
            .lines()
            .map(|line| Line::styled(line, style))
            .collect::<Vec<_>>();
        Text::from(lines)
    }

    /// Sprite height in rows
    pub fn art_height(self) -> u16 {
        self.content().lines().count() as u16
    }
}
