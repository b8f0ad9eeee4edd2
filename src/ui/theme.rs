use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

/// The two looks the quiz ships with. Both drive the same screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Light-blue accents, coloured answer/info text and rounded panels
    #[default]
    Styled,
    /// Monochrome with plain borders
    Plain,
}

impl Theme {
    pub fn block(self) -> Block<'static> {
        match self {
            Theme::Styled => Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Rgb(0x4a, 0x90, 0xe2))),
            Theme::Plain => Block::default().borders(Borders::ALL),
        }
    }

    pub fn title(self) -> Style {
        match self {
            Theme::Styled => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Theme::Plain => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn highlight(self) -> Style {
        match self {
            Theme::Styled => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Theme::Plain => Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn surprise(self) -> Style {
        match self {
            Theme::Styled => Style::default()
                .fg(Color::Rgb(0x4a, 0x90, 0xe2))
                .add_modifier(Modifier::BOLD),
            Theme::Plain => Style::default(),
        }
    }

    pub fn answer(self) -> Style {
        match self {
            Theme::Styled => Style::default().fg(Color::Rgb(0x00, 0x4a, 0x99)),
            Theme::Plain => Style::default(),
        }
    }

    pub fn info(self) -> Style {
        match self {
            Theme::Styled => Style::default().fg(Color::Rgb(0x00, 0x66, 0x22)),
            Theme::Plain => Style::default(),
        }
    }

    pub fn key(self) -> Style {
        match self {
            Theme::Styled => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Theme::Plain => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn exit_key(self) -> Style {
        match self {
            Theme::Styled => Style::default()
                .fg(Color::Rgb(0xb0, 0x00, 0x20))
                .add_modifier(Modifier::BOLD),
            Theme::Plain => Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn muted(self) -> Style {
        match self {
            Theme::Styled => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            Theme::Plain => Style::default().add_modifier(Modifier::ITALIC),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_styled() {
        assert_eq!(Theme::default(), Theme::Styled);
    }

    #[test]
    fn test_plain_has_no_colours() {
        let plain = Theme::Plain;
        for style in [plain.title(), plain.answer(), plain.info(), plain.key()] {
            assert_eq!(style.fg, None);
        }
        assert_ne!(Theme::Styled.answer().fg, Theme::Styled.info().fg);
    }
}
