use crate::app::App;
use crate::ui::Theme;
use crate::ui::layout::{calculate_question_chunks, centered_rect};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
};

pub const EXHAUSTED_MESSAGE: &str = "No more questions in this category!";

pub fn draw_question(f: &mut Frame, app: &App, theme: Theme) {
    let (Some(session), Some(card)) = (app.session(), app.card()) else {
        return;
    };
    let layout = calculate_question_chunks(f.area());

    let progress = format!(
        "{} - Question {} / {}",
        session.scope().label(),
        session.shown_count(),
        app.pool_size()
    );
    let header = Paragraph::new(progress)
        .style(theme.title())
        .alignment(Alignment::Center)
        .block(theme.block());
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(Text::from(card.question.prompt.as_str()))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(theme.block().title("Question"));
    f.render_widget(question, layout.question_area);

    let answer_text = if card.answer_revealed {
        Text::styled(card.question.answer.as_str(), theme.answer())
    } else {
        Text::styled("[Press Space to reveal the answer]", theme.muted())
    };
    let answer = Paragraph::new(answer_text)
        .wrap(Wrap { trim: true })
        .block(theme.block().title("Answer"));
    f.render_widget(answer, layout.answer_area);

    let info_text = if card.info_revealed {
        Text::styled(card.question.info_or_placeholder(), theme.info())
    } else {
        Text::styled("[Press i for more information]", theme.muted())
    };
    let info = Paragraph::new(info_text)
        .wrap(Wrap { trim: true })
        .block(theme.block().title("More information"));
    f.render_widget(info, layout.info_area);

    let help_text = vec![Line::from(vec![
        Span::styled("Space", theme.key()),
        Span::from(" Reveal Answer  "),
        Span::styled("i", theme.key()),
        Span::from(" More Info  "),
        Span::styled("Enter", theme.key()),
        Span::from(" Next Question  "),
        Span::styled("Esc", theme.key()),
        Span::from(" Back  "),
        Span::styled("q", theme.exit_key()),
        Span::from(" Exit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(theme.block());
    f.render_widget(help, layout.help_area);
}

pub fn draw_exhausted(f: &mut Frame, app: &App, theme: Theme) {
    let area = centered_rect(60, 9, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let scope = app
        .session()
        .map(|s| s.scope().label().to_string())
        .unwrap_or_default();

    let message = Paragraph::new(vec![
        Line::from(Span::styled(EXHAUSTED_MESSAGE, theme.title())),
        Line::from(""),
        Line::from(scope),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(theme.block());
    f.render_widget(message, chunks[0]);

    let help_text = vec![Line::from(vec![
        Span::styled("Enter", theme.key()),
        Span::from(" Back to categories  "),
        Span::styled("q", theme.exit_key()),
        Span::from(" Exit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(theme.block());
    f.render_widget(help, chunks[1]);
}
