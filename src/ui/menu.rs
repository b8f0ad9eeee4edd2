use crate::app::App;
use crate::models::Scope;
use crate::ui::Theme;
use crate::ui::layout::calculate_menu_chunks;
use crate::utils::{pluralize, truncate_string};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

const SURPRISE_LABEL: &str = "Surprise me!";

fn scope_label(app: &App, scope: &Scope, width: usize) -> String {
    match scope {
        Scope::AllCategories => format!(
            "{} ({})",
            SURPRISE_LABEL,
            pluralize(app.catalog().total_questions(), "question", "questions")
        ),
        Scope::Single(name) => {
            let count = app.catalog().get(name).map_or(0, |c| c.questions.len());
            let suffix = format!(" ({})", pluralize(count, "question", "questions"));
            let name_width = width.saturating_sub(suffix.len());
            format!("{}{}", truncate_string(name, name_width), suffix)
        }
    }
}

pub fn draw_menu(f: &mut Frame, app: &App, theme: Theme) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Trivia Trainer")
        .style(theme.title())
        .alignment(Alignment::Center)
        .block(theme.block());
    f.render_widget(title, layout.header_area);

    // borders and the "> " highlight symbol
    let item_width = layout.list_area.width.saturating_sub(4) as usize;

    let mut items: Vec<ListItem> = app
        .scopes()
        .iter()
        .enumerate()
        .map(|(i, scope)| {
            let style = if i == app.selected_index {
                theme.highlight()
            } else if *scope == Scope::AllCategories {
                theme.surprise()
            } else {
                Style::default()
            };
            ListItem::new(scope_label(app, scope, item_width)).style(style)
        })
        .collect();

    if app.catalog().is_empty() {
        items.push(ListItem::new("No question files found").style(theme.muted()));
    }

    let list = List::new(items)
        .block(theme.block().title("Choose a category"))
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, layout.list_area, &mut state);

    let help_text = vec![Line::from(vec![
        Span::styled("↑/↓", theme.key()),
        Span::from(" Navigate  "),
        Span::styled("Enter", theme.key()),
        Span::from(" Select  "),
        Span::styled("s", theme.key()),
        Span::from(" Surprise me  "),
        Span::styled("q", theme.exit_key()),
        Span::from(" Exit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(theme.block());
    f.render_widget(help, layout.help_area);
}
