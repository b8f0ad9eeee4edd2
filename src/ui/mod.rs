pub mod layout;
mod menu;
mod question;
mod theme;

pub use layout::{calculate_menu_chunks, calculate_question_chunks};
pub use menu::draw_menu;
pub use question::{EXHAUSTED_MESSAGE, draw_exhausted, draw_question};
pub use theme::Theme;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App, theme: Theme) {
    match app.state {
        AppState::Menu => draw_menu(f, app, theme),
        AppState::Question => draw_question(f, app, theme),
        AppState::Exhausted => draw_exhausted(f, app, theme),
    }
}
