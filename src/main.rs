use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use trivia_trainer::terminal::{RestoreGuard, restore_terminal};
use trivia_trainer::{App, Config, Theme, draw, intent_for_key, load_catalog, logger};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logger::init(&config.log_file);

    // Load before touching the terminal so a bad catalog prints a readable diagnostic.
    let catalog = load_catalog(&config.data_dir).with_context(|| {
        format!(
            "failed to load questions from {}",
            config.data_dir.display()
        )
    })?;

    enable_raw_mode().context("failed to enable raw mode")?;
    let _restore = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&catalog);
    run(&mut terminal, &mut app, config.theme)
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: Theme,
) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| draw(f, app, theme))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(intent) = intent_for_key(app.state, key)
        {
            app.apply(intent);
        }
    }

    tracing::info!("exiting");
    Ok(())
}
