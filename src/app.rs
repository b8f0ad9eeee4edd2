use crate::models::{AppState, Catalog, Question, Scope};
use crate::selection::{Pick, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What the user asked for, independent of which key produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    ChooseSelected,
    ChooseScope(Scope),
    RequestNext,
    RequestReveal,
    RequestInfo,
    Back,
    Exit,
}

/// The question currently on screen and how much of it has been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub question: Question,
    pub answer_revealed: bool,
    pub info_revealed: bool,
}

impl QuestionCard {
    fn new(question: Question) -> Self {
        Self {
            question,
            answer_revealed: false,
            info_revealed: false,
        }
    }

    pub fn reveal_answer(&mut self) -> &str {
        self.answer_revealed = true;
        &self.question.answer
    }

    pub fn reveal_info(&mut self) -> &str {
        self.info_revealed = true;
        self.question.info_or_placeholder()
    }
}

pub struct App<'a> {
    catalog: &'a Catalog,
    scopes: Vec<Scope>,
    pub state: AppState,
    pub selected_index: usize,
    session: Option<Session>,
    card: Option<QuestionCard>,
    rng: StdRng,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    pub fn with_rng(catalog: &'a Catalog, rng: StdRng) -> Self {
        Self {
            catalog,
            scopes: catalog.scopes(),
            state: AppState::Menu,
            selected_index: 0,
            session: None,
            card: None,
            rng,
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Menu entries in display order; only these scopes can ever be chosen.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn card(&self) -> Option<&QuestionCard> {
        self.card.as_ref()
    }

    /// Size of the current scope's pool, for the progress header.
    pub fn pool_size(&self) -> usize {
        self.session
            .as_ref()
            .map(|s| self.catalog.pool(s.scope()).len())
            .unwrap_or(0)
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::MoveUp => {
                self.selected_index = self.selected_index.saturating_sub(1);
            }
            Intent::MoveDown => {
                if self.selected_index < self.scopes.len().saturating_sub(1) {
                    self.selected_index += 1;
                }
            }
            Intent::ChooseSelected => {
                if let Some(scope) = self.scopes.get(self.selected_index).cloned() {
                    self.choose_scope(scope);
                }
            }
            Intent::ChooseScope(scope) => self.choose_scope(scope),
            Intent::RequestNext => self.request_next(),
            Intent::RequestReveal => {
                self.request_reveal();
            }
            Intent::RequestInfo => {
                self.request_info();
            }
            Intent::Back => self.back_to_menu(),
            Intent::Exit => self.should_quit = true,
        }
    }

    pub fn choose_scope(&mut self, scope: Scope) {
        let Some(index) = self.scopes.iter().position(|s| *s == scope) else {
            tracing::warn!(scope = scope.label(), "ignoring unknown scope");
            return;
        };
        self.selected_index = index;

        tracing::info!(scope = scope.label(), "scope chosen");
        match self.session.as_mut() {
            Some(session) => session.reset(scope),
            None => self.session = Some(Session::new(scope)),
        }
        self.request_next();
    }

    pub fn request_next(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.pick_next_with(self.catalog, &mut self.rng) {
            Pick::Question(question) => {
                self.card = Some(QuestionCard::new(question.clone()));
                self.state = AppState::Question;
            }
            Pick::Exhausted => {
                tracing::info!(
                    scope = session.scope().label(),
                    shown = session.shown_count(),
                    "scope exhausted"
                );
                self.card = None;
                self.state = AppState::Exhausted;
            }
        }
    }

    pub fn request_reveal(&mut self) -> Option<&str> {
        self.card.as_mut().map(|card| card.reveal_answer())
    }

    pub fn request_info(&mut self) -> Option<&str> {
        self.card.as_mut().map(|card| card.reveal_info())
    }

    pub fn back_to_menu(&mut self) {
        if self.session.is_some() {
            tracing::info!("back to categories");
        }
        self.session = None;
        self.card = None;
        self.state = AppState::Menu;
    }
}
