use crate::models::{Catalog, Question, Scope};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick<'a> {
    Question(&'a Question),
    Exhausted,
}

/// Which prompts were already shown since the user entered `scope`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    scope: Scope,
    shown: HashSet<String>,
}

impl Session {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            shown: HashSet::new(),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    pub fn has_shown(&self, prompt: &str) -> bool {
        self.shown.contains(prompt)
    }

    /// Switches to `scope` and forgets everything shown so far.
    pub fn reset(&mut self, scope: Scope) {
        self.scope = scope;
        self.shown.clear();
    }

    /// Questions in scope that have not been shown yet.
    pub fn remaining<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Question> {
        catalog
            .pool(&self.scope)
            .into_iter()
            .filter(|q| !self.shown.contains(&q.prompt))
            .collect()
    }

    pub fn pick_next<'a>(&mut self, catalog: &'a Catalog) -> Pick<'a> {
        self.pick_next_with(catalog, &mut rand::thread_rng())
    }

    /// Draws one unseen question uniformly at random. `Exhausted` leaves the session untouched.
    pub fn pick_next_with<'a, R: Rng + ?Sized>(
        &mut self,
        catalog: &'a Catalog,
        rng: &mut R,
    ) -> Pick<'a> {
        let candidates = self.remaining(catalog);
        match candidates.choose(rng) {
            Some(&question) => {
                self.shown.insert(question.prompt.clone());
                tracing::debug!(
                    scope = self.scope.label(),
                    shown = self.shown.len(),
                    left = candidates.len() - 1,
                    "picked question"
                );
                Pick::Question(question)
            }
            None => Pick::Exhausted,
        }
    }
}
