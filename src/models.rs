use serde::Deserialize;
use std::collections::BTreeMap;

/// Shown in the info pane when a question carries no `info` field.
pub const NO_INFO_PLACEHOLDER: &str = "No additional information available.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub answer: String,
    #[serde(default)]
    pub info: Option<String>,
}

impl Question {
    /// The supplementary text, or [`NO_INFO_PLACEHOLDER`] when the record has none.
    pub fn info_or_placeholder(&self) -> &str {
        self.info.as_deref().unwrap_or(NO_INFO_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Single(String),
    AllCategories,
}

impl Scope {
    pub fn label(&self) -> &str {
        match self {
            Scope::Single(name) => name,
            Scope::AllCategories => "All categories",
        }
    }
}

/// Every category loaded at startup, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: BTreeMap<String, Category>,
}

impl Catalog {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories
                .into_iter()
                .map(|category| (category.name.clone(), category))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_questions(&self) -> usize {
        self.categories.values().map(|c| c.questions.len()).sum()
    }

    /// "All categories" first, then each category in name order.
    pub fn scopes(&self) -> Vec<Scope> {
        std::iter::once(Scope::AllCategories)
            .chain(self.categories.keys().cloned().map(Scope::Single))
            .collect()
    }

    /// Candidate questions for a scope. Unknown category names resolve to an empty pool.
    pub fn pool(&self, scope: &Scope) -> Vec<&Question> {
        match scope {
            Scope::AllCategories => self
                .categories
                .values()
                .flat_map(|c| c.questions.iter())
                .collect(),
            Scope::Single(name) => self
                .categories
                .get(name)
                .map(|c| c.questions.iter().collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Question,
    Exhausted,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn question(prompt: &str, answer: &str) -> Question {
        Question {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            info: None,
        }
    }

    pub fn category(name: &str, questions: Vec<Question>) -> Category {
        Category {
            name: name.to_string(),
            questions,
        }
    }

    /// Science=[Q1], History=[Q2, Q3]
    pub fn sample_catalog() -> Catalog {
        Catalog::new([
            category("Science", vec![question("Q1", "A1")]),
            category(
                "History",
                vec![question("Q2", "A2"), question("Q3", "A3")],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_info_defaults_to_placeholder() {
        let q = question("Q", "A");
        assert_eq!(q.info_or_placeholder(), NO_INFO_PLACEHOLDER);

        let with_info = Question {
            info: Some("Extra".to_string()),
            ..q
        };
        assert_eq!(with_info.info_or_placeholder(), "Extra");
    }

    #[test]
    fn test_question_deserializes_without_info() {
        let q: Question = serde_json::from_str(r#"{"question":"Q1","answer":"A1"}"#).unwrap();
        assert_eq!(q.prompt, "Q1");
        assert_eq!(q.answer, "A1");
        assert!(q.info.is_none());
    }

    #[test]
    fn test_catalog_names_are_sorted() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.category_names().collect();
        assert_eq!(names, vec!["History", "Science"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_questions(), 3);
    }

    #[test]
    fn test_scopes_start_with_all_categories() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.scopes(),
            vec![
                Scope::AllCategories,
                Scope::Single("History".to_string()),
                Scope::Single("Science".to_string()),
            ]
        );
    }

    #[test]
    fn test_pool_all_categories_is_sum_of_categories() {
        let catalog = sample_catalog();
        assert_eq!(catalog.pool(&Scope::AllCategories).len(), 3);
    }

    #[test]
    fn test_pool_single_category() {
        let catalog = sample_catalog();
        let pool = catalog.pool(&Scope::Single("History".to_string()));
        let prompts: Vec<&str> = pool.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["Q2", "Q3"]);
    }

    #[test]
    fn test_pool_unknown_category_is_empty() {
        let catalog = sample_catalog();
        assert!(catalog.pool(&Scope::Single("Art".to_string())).is_empty());
    }

    #[test]
    fn test_empty_catalog_scopes() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.scopes(), vec![Scope::AllCategories]);
        assert!(catalog.pool(&Scope::AllCategories).is_empty());
    }
}
