pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod selection;
pub mod terminal;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::{App, Intent, QuestionCard};
pub use catalog::{data_files, load_catalog, load_category};
pub use config::Config;
pub use error::LoadError;
pub use input::intent_for_key;
pub use models::{AppState, Catalog, Category, NO_INFO_PLACEHOLDER, Question, Scope};
pub use selection::{Pick, Session};
pub use ui::{Theme, draw};
