use crate::error::LoadError;
use crate::models::{Catalog, Category, Question};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_EXTENSION: &str = "json";

pub fn data_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::ReadDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == DATA_EXTENSION) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

pub fn load_category(path: &Path) -> Result<Category, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&content).map_err(|cause| LoadError::Malformed {
            path: path.to_path_buf(),
            cause,
        })?;

    if let Some(index) = questions.iter().position(|q| q.prompt.trim().is_empty()) {
        return Err(LoadError::EmptyPrompt {
            path: path.to_path_buf(),
            index,
        });
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Category { name, questions })
}

/// Loads every category file in `dir`. Either the whole catalog loads or nothing does.
pub fn load_catalog(dir: &Path) -> Result<Catalog, LoadError> {
    let mut categories = Vec::new();
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in data_files(dir)? {
        let category = load_category(&path)?;

        for question in &category.questions {
            if let Some(first) = seen.insert(question.prompt.clone(), path.clone()) {
                let prompt = question.prompt.clone();
                return Err(if first == path {
                    LoadError::RepeatedPrompt { prompt, path }
                } else {
                    LoadError::DuplicatePrompt {
                        prompt,
                        first,
                        second: path,
                    }
                });
            }
        }

        tracing::debug!(
            category = %category.name,
            questions = category.questions.len(),
            "loaded category"
        );
        categories.push(category);
    }

    let catalog = Catalog::new(categories);
    if catalog.is_empty() {
        tracing::warn!(dir = %dir.display(), "no question files found");
    } else {
        tracing::info!(
            dir = %dir.display(),
            categories = catalog.len(),
            questions = catalog.total_questions(),
            "catalog loaded"
        );
    }
    Ok(catalog)
}
