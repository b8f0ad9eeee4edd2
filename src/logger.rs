use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Routes `tracing` output to `path`. The terminal belongs to the UI, so nothing goes to stdout.
/// Logging stays off if the file cannot be opened or a subscriber is already installed.
pub fn init(path: &Path) {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.log");
        init(&path);
        tracing::info!("Test log message");
        assert!(path.exists());
    }

    #[test]
    fn test_logger_init_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        init(&dir.path().join("missing").join("trivia.log"));
    }
}
