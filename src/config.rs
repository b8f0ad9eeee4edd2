use crate::ui::Theme;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "trivia-trainer", version, about = "Terminal trivia quiz")]
pub struct Config {
    /// Directory holding one `<Category>.json` file per category
    #[arg(long, env = "TRIVIA_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    #[arg(long, env = "TRIVIA_THEME", value_enum, default_value_t = Theme::Styled)]
    pub theme: Theme,

    /// Log output; filtered with RUST_LOG
    #[arg(long, env = "TRIVIA_LOG_FILE", default_value = "trivia_trainer.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "trivia-trainer",
            "--data-dir",
            "/tmp/questions",
            "--theme",
            "plain",
            "--log-file",
            "quiz.log",
        ])
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/questions"));
        assert_eq!(config.theme, Theme::Plain);
        assert_eq!(config.log_file, PathBuf::from("quiz.log"));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Config::try_parse_from(["trivia-trainer", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
