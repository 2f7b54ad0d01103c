use std::path::PathBuf;

/// Journal settings.
///
/// - `SNAKE_LOG_PATH`: append JSON lines to this file (unset or blank disables the journal)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalConfig {
    pub path: Option<PathBuf>,
}

impl JournalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        Self { path }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }
}
