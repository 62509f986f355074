// Theme preference persisted to a small key/value JSON file

use crate::models::Theme;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "waveshape:theme";

/// How long the toggle keeps its pulse highlight.
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme store io: {0}")]
    Io(#[from] std::io::Error),
    #[error("theme store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme store task join: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ThemeToggle {
    pub theme: Theme,
    pub pulse: bool,
}

pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
    pulse_until: Option<Instant>,
}

impl ThemeStore {
    /// Reads the saved preference; falls back to dark when the file is
    /// missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let theme = match read_entries(&path) {
            Ok(entries) => entries
                .get(THEME_KEY)
                .cloned()
                .and_then(|v| serde_json::from_value::<Theme>(v).ok())
                .unwrap_or_default(),
            Err(ThemeError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Theme::default(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    operation = "load_theme",
                    "Ignoring unreadable theme store"
                );
                Theme::default()
            }
        };
        Self {
            path,
            theme,
            pulse_until: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn pulse_active(&self) -> bool {
        self.pulse_until.is_some_and(|t| Instant::now() < t)
    }

    /// Flips the theme and persists it. Memory only changes once the write
    /// succeeded.
    pub fn toggle(&mut self) -> Result<ThemeToggle, ThemeError> {
        let next = self.theme.toggled();
        self.save(next)?;
        self.theme = next;
        self.pulse_until = Some(Instant::now() + PULSE_DURATION);
        tracing::debug!(theme = %next, "Theme toggled");
        Ok(ThemeToggle {
            theme: next,
            pulse: true,
        })
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        // keep unrelated keys; drop a corrupt file instead of failing forever
        let mut entries = read_entries(&self.path).unwrap_or_default();
        entries.insert(THEME_KEY.to_string(), Value::from(theme.as_str()));
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }
        let body = serde_json::to_string_pretty(&Value::Object(entries))?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }
}

/// Toggles a shared store with the file IO on the blocking pool. The lock is
/// held across the whole read-modify-write, so concurrent toggles serialize.
pub async fn toggle_shared(store: Arc<Mutex<ThemeStore>>) -> Result<ThemeToggle, ThemeError> {
    let mut guard = store.lock_owned().await;
    tokio::task::spawn_blocking(move || guard.toggle()).await?
}

fn read_entries(path: &Path) -> Result<Map<String, Value>, ThemeError> {
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&raw)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark_without_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ThemeStore::open(dir.path().join("theme.json"));
        assert_eq!(store.theme(), Theme::Dark);
        assert!(!store.pulse_active());
    }

    #[test]
    fn toggle_twice_restores_and_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("state").join("theme.json");
        let mut store = ThemeStore::open(&path);

        let first = store.toggle().unwrap();
        assert_eq!(first.theme, Theme::Light);
        assert!(store.pulse_active());
        assert_eq!(ThemeStore::open(&path).theme(), Theme::Light);

        let second = store.toggle().unwrap();
        assert_eq!(second.theme, Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(ThemeStore::open(&path).theme(), store.theme());
    }

    #[tokio::test]
    async fn shared_toggle_persists_off_the_runtime() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        let store = Arc::new(Mutex::new(ThemeStore::open(&path)));

        let toggle = toggle_shared(store.clone()).await.unwrap();
        assert_eq!(toggle.theme, Theme::Light);
        assert_eq!(store.lock().await.theme(), Theme::Light);
        assert_eq!(ThemeStore::open(&path).theme(), Theme::Light);
    }

    #[tokio::test]
    async fn concurrent_shared_toggles_apply_in_turn() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        let store = Arc::new(Mutex::new(ThemeStore::open(&path)));

        let (a, b) = tokio::join!(toggle_shared(store.clone()), toggle_shared(store.clone()));
        let mut seen = [a.unwrap().theme, b.unwrap().theme];
        seen.sort_by_key(|t| t.as_str());
        assert_eq!(seen, [Theme::Dark, Theme::Light]);

        let current = store.lock().await.theme();
        assert_eq!(current, Theme::Dark);
        assert_eq!(ThemeStore::open(&path).theme(), current);
    }

    #[tokio::test]
    async fn failed_shared_write_leaves_theme_unchanged() {
        let dir = tempfile::TempDir::new().unwrap();
        // parent is a regular file, so create_dir_all fails
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = Arc::new(Mutex::new(ThemeStore::open(blocker.join("theme.json"))));

        assert!(toggle_shared(store.clone()).await.is_err());
        assert_eq!(store.lock().await.theme(), Theme::Dark);
        assert!(!store.lock().await.pulse_active());
    }

    #[test]
    fn keeps_unrelated_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{"other": 1, "waveshape:theme": "light"}"#).unwrap();

        let mut store = ThemeStore::open(&path);
        assert_eq!(store.theme(), Theme::Light);
        store.toggle().unwrap();

        let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["other"], 1);
        assert_eq!(saved[THEME_KEY], "dark");
    }

    #[test]
    fn corrupt_file_falls_back_to_dark() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "not json").unwrap();
        let mut store = ThemeStore::open(&path);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.toggle().unwrap().theme, Theme::Light);
        assert_eq!(ThemeStore::open(&path).theme(), Theme::Light);
    }

    #[test]
    fn unknown_value_falls_back_to_dark() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{"waveshape:theme": "sepia"}"#).unwrap();
        assert_eq!(ThemeStore::open(&path).theme(), Theme::Dark);
    }
}
