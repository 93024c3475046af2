use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Persistent dark/light preference.
///
/// Resolution order at startup: the stored flag if present, else the
/// terminal's ambient color-scheme signal, else light. The storage path is
/// resolved once at construction so toggles always write to the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStore {
    is_dark: bool,
    path: Option<PathBuf>,
}

impl ThemeStore {
    /// Load the preference from the platform path, falling back to the
    /// environment.
    pub fn load() -> Self {
        let path = Self::preference_file_path().ok();
        let is_dark = path
            .as_deref()
            .and_then(read_stored)
            .or_else(system_prefers_dark)
            .unwrap_or(false);

        Self { is_dark, path }
    }

    /// Store with an explicit starting value and no backing file; toggles
    /// keep the in-memory flag but persist nowhere.
    pub fn with_preference(is_dark: bool) -> Self {
        Self { is_dark, path: None }
    }

    /// Store backed by an explicit file instead of the platform path.
    pub fn at_path(is_dark: bool, path: PathBuf) -> Self {
        Self { is_dark, path: Some(path) }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Override the flag for the current session without persisting.
    pub fn set_dark(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
    }

    /// Flip the flag and write it through.
    ///
    /// The write is best-effort: if it fails, the in-memory flag remains
    /// authoritative for the session and no error is surfaced.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        let _ = self.persist();
    }

    /// Write the JSON-encoded flag to the store's backing file.
    pub fn persist(&self) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("Theme store has no backing file"))?;

        self.persist_to(path)
    }

    /// Write the flag to an explicit path, creating parent directories.
    pub fn persist_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preference directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string(&self.is_dark)
            .context("Failed to serialize theme preference to JSON")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write preference file: {}", path.display()))?;

        Ok(())
    }

    /// Platform path of the stored preference, a single JSON-encoded boolean.
    pub fn preference_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("theme.json"))
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::load()
    }
}

/// Read a stored preference; any unreadable or malformed file counts as absent.
fn read_stored(path: &Path) -> Option<bool> {
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Ambient color-scheme signal, if the terminal advertises one.
fn system_prefers_dark() -> Option<bool> {
    env::var("COLORFGBG").ok().and_then(|v| dark_background(&v))
}

/// Interpret a `COLORFGBG` value ("<fg>;<bg>", ANSI palette indices).
///
/// Background indices up to 8, except white-on-7, indicate a dark terminal.
fn dark_background(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg <= 8 && bg != 7)
}
