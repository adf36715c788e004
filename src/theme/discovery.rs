//! Locate installed bar themes under a themes root

use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

use super::availability::ThemeAvailability;

/// A theme directory found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledTheme {
    pub name: String,
    pub dir: PathBuf,
    pub availability: ThemeAvailability,
}

/// List every subdirectory of `root` as a theme, sorted by name.
///
/// Each directory is probed once. Directories without the required files are
/// still listed so callers can report them as unusable.
pub fn discover_themes(root: &Path) -> Vec<InstalledTheme> {
    let pattern = format!("{}/*", Pattern::escape(&root.display().to_string()));
    let paths = match glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("invalid themes root {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut themes: Vec<InstalledTheme> = paths
        .filter_map(Result::ok)
        .filter(|p| p.is_dir())
        .filter_map(|dir| {
            let name = dir.file_name()?.to_string_lossy().into_owned();
            let availability = ThemeAvailability::probe(&dir);
            Some(InstalledTheme { name, dir, availability })
        })
        .collect();
    themes.sort_by(|a, b| a.name.cmp(&b.name));
    themes
}

/// Resolve a theme name to its directory under `root`.
///
/// Returns `None` when no such directory exists.
pub fn find_theme(root: &Path, name: &str) -> Option<PathBuf> {
    let dir = root.join(name);
    dir.is_dir().then_some(dir)
}
