//! Theme completeness checks
//!
//! Availability is probed once when a builder is created and then held for
//! the builder's lifetime. A missing file is an expected state, never an
//! error.

use std::path::Path;

use super::catalog::{Catalog, OPTIONAL, REQUIRED};

/// File-existence check used for theme assets and card art.
pub trait AssetProbe: Send + Sync {
    /// True if a readable file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl AssetProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<F> AssetProbe for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// True iff every file in `catalog` exists under `theme_dir`.
pub fn check_availability(theme_dir: &Path, catalog: &Catalog, probe: &dyn AssetProbe) -> bool {
    let missing = missing_files(theme_dir, catalog, probe);
    for file in &missing {
        log::debug!("{} theme file missing: {}", catalog.name(), theme_dir.join(file).display());
    }
    missing.is_empty()
}

/// File names from `catalog` that are absent under `theme_dir`.
pub fn missing_files(
    theme_dir: &Path,
    catalog: &Catalog,
    probe: &dyn AssetProbe,
) -> Vec<&'static str> {
    catalog
        .iter()
        .filter(|(_, info)| !probe.exists(&theme_dir.join(info.file_name)))
        .map(|(_, info)| info.file_name)
        .collect()
}

/// Completeness of one theme directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeAvailability {
    pub has_all_required: bool,
    pub has_all_optional: bool,
}

impl ThemeAvailability {
    /// Every asset present.
    pub const COMPLETE: Self = Self { has_all_required: true, has_all_optional: true };

    /// Required set present, no rarity variants.
    pub const BASIC: Self = Self { has_all_required: true, has_all_optional: false };

    /// Probe `theme_dir` on the filesystem.
    pub fn probe(theme_dir: &Path) -> Self {
        Self::probe_with(theme_dir, &FsProbe)
    }

    /// Probe `theme_dir` through a custom probe.
    pub fn probe_with(theme_dir: &Path, probe: &dyn AssetProbe) -> Self {
        let availability = Self {
            has_all_required: check_availability(theme_dir, &REQUIRED, probe),
            has_all_optional: check_availability(theme_dir, &OPTIONAL, probe),
        };
        log::debug!(
            "theme {}: required={} optional={}",
            theme_dir.display(),
            availability.has_all_required,
            availability.has_all_optional
        );
        availability
    }

    /// Short human-readable status.
    pub fn describe(&self) -> &'static str {
        match (self.has_all_required, self.has_all_optional) {
            (true, true) => "complete",
            (true, false) => "basic (no rarity variants)",
            (false, _) => "unusable (required files missing)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch_all(dir: &Path, catalog: &Catalog) {
        for (_, info) in catalog.iter() {
            File::create(dir.join(info.file_name)).expect("should create theme file");
        }
    }

    #[test]
    fn test_empty_directory_has_nothing() {
        let temp = TempDir::new().expect("should create temp dir");
        let availability = ThemeAvailability::probe(temp.path());
        assert_eq!(availability, ThemeAvailability::default());
        assert_eq!(missing_files(temp.path(), &REQUIRED, &FsProbe).len(), 8);
    }

    #[test]
    fn test_required_only() {
        let temp = TempDir::new().expect("should create temp dir");
        touch_all(temp.path(), &REQUIRED);
        assert_eq!(ThemeAvailability::probe(temp.path()), ThemeAvailability::BASIC);
    }

    #[test]
    fn test_complete_theme() {
        let temp = TempDir::new().expect("should create temp dir");
        touch_all(temp.path(), &REQUIRED);
        touch_all(temp.path(), &OPTIONAL);
        assert_eq!(ThemeAvailability::probe(temp.path()), ThemeAvailability::COMPLETE);
    }

    #[test]
    fn test_one_missing_optional_disables_all_variants() {
        let temp = TempDir::new().expect("should create temp dir");
        touch_all(temp.path(), &REQUIRED);
        touch_all(temp.path(), &OPTIONAL);
        std::fs::remove_file(temp.path().join("gem_epic.png")).expect("should remove file");

        let availability = ThemeAvailability::probe(temp.path());
        assert!(availability.has_all_required);
        assert!(!availability.has_all_optional);
        assert_eq!(missing_files(temp.path(), &OPTIONAL, &FsProbe), vec!["gem_epic.png"]);
    }

    #[test]
    fn test_optional_without_required_is_unusable() {
        let temp = TempDir::new().expect("should create temp dir");
        touch_all(temp.path(), &OPTIONAL);
        let availability = ThemeAvailability::probe(temp.path());
        assert!(!availability.has_all_required);
        assert!(availability.has_all_optional);
        assert_eq!(availability.describe(), "unusable (required files missing)");
    }

    #[test]
    fn test_directory_named_like_asset_does_not_count() {
        let temp = TempDir::new().expect("should create temp dir");
        touch_all(temp.path(), &REQUIRED);
        std::fs::remove_file(temp.path().join("frame.png")).expect("should remove file");
        std::fs::create_dir(temp.path().join("frame.png")).expect("should create dir");
        assert!(!ThemeAvailability::probe(temp.path()).has_all_required);
    }

    #[test]
    fn test_closure_probe() {
        let probe = |p: &Path| p.file_name().is_some_and(|n| n != "dark.png");
        let availability = ThemeAvailability::probe_with(Path::new("themes/x"), &probe);
        assert!(!availability.has_all_required);
        assert!(availability.has_all_optional);
    }
}
