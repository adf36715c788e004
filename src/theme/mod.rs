//! Bar themes: asset catalog, availability probing and discovery

pub mod availability;
pub mod catalog;
pub mod discovery;

pub use availability::{check_availability, missing_files, AssetProbe, FsProbe, ThemeAvailability};
pub use catalog::{Catalog, ThemeElement, ThemeElementInfo, OPTIONAL, REQUIRED};
pub use discovery::{discover_themes, find_theme, InstalledTheme};
