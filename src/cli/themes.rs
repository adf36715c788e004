//! Theme inspection commands (check, themes)

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::theme::{discover_themes, missing_files, FsProbe, ThemeAvailability, OPTIONAL, REQUIRED};

use super::{load_settings, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the check command
pub fn run_check(dir: &Path) -> ExitCode {
    if !dir.is_dir() {
        eprintln!("Error: {} is not a directory", dir.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let availability = ThemeAvailability::probe(dir);
    println!("{}: {}", dir.display(), availability.describe());

    for catalog in [&REQUIRED, &OPTIONAL] {
        let missing = missing_files(dir, catalog, &FsProbe);
        if missing.is_empty() {
            continue;
        }
        println!("  missing {} ({}/{}):", catalog.name(), missing.len(), catalog.len());
        for file in missing {
            println!("    {}", file);
        }
    }

    if availability.has_all_required {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Execute the themes command
pub fn run_themes(config: Option<&Path>, root: Option<&Path>) -> ExitCode {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => match load_settings(config, &CliOverrides::default()) {
            Ok(settings) => settings.paths.themes,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
    };

    let themes = discover_themes(&root);
    if themes.is_empty() {
        eprintln!("No themes found in {}", root.display());
        return ExitCode::from(EXIT_ERROR);
    }

    let width = themes.iter().map(|t| t.name.len()).max().unwrap_or(0);
    for theme in &themes {
        println!("{:<width$}  {}", theme.name, theme.availability.describe(), width = width);
    }
    ExitCode::from(EXIT_SUCCESS)
}
