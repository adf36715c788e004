//! Compose command implementation

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Component, Path};
use std::process::ExitCode;

use crate::card::{load_cards, Card};
use crate::compose::{CardBarBuilder, Layer};
use crate::config::CardBarConfig;
use crate::output::{format_layers, write_json};

use super::{load_settings, ThemeArgs, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// One composed bar, as printed with `--json`
#[derive(Debug, Serialize)]
struct ComposedBar {
    id: String,
    name: String,
    is_frame_highlighted: bool,
    layers: Vec<Layer>,
}

/// File name for a bar written with `--out`, or `None` when the card id is
/// not a single plain path component.
fn out_file_name(id: &str) -> Option<String> {
    if id.contains(['/', '\\']) {
        return None;
    }
    let mut components = Path::new(id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(format!("{}.json", id)),
        _ => None,
    }
}

/// Map every bar to its output file name. Rejects ids that would leave the
/// output directory and ids shared by two cards.
fn out_file_names(bars: &[ComposedBar]) -> Result<Vec<String>, String> {
    let mut seen = HashSet::new();
    bars.iter()
        .map(|bar| {
            let name = out_file_name(&bar.id)
                .ok_or_else(|| format!("card id '{}' is not a valid file name", bar.id))?;
            if !seen.insert(name.clone()) {
                return Err(format!("duplicate card id '{}'", bar.id));
            }
            Ok(name)
        })
        .collect()
}

/// Compose every card with its own builder. Cards are independent, so they
/// run in parallel; output keeps input order.
fn compose_all(settings: &CardBarConfig, cards: Vec<Card>) -> Vec<ComposedBar> {
    cards
        .into_par_iter()
        .map(|mut card| {
            let mut builder = CardBarBuilder::from_config(settings);
            let layers = builder.build(&mut card, &settings.display).to_vec();
            ComposedBar {
                id: card.id,
                name: card.name,
                is_frame_highlighted: card.is_frame_highlighted,
                layers,
            }
        })
        .collect()
}

/// Execute the compose command
pub fn run_compose(
    config: Option<&Path>,
    cards_path: &Path,
    theme: &ThemeArgs,
    json: bool,
    out: Option<&Path>,
) -> ExitCode {
    let settings = match load_settings(config, &theme.overrides()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let cards = match load_cards(cards_path) {
        Ok(cards) => cards,
        Err(e) => {
            eprintln!("Error: {}: {}", cards_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if cards.is_empty() {
        eprintln!("Error: No cards in {}", cards_path.display());
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let theme_dir = settings.theme_dir();
    log::info!("composing {} cards with theme {}", cards.len(), theme_dir.display());
    let bars = compose_all(&settings, cards);

    if bars.iter().all(|bar| bar.layers.is_empty()) {
        eprintln!(
            "Error: theme '{}' is missing required files (run `cardbar check {}`)",
            settings.paths.theme,
            theme_dir.display()
        );
        return ExitCode::from(EXIT_ERROR);
    }

    if let Some(dir) = out {
        let names = match out_file_names(&bars) {
            Ok(names) => names,
            Err(e) => {
                eprintln!("Error: {}: {}", cards_path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        };
        for (bar, name) in bars.iter().zip(names) {
            let path = dir.join(name);
            if let Err(e) = write_json(bar, &path) {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        eprintln!("Wrote {} bars to {}", bars.len(), dir.display());
        return ExitCode::from(EXIT_SUCCESS);
    }

    if json {
        match serde_json::to_string_pretty(&bars) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        for bar in &bars {
            let marker = if bar.is_frame_highlighted { " [highlighted]" } else { "" };
            println!("{} ({}){}", bar.name, bar.id, marker);
            print!("{}", format_layers(&bar.layers));
            println!();
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rarity;
    use crate::theme::{ThemeElement, OPTIONAL, REQUIRED};
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn bar(id: &str) -> ComposedBar {
        ComposedBar { id: id.to_string(), name: String::new(), is_frame_highlighted: false, layers: Vec::new() }
    }

    #[test]
    fn test_out_file_name_plain_ids() {
        assert_eq!(out_file_name("EX1_116"), Some("EX1_116.json".to_string()));
        assert_eq!(out_file_name("CS2.029"), Some("CS2.029.json".to_string()));
    }

    #[test]
    fn test_out_file_name_rejects_paths() {
        for id in ["", ".", "..", "../escaped", "a/b", "a\\b", "/tmp/x", "x/"] {
            assert_eq!(out_file_name(id), None, "id {:?} should be rejected", id);
        }
    }

    #[test]
    fn test_out_file_names_rejects_duplicates() {
        let names = out_file_names(&[bar("A"), bar("B")]).expect("distinct ids should pass");
        assert_eq!(names, vec!["A.json", "B.json"]);

        let err = out_file_names(&[bar("A"), bar("B"), bar("A")]).expect_err("duplicate should fail");
        assert!(err.contains("duplicate card id 'A'"));
    }

    #[test]
    fn test_compose_all_keeps_order_and_write_back() {
        let temp = TempDir::new().expect("should create temp dir");
        let theme_dir = temp.path().join("dark");
        fs::create_dir(&theme_dir).expect("should create theme dir");
        for (_, info) in REQUIRED.iter().chain(OPTIONAL.iter()) {
            File::create(theme_dir.join(info.file_name)).expect("should create theme file");
        }

        let mut settings = CardBarConfig::default();
        settings.paths.themes = temp.path().to_path_buf();
        settings.paths.theme = "dark".to_string();

        let cards: Vec<Card> = (0..20)
            .map(|i| {
                let card = Card::new(format!("C{}", i), format!("Card {}", i), i);
                if i % 2 == 0 {
                    card.highlighted()
                } else {
                    card.with_rarity(Rarity::Rare)
                }
            })
            .collect();

        let bars = compose_all(&settings, cards);
        assert_eq!(bars.len(), 20);
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.id, format!("C{}", i));
            assert_eq!(bar.is_frame_highlighted, i % 2 == 0);
            let expected = if i % 2 == 0 { ThemeElement::GoldenFrame } else { ThemeElement::RareFrame };
            assert!(bar.layers.iter().any(|l| l.element() == Some(expected)));
        }
    }
}
