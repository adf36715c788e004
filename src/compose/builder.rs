//! Card bar builder: the fixed layer pipeline
//!
//! Layers are appended in this order, which is also the z-order:
//!
//! 1. card art (when an art strip exists for the card id)
//! 2. fade overlay
//! 3. gem
//! 4. count box and count text (more than one copy)
//! 5. created icon
//! 6. legendary icon (single-copy legendary)
//! 7. frame
//! 8. cost text
//! 9. name text
//! 10. dark overlay, plus the golden frame again when highlighted
//!     (not owned or jousted cards)
//!
//! A theme missing any required file produces no layers at all.

use image::Rgba;
use std::path::{Path, PathBuf};

use super::layer::{ImagePlacement, ImageSource, Layer};
use super::text::{OutlinedText, TextLayout, TextStyle};
use crate::card::{Card, Rarity};
use crate::color::{BLACK, COUNT_GOLD, WHITE};
use crate::config::{CardBarConfig, DisplayConfig};
use crate::geometry::Rect;
use crate::select::{AssetLookup, RarityPolicy, SelectionContext, SelectionPolicy};
use crate::theme::catalog::{ART_RECT, BOX_RECT, FRAME_RECT};
use crate::theme::{AssetProbe, FsProbe, ThemeAvailability, ThemeElement};

/// Highest count shown as a digit. Larger counts add a "+".
pub const MAX_COUNT_DIGIT: u32 = 9;

/// Rectangles and font sizes for the non-theme parts of a bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub art: Rect,
    pub cost: Rect,
    pub cost_size: u32,
    pub name: Rect,
    pub name_size: u32,
    pub count_digit: Rect,
    pub count_size: u32,
    pub count_plus: Rect,
    pub plus_size: u32,
    /// Horizontal shift of the created icon when the box column is taken
    pub created_shift: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            art: ART_RECT,
            cost: Rect::new(6.0, 0.0, 25.0, 34.0),
            cost_size: 22,
            name: Rect::new(38.0, 8.0, FRAME_RECT.width - BOX_RECT.width - 38.0, 34.0),
            name_size: 14,
            count_digit: Rect::point(198.0, 4.0),
            count_size: 20,
            count_plus: Rect::point(203.0, 3.0),
            plus_size: 13,
            created_shift: -BOX_RECT.width,
        }
    }
}

/// True when something occupies the count box column: a count above one,
/// or any legendary.
pub fn box_column_taken(card: &Card) -> bool {
    card.count.unsigned_abs() > 1 || card.rarity == Rarity::Legendary
}

/// True when the count box and count digit are drawn.
pub fn shows_count_box(card: &Card) -> bool {
    box_column_taken(card) && !shows_legendary_icon(card)
}

/// True for single-copy legendaries, which get the legendary icon instead of
/// a count box.
pub fn shows_legendary_icon(card: &Card) -> bool {
    card.rarity == Rarity::Legendary && card.count.unsigned_abs() <= 1
}

/// True when the bar is darkened: not owned, used up, or jousted.
pub fn is_darkened(card: &Card) -> bool {
    card.count <= 0 || card.jousted
}

/// Builds the layer list for one card against one theme.
///
/// Theme availability is probed once, at construction. Each call to
/// [`build`](Self::build) clears and refills the layer list, so repeated
/// builds of an unchanged card give identical output.
///
/// ```no_run
/// use cardbar::card::{Card, Rarity};
/// use cardbar::compose::CardBarBuilder;
/// use cardbar::config::DisplayConfig;
///
/// let mut card = Card::new("EX1_116", "Leeroy Jenkins", 5).with_rarity(Rarity::Legendary);
/// let mut builder = CardBarBuilder::new("Images/Themes/Bars/dark");
/// let layers = builder.build(&mut card, &DisplayConfig::default());
/// println!("{} layers", layers.len());
/// ```
pub struct CardBarBuilder {
    theme_dir: PathBuf,
    art_dir: PathBuf,
    availability: ThemeAvailability,
    layout: BarLayout,
    count_color: Rgba<u8>,
    probe: Box<dyn AssetProbe>,
    policy: Box<dyn SelectionPolicy>,
    text: Box<dyn TextLayout>,
    layers: Vec<Layer>,
}

impl std::fmt::Debug for CardBarBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardBarBuilder")
            .field("theme_dir", &self.theme_dir)
            .field("art_dir", &self.art_dir)
            .field("availability", &self.availability)
            .field("layers", &self.layers.len())
            .finish_non_exhaustive()
    }
}

impl CardBarBuilder {
    /// Create a builder for `theme_dir`, probing the filesystem.
    pub fn new(theme_dir: impl Into<PathBuf>) -> Self {
        Self::with_probe(theme_dir, FsProbe)
    }

    /// Create a builder whose theme and art lookups go through `probe`.
    pub fn with_probe(theme_dir: impl Into<PathBuf>, probe: impl AssetProbe + 'static) -> Self {
        let theme_dir = theme_dir.into();
        let availability = ThemeAvailability::probe_with(&theme_dir, &probe);
        if !availability.has_all_required {
            log::warn!("theme {} is missing required files; bars will be empty", theme_dir.display());
        }
        Self {
            theme_dir,
            art_dir: PathBuf::from("Images/Bars"),
            availability,
            layout: BarLayout::default(),
            count_color: COUNT_GOLD,
            probe: Box::new(probe),
            policy: Box::new(RarityPolicy),
            text: Box::new(OutlinedText),
            layers: Vec::new(),
        }
    }

    /// Create a builder for the configured theme, art directory and colours.
    pub fn from_config(config: &CardBarConfig) -> Self {
        Self::new(config.theme_dir())
            .art_dir(config.art_dir())
            .count_color(config.count_color())
    }

    pub fn art_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.art_dir = dir.into();
        self
    }

    pub fn layout(mut self, layout: BarLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn count_color(mut self, color: Rgba<u8>) -> Self {
        self.count_color = color;
        self
    }

    /// Replace the variant selection strategy.
    pub fn policy(mut self, policy: impl SelectionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the text layout helper.
    pub fn text_layout(mut self, text: impl TextLayout + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    pub fn theme_dir(&self) -> &Path {
        &self.theme_dir
    }

    pub fn availability(&self) -> ThemeAvailability {
        self.availability
    }

    /// False when the theme lacks required files and every build is empty.
    pub fn is_usable(&self) -> bool {
        self.availability.has_all_required
    }

    /// Layers from the most recent build.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Rebuild the layer list for `card`.
    ///
    /// Writes `card.is_frame_highlighted` whenever the frame is selected.
    /// Returns an empty slice when the theme is unusable.
    pub fn build(&mut self, card: &mut Card, display: &DisplayConfig) -> &[Layer] {
        self.layers.clear();

        if !self.availability.has_all_required {
            log::debug!("skipping {}: theme {} unusable", card.id, self.theme_dir.display());
            return &self.layers;
        }

        let ctx = SelectionContext { display, availability: self.availability };

        self.add_card_art(card);
        self.add_element(ThemeElement::FadeOverlay);
        self.add_lookup(self.policy.gem(card, &ctx));
        if shows_count_box(card) {
            self.add_lookup(self.policy.count_box(card, &ctx));
            self.add_count_text(card);
        }
        if card.is_created {
            self.add_created_icon(card);
        }
        if shows_legendary_icon(card) {
            self.add_element(ThemeElement::LegendaryIcon);
        }
        self.add_frame(card, &ctx);
        self.add_cost(card);
        self.add_name(card);
        if is_darkened(card) {
            self.add_darken(card);
        }

        log::trace!("built {} layers for {}", self.layers.len(), card.id);
        &self.layers
    }

    fn add_card_art(&mut self, card: &Card) {
        let path = self.art_dir.join(format!("{}.png", card.id));
        if !self.probe.exists(&path) {
            return;
        }
        self.layers.push(Layer::Image(ImagePlacement {
            source: ImageSource::CardArt(card.id.clone()),
            path,
            rect: self.layout.art,
        }));
    }

    fn add_frame(&mut self, card: &mut Card, ctx: &SelectionContext<'_>) {
        let choice = self.policy.frame(card, ctx);
        card.is_frame_highlighted = choice.highlighted;
        self.add_lookup(choice.lookup);
    }

    fn add_count_text(&mut self, card: &Card) {
        let count = card.count.unsigned_abs();
        if count <= 1 {
            return;
        }
        let digit = count.min(MAX_COUNT_DIGIT).to_string();
        self.add_text(&digit, self.layout.count_digit, self.layout.count_size, self.count_color, false);
        if count > MAX_COUNT_DIGIT {
            self.add_text("+", self.layout.count_plus, self.layout.plus_size, self.count_color, false);
        }
    }

    fn add_created_icon(&mut self, card: &Card) {
        let element = ThemeElement::CreatedIcon;
        let rect = if box_column_taken(card) {
            element.rect().offset(self.layout.created_shift, 0.0)
        } else {
            element.rect()
        };
        self.add_element_at(element, rect);
    }

    fn add_cost(&mut self, card: &Card) {
        self.add_text(&card.cost.to_string(), self.layout.cost, self.layout.cost_size, WHITE, true);
    }

    fn add_name(&mut self, card: &Card) {
        self.add_text(&card.name, self.layout.name, self.layout.name_size, WHITE, false);
    }

    fn add_darken(&mut self, card: &Card) {
        self.add_element(ThemeElement::DarkOverlay);
        if card.highlight_frame {
            self.add_element(ThemeElement::GoldenFrame);
        }
    }

    fn add_text(&mut self, text: &str, rect: Rect, size: u32, fill: Rgba<u8>, centered: bool) {
        let style = TextStyle { size, fill, outline: BLACK, centered };
        let placements = self.text.outlined_text(text, rect, &style);
        self.layers.extend(placements.into_iter().map(Layer::Text));
    }

    fn add_lookup(&mut self, lookup: AssetLookup) {
        match lookup.element() {
            Some(element) => {
                log::trace!("selected {:?} ({:?})", element, lookup);
                self.add_element(element);
            }
            None => log::debug!("no asset available in {}", self.theme_dir.display()),
        }
    }

    fn add_element(&mut self, element: ThemeElement) {
        self.add_element_at(element, element.rect());
    }

    fn add_element_at(&mut self, element: ThemeElement, rect: Rect) {
        self.layers.push(Layer::Image(ImagePlacement {
            source: ImageSource::Theme(element),
            path: self.theme_dir.join(element.file_name()),
            rect,
        }));
    }
}
