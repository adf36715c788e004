//! Variant selection for frame, gem and count box
//!
//! Each role starts from its required default. When the role's display
//! switch is on and the theme ships every rarity variant, the variant for the
//! card's rarity replaces the default. Frames have one extra branch: a
//! highlighted card always gets the golden frame.
//!
//! Selection is pure. The frame choice reports whether the golden frame was
//! taken and the builder writes that back onto the card.

use crate::card::{Card, Rarity};
use crate::config::DisplayConfig;
use crate::theme::{ThemeAvailability, ThemeElement};

/// The three layer roles that have rarity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Frame,
    Gem,
    CountBox,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Frame, Role::Gem, Role::CountBox];

    /// Required asset used when no variant applies.
    pub fn default_element(self) -> ThemeElement {
        match self {
            Role::Frame => ThemeElement::DefaultFrame,
            Role::Gem => ThemeElement::DefaultGem,
            Role::CountBox => ThemeElement::DefaultCountBox,
        }
    }

    /// Rarity variant for this role. Rarities without their own art use the
    /// common variant.
    pub fn variant(self, rarity: Rarity) -> ThemeElement {
        use ThemeElement::*;
        match (self, rarity) {
            (Role::Frame, Rarity::Rare) => RareFrame,
            (Role::Frame, Rarity::Epic) => EpicFrame,
            (Role::Frame, Rarity::Legendary) => LegendaryFrame,
            (Role::Frame, _) => CommonFrame,
            (Role::Gem, Rarity::Rare) => RareGem,
            (Role::Gem, Rarity::Epic) => EpicGem,
            (Role::Gem, Rarity::Legendary) => LegendaryGem,
            (Role::Gem, _) => CommonGem,
            (Role::CountBox, Rarity::Rare) => RareCountBox,
            (Role::CountBox, Rarity::Epic) => EpicCountBox,
            (Role::CountBox, Rarity::Legendary) => LegendaryCountBox,
            (Role::CountBox, _) => CommonCountBox,
        }
    }

    /// Display switch governing this role. Count boxes follow the frame switch.
    pub fn enabled(self, display: &DisplayConfig) -> bool {
        match self {
            Role::Frame | Role::CountBox => display.rarity_card_frames,
            Role::Gem => display.rarity_card_gems,
        }
    }
}

/// Outcome of an asset lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetLookup {
    /// A specific asset was chosen (rarity variant or golden frame).
    Found(ThemeElement),
    /// The role's required default was kept.
    Fallback(ThemeElement),
    /// The theme lacks its required set; nothing can be drawn.
    Unavailable,
}

impl AssetLookup {
    /// The element to draw, if any.
    pub fn element(&self) -> Option<ThemeElement> {
        match *self {
            AssetLookup::Found(e) | AssetLookup::Fallback(e) => Some(e),
            AssetLookup::Unavailable => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AssetLookup::Fallback(_))
    }
}

/// Frame lookup plus the highlight outcome to write back onto the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameChoice {
    pub lookup: AssetLookup,
    pub highlighted: bool,
}

/// Read-only inputs shared by every selection in one build.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub display: &'a DisplayConfig,
    pub availability: ThemeAvailability,
}

/// Pick the asset for `role` from rarity, display switch and availability.
///
/// Ignores the highlight flag; see [`select_frame`] for frames.
pub fn select_variant(role: Role, rarity: Rarity, ctx: &SelectionContext<'_>) -> AssetLookup {
    if !ctx.availability.has_all_required {
        return AssetLookup::Unavailable;
    }
    if !role.enabled(ctx.display) || !ctx.availability.has_all_optional {
        return AssetLookup::Fallback(role.default_element());
    }
    AssetLookup::Found(role.variant(rarity))
}

/// Frame selection. A highlighted card always gets the golden frame.
pub fn select_frame(card: &Card, ctx: &SelectionContext<'_>) -> FrameChoice {
    if card.highlight_frame {
        let lookup = if ctx.availability.has_all_required {
            AssetLookup::Found(ThemeElement::GoldenFrame)
        } else {
            AssetLookup::Unavailable
        };
        return FrameChoice { lookup, highlighted: true };
    }
    FrameChoice { lookup: select_variant(Role::Frame, card.rarity, ctx), highlighted: false }
}

pub fn select_gem(card: &Card, ctx: &SelectionContext<'_>) -> AssetLookup {
    select_variant(Role::Gem, card.rarity, ctx)
}

pub fn select_count_box(card: &Card, ctx: &SelectionContext<'_>) -> AssetLookup {
    select_variant(Role::CountBox, card.rarity, ctx)
}

/// Per-role selection strategy used by the bar builder.
///
/// Implementors can override a single role and delegate the rest to the
/// free functions in this module.
pub trait SelectionPolicy: Send + Sync {
    fn frame(&self, card: &Card, ctx: &SelectionContext<'_>) -> FrameChoice {
        select_frame(card, ctx)
    }

    fn gem(&self, card: &Card, ctx: &SelectionContext<'_>) -> AssetLookup {
        select_gem(card, ctx)
    }

    fn count_box(&self, card: &Card, ctx: &SelectionContext<'_>) -> AssetLookup {
        select_count_box(card, ctx)
    }
}

/// Standard rarity-driven selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RarityPolicy;

impl SelectionPolicy for RarityPolicy {}
