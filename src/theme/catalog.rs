//! Named theme elements and their default placement
//!
//! Every bar theme is a directory of PNG files. The required set must be
//! complete for a theme to be usable at all; the optional set adds
//! rarity-coloured frames, gems and count boxes.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Full bar area.
pub const FRAME_RECT: Rect = Rect::new(0.0, 0.0, 217.0, 34.0);
/// Mana gem on the left edge.
pub const GEM_RECT: Rect = Rect::new(0.0, 0.0, 34.0, 34.0);
/// Count box column on the right edge.
pub const BOX_RECT: Rect = Rect::new(192.0, 0.0, 25.0, 34.0);
/// Card art strip.
pub const ART_RECT: Rect = Rect::new(83.0, 0.0, 134.0, 34.0);

/// One visual element a theme may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeElement {
    DefaultFrame,
    DefaultGem,
    DefaultCountBox,
    DarkOverlay,
    FadeOverlay,
    GoldenFrame,
    CreatedIcon,
    LegendaryIcon,
    CommonFrame,
    RareFrame,
    EpicFrame,
    LegendaryFrame,
    CommonGem,
    RareGem,
    EpicGem,
    LegendaryGem,
    CommonCountBox,
    RareCountBox,
    EpicCountBox,
    LegendaryCountBox,
}

/// File name and default rectangle of a theme element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeElementInfo {
    pub file_name: &'static str,
    pub rect: Rect,
}

impl ThemeElementInfo {
    const fn new(file_name: &'static str, rect: Rect) -> Self {
        Self { file_name, rect }
    }
}

impl ThemeElement {
    /// File name and placement for this element.
    pub const fn info(self) -> ThemeElementInfo {
        use ThemeElement::*;
        match self {
            DefaultFrame => ThemeElementInfo::new("frame.png", FRAME_RECT),
            DefaultGem => ThemeElementInfo::new("gem.png", GEM_RECT),
            DefaultCountBox => ThemeElementInfo::new("countbox.png", BOX_RECT),
            DarkOverlay => ThemeElementInfo::new("dark.png", FRAME_RECT),
            FadeOverlay => ThemeElementInfo::new("fade.png", FRAME_RECT),
            GoldenFrame => ThemeElementInfo::new("frame_golden.png", FRAME_RECT),
            CreatedIcon => ThemeElementInfo::new("icon_created.png", BOX_RECT),
            LegendaryIcon => ThemeElementInfo::new("icon_legendary.png", BOX_RECT),
            CommonFrame => ThemeElementInfo::new("frame_common.png", FRAME_RECT),
            RareFrame => ThemeElementInfo::new("frame_rare.png", FRAME_RECT),
            EpicFrame => ThemeElementInfo::new("frame_epic.png", FRAME_RECT),
            LegendaryFrame => ThemeElementInfo::new("frame_legendary.png", FRAME_RECT),
            CommonGem => ThemeElementInfo::new("gem_common.png", GEM_RECT),
            RareGem => ThemeElementInfo::new("gem_rare.png", GEM_RECT),
            EpicGem => ThemeElementInfo::new("gem_epic.png", GEM_RECT),
            LegendaryGem => ThemeElementInfo::new("gem_legendary.png", GEM_RECT),
            CommonCountBox => ThemeElementInfo::new("countbox_common.png", BOX_RECT),
            RareCountBox => ThemeElementInfo::new("countbox_rare.png", BOX_RECT),
            EpicCountBox => ThemeElementInfo::new("countbox_epic.png", BOX_RECT),
            LegendaryCountBox => ThemeElementInfo::new("countbox_legendary.png", BOX_RECT),
        }
    }

    pub fn file_name(self) -> &'static str {
        self.info().file_name
    }

    pub fn rect(self) -> Rect {
        self.info().rect
    }

    /// True for members of the required catalog.
    pub fn is_required(self) -> bool {
        REQUIRED.contains(self)
    }
}

/// A fixed, read-only set of theme elements.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    name: &'static str,
    elements: &'static [ThemeElement],
}

/// Elements whose absence makes a theme unusable.
pub static REQUIRED: Catalog = Catalog {
    name: "required",
    elements: &[
        ThemeElement::DefaultFrame,
        ThemeElement::DefaultGem,
        ThemeElement::DefaultCountBox,
        ThemeElement::DarkOverlay,
        ThemeElement::FadeOverlay,
        ThemeElement::GoldenFrame,
        ThemeElement::CreatedIcon,
        ThemeElement::LegendaryIcon,
    ],
};

/// Rarity variants. Missing any of them only disables rarity styling.
pub static OPTIONAL: Catalog = Catalog {
    name: "optional",
    elements: &[
        ThemeElement::CommonFrame,
        ThemeElement::RareFrame,
        ThemeElement::EpicFrame,
        ThemeElement::LegendaryFrame,
        ThemeElement::CommonGem,
        ThemeElement::RareGem,
        ThemeElement::EpicGem,
        ThemeElement::LegendaryGem,
        ThemeElement::CommonCountBox,
        ThemeElement::RareCountBox,
        ThemeElement::EpicCountBox,
        ThemeElement::LegendaryCountBox,
    ],
};

impl Catalog {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up an element's info if it belongs to this catalog.
    pub fn get(&self, element: ThemeElement) -> Option<ThemeElementInfo> {
        self.contains(element).then(|| element.info())
    }

    pub fn contains(&self, element: ThemeElement) -> bool {
        self.elements.contains(&element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over `(element, info)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeElement, ThemeElementInfo)> + '_ {
        self.elements.iter().map(|&e| (e, e.info()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(REQUIRED.len(), 8);
        assert_eq!(OPTIONAL.len(), 12);
    }

    #[test]
    fn test_catalogs_are_disjoint_and_file_names_unique() {
        let mut files = HashSet::new();
        for (element, info) in REQUIRED.iter().chain(OPTIONAL.iter()) {
            assert!(!(REQUIRED.contains(element) && OPTIONAL.contains(element)));
            assert!(files.insert(info.file_name), "duplicate file {}", info.file_name);
        }
        assert_eq!(files.len(), 20);
    }

    #[test]
    fn test_get_respects_membership() {
        assert_eq!(REQUIRED.get(ThemeElement::GoldenFrame).map(|i| i.file_name), Some("frame_golden.png"));
        assert!(REQUIRED.get(ThemeElement::RareGem).is_none());
        assert_eq!(OPTIONAL.get(ThemeElement::RareGem).map(|i| i.rect), Some(GEM_RECT));
    }

    #[test]
    fn test_icons_sit_in_box_column() {
        assert_eq!(ThemeElement::CreatedIcon.rect(), BOX_RECT);
        assert_eq!(ThemeElement::LegendaryIcon.rect(), BOX_RECT);
        assert!(ThemeElement::LegendaryIcon.is_required());
        assert!(!ThemeElement::LegendaryCountBox.is_required());
    }
}
