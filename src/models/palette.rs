//! Generated UI palettes and their semantic colour roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::RgbColor;

/// The UI purpose a palette colour is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Main brand colour
    Primary,
    /// Supporting brand colour
    Secondary,
    /// Highlights and calls to action
    Accent,
    /// Main page background
    Background,
    /// Card/component background, contrasting with the page
    Surface,
    /// High contrast text
    TextMain,
    /// Lower contrast text
    TextMuted,
}

impl ColorRole {
    /// All roles in the order the generator is asked for them.
    pub const ALL: [Self; 7] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::Surface,
        Self::TextMain,
        Self::TextMuted,
    ];

    /// Wire name, as used in the generator's JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::TextMain => "text_main",
            Self::TextMuted => "text_muted",
        }
    }

    /// Short description of the role, used in the generation prompt.
    #[must_use]
    pub const fn purpose(self) -> &'static str {
        match self {
            Self::Primary => "Main brand color",
            Self::Secondary => "Supporting brand color",
            Self::Accent => "Highlights, calls to action",
            Self::Background => "Main page background, usually neutral or very dark/light",
            Self::Surface => "Card/Component background, contrasting with background",
            Self::TextMain => "High contrast text",
            Self::TextMuted => "Lower contrast text",
        }
    }
}

impl fmt::Display for ColorRole {
    /// Human label ("text main"), underscores replaced by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

/// One colour of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorItem {
    /// Hex code, e.g. "#FF5500"
    pub hex: String,
    /// Creative colour name
    pub name: String,
    /// UI role this colour fills
    pub role: ColorRole,
    /// Why this colour fits the role
    pub description: String,
}

impl ColorItem {
    /// Parsed RGB value; falls back to black for an unparsable code.
    #[must_use]
    pub fn rgb(&self) -> RgbColor {
        RgbColor::from_hex(&self.hex).unwrap_or(RgbColor::BLACK)
    }
}

/// Palette content as produced by the generator, before it gets an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDraft {
    /// Creative palette name
    pub name: String,
    /// Short description of the vibe
    pub description: String,
    /// Role-tagged colours
    pub colors: Vec<ColorItem>,
}

/// A palette held in memory for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Generated id
    pub id: Uuid,
    /// Creative palette name
    pub name: String,
    /// Short description of the vibe
    pub description: String,
    /// Role-tagged colours
    pub colors: Vec<ColorItem>,
    /// When the palette was generated
    pub created_at: DateTime<Utc>,
}

impl Palette {
    /// Stamps a draft with a fresh id and the current time.
    #[must_use]
    pub fn from_draft(draft: PaletteDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            colors: draft.colors,
            created_at: Utc::now(),
        }
    }

    /// First colour assigned to `role`, if any.
    #[must_use]
    pub fn color_for(&self, role: ColorRole) -> Option<&ColorItem> {
        self.colors.iter().find(|c| c.role == role)
    }

    /// RGB value for `role`, black when the palette lacks it.
    #[must_use]
    pub fn rgb_for(&self, role: ColorRole) -> RgbColor {
        self.color_for(role).map_or(RgbColor::BLACK, ColorItem::rgb)
    }
}
