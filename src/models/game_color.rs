//! The fixed colour catalog the game deals cards from.
//!
//! Order matters: a difficulty with N pairs always uses the first N entries,
//! so the easy deck is always Red/Blue/Green.

use serde::Serialize;

use super::RgbColor;

/// A named colour a card can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameColor {
    /// Display and spoken name (also the match key)
    pub name: &'static str,
    /// Hex code in "#RRGGBB" form
    pub hex: &'static str,
}

impl GameColor {
    /// Creates a catalog entry.
    #[must_use]
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// Parsed RGB value of the hex code.
    ///
    /// Catalog entries are known-good, so an unparsable code falls back to black
    /// rather than erroring.
    #[must_use]
    pub fn rgb(&self) -> RgbColor {
        RgbColor::from_hex(self.hex).unwrap_or(RgbColor::BLACK)
    }

    /// Whether two cards showing these colours form a pair.
    ///
    /// Exact, case-sensitive comparison of the names.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// All colours the game knows, in deal order.
pub const CATALOG: [GameColor; 12] = [
    GameColor::new("Red", "#FF6B6B"),
    GameColor::new("Blue", "#48DBFB"),
    GameColor::new("Green", "#1DD1A1"),
    GameColor::new("Yellow", "#FECA57"),
    GameColor::new("Purple", "#5F27CD"),
    GameColor::new("Orange", "#FF9F43"),
    GameColor::new("Pink", "#FF9FF3"),
    GameColor::new("Cyan", "#0ABDE3"),
    // Slate grey reads better than true black on the board
    GameColor::new("Black", "#576574"),
    GameColor::new("White", "#C8D6E5"),
    GameColor::new("Brown", "#834C32"),
    GameColor::new("Lime", "#BADC58"),
];

/// Looks up a catalog colour by exact name.
#[cfg(test)]
pub(crate) fn find_color(name: &str) -> Option<GameColor> {
    CATALOG.iter().copied().find(|c| c.name == name)
}
