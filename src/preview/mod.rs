//! Mock interfaces painted with a generated palette.
//!
//! Each preview is a fixed template whose regions take their colours from
//! the palette's roles. Roles the palette lacks are painted black.

pub mod dashboard;
pub mod landing;
pub mod mobile;

use ratatui::{layout::Rect, style::Style, Frame};

use crate::models::{ColorRole, Palette, RgbColor};

/// Palette colours resolved per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleStyles {
    /// Page background
    pub background: RgbColor,
    /// Panel and card background
    pub surface: RgbColor,
    /// Main brand colour
    pub primary: RgbColor,
    /// Supporting brand colour
    pub secondary: RgbColor,
    /// Highlights
    pub accent: RgbColor,
    /// Body text
    pub text_main: RgbColor,
    /// Secondary text
    pub text_muted: RgbColor,
}

impl RoleStyles {
    /// Looks up every role in `palette`.
    #[must_use]
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: palette.rgb_for(ColorRole::Background),
            surface: palette.rgb_for(ColorRole::Surface),
            primary: palette.rgb_for(ColorRole::Primary),
            secondary: palette.rgb_for(ColorRole::Secondary),
            accent: palette.rgb_for(ColorRole::Accent),
            text_main: palette.rgb_for(ColorRole::TextMain),
            text_muted: palette.rgb_for(ColorRole::TextMuted),
        }
    }

    /// Colour assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> RgbColor {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::TextMain => self.text_main,
            ColorRole::TextMuted => self.text_muted,
        }
    }

    /// `fg` text on a `bg` fill.
    #[must_use]
    pub fn style(fg: RgbColor, bg: RgbColor) -> Style {
        Style::default()
            .fg(fg.to_ratatui_color())
            .bg(bg.to_ratatui_color())
    }

    /// Faint divider colour: muted text at 12% over `base`.
    #[must_use]
    pub fn border_on(&self, base: RgbColor) -> RgbColor {
        self.text_muted.blend_over(base, 12)
    }

    /// Translucent tint of `color` over `base`.
    #[must_use]
    pub fn tint(color: RgbColor, base: RgbColor) -> RgbColor {
        color.blend_over(base, 20)
    }
}

/// Which mock interface to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewKind {
    /// Admin dashboard with sidebar, stats and chart
    #[default]
    Dashboard,
    /// Marketing page with hero and feature cards
    Landing,
    /// Phone app screen
    Mobile,
}

impl PreviewKind {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Landing, Self::Mobile];

    /// Tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Landing => "Landing Page",
            Self::Mobile => "Mobile App",
        }
    }

    /// Position among the tabs.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Landing => 1,
            Self::Mobile => 2,
        }
    }

    /// Next tab, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Landing,
            Self::Landing => Self::Mobile,
            Self::Mobile => Self::Dashboard,
        }
    }

    /// Previous tab, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Dashboard => Self::Mobile,
            Self::Landing => Self::Dashboard,
            Self::Mobile => Self::Landing,
        }
    }
}

/// Paints the `kind` preview into `area`.
pub fn render(f: &mut Frame, area: Rect, kind: PreviewKind, styles: &RoleStyles) {
    match kind {
        PreviewKind::Dashboard => dashboard::render(f, area, styles),
        PreviewKind::Landing => landing::render(f, area, styles),
        PreviewKind::Mobile => mobile::render(f, area, styles),
    }
}

/// Fills `area` with a solid colour.
pub(crate) fn fill(f: &mut Frame, area: Rect, color: RgbColor) {
    let block = ratatui::widgets::Block::default()
        .style(Style::default().bg(color.to_ratatui_color()));
    f.render_widget(block, area);
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_missing_roles_default_to_black() {
        let styles = RoleStyles::from_palette(&palette(&[(ColorRole::Primary, "#FF0000")]));
        assert_eq!(styles.primary, RgbColor::new(255, 0, 0));
        for role in ColorRole::ALL.into_iter().filter(|r| *r != ColorRole::Primary) {
            assert_eq!(styles.get(role), RgbColor::BLACK, "{role}");
        }
    }

    #[test]
    fn test_first_colour_per_role_wins() {
        let styles = RoleStyles::from_palette(&palette(&[
            (ColorRole::Accent, "#00FF00"),
            (ColorRole::Accent, "#0000FF"),
        ]));
        assert_eq!(styles.accent, RgbColor::new(0, 255, 0));
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(PreviewKind::default(), PreviewKind::Dashboard);
        let mut kind = PreviewKind::Dashboard;
        let mut labels = Vec::new();
        for _ in 0..3 {
            labels.push(kind.label());
            kind = kind.next();
        }
        assert_eq!(labels, ["Dashboard", "Landing Page", "Mobile App"]);
        assert_eq!(kind, PreviewKind::Dashboard);
        assert_eq!(PreviewKind::Dashboard.previous(), PreviewKind::Mobile);
    }

    #[test]
    fn test_every_preview_renders_in_small_area() {
        let styles = full_styles();
        for kind in PreviewKind::ALL {
            // Must not panic even when cramped
            draw(kind, &styles, 20, 6);
            draw(kind, &styles, 1, 1);
        }
    }
}
