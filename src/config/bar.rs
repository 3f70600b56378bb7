//! Status bar declarations: the shared color palette, widget defaults,
//! and the per-screen widget tables handed to the host's bar renderer.

use serde::{Deserialize, Serialize};

/// Ordered color table. Widgets and the bar refer to entries by position,
/// so removing a color shifts every later reference; validation catches
/// out-of-range indices at load time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette(pub Vec<String>);

impl Palette {
    #[must_use]
    pub fn color(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fallback settings merged into every widget that does not override them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    /// Palette index of the default text color.
    pub foreground: usize,
    pub padding: u32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "FiraCode Medium".to_owned(),
            fontsize: 12,
            foreground: 2,
            padding: 2,
        }
    }
}

/// The widget implementations the host's bar renderer provides.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    CurrentLayoutIcon,
    Spacer,
    GroupBox,
    WindowName,
    Volume,
    Clock,
    Systray,
}

/// Per-widget settings. Everything is optional; `font`, `fontsize`,
/// `foreground` and `padding` fall back to [`WidgetDefaults`] when unset,
/// the rest stay unset for the host to default.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    /// Palette index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<usize>,
    /// Palette index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    /// Display format for widgets that render text (clock, volume).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Fixed width in pixels (spacers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
    /// Palette index of the active-group color (group box).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub this_current_screen_border: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub this_screen_border: Option<usize>,
}

/// One widget slot in a bar.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetKind,
    #[serde(flatten)]
    pub settings: WidgetSettings,
}

impl Widget {
    #[must_use]
    pub fn new(kind: WidgetKind, settings: WidgetSettings) -> Self {
        Self { kind, settings }
    }

    /// Resolve this widget's settings against the shared defaults:
    /// widget-specific keys win, unset defaultable keys fall back.
    #[must_use]
    pub fn resolved(&self, defaults: &WidgetDefaults) -> WidgetSettings {
        let mut settings = self.settings.clone();
        settings.font = settings.font.or_else(|| Some(defaults.font.clone()));
        settings.fontsize = settings.fontsize.or(Some(defaults.fontsize));
        settings.foreground = settings.foreground.or(Some(defaults.foreground));
        settings.padding = settings.padding.or(Some(defaults.padding));
        settings
    }

    /// Palette references this widget carries, paired with the field
    /// names used in validation reports.
    #[must_use]
    pub fn palette_refs(&self) -> Vec<(&'static str, usize)> {
        let fields = [
            ("foreground", self.settings.foreground),
            ("background", self.settings.background),
            ("active", self.settings.active),
            ("inactive", self.settings.inactive),
            (
                "this_current_screen_border",
                self.settings.this_current_screen_border,
            ),
            ("this_screen_border", self.settings.this_screen_border),
        ];
        fields
            .iter()
            .filter_map(|(name, index)| index.map(|i| (*name, i)))
            .collect()
    }
}

/// A status bar at the top of one screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    pub height: u32,
    /// Palette index.
    pub background: usize,
    pub widgets: Vec<Widget>,
}

/// Per-screen configuration; a screen without a bar shows windows only.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<BarConfig>,
}
