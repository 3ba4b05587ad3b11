//! Stylesheet and color definitions
//!
//! Two style scopes exist side by side:
//! - a process-wide shared [`Stylesheet`] the feature list injects its
//!   classes into exactly once (guarded by an existence check), and
//! - per-card [`CardPalette`] constants the pricing cards keep to
//!   themselves, so nothing leaks in or out of a card.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, OnceLock};

use ratatui::style::{Color, Modifier, Style};

/// Feature list style classes in the shared sheet
pub mod feature_list {
    /// Row text
    pub const TEXT: &str = "feature-text";
    /// Icon, default theme
    pub const ICON_DEFAULT: &str = "feature-icon-default";
    /// Icon, blue theme
    pub const ICON_BLUE: &str = "feature-icon-blue";
    /// Icon, purple theme
    pub const ICON_PURPLE: &str = "feature-icon-purple";
    /// Icon, orange theme
    pub const ICON_ORANGE: &str = "feature-icon-orange";
}

/// Map of class name to style.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    rules: BTreeMap<&'static str, Style>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.rules.contains_key(class)
    }

    /// Insert a rule unless the class already exists.
    ///
    /// Returns `false` and leaves the existing rule untouched on conflict.
    pub fn insert(&mut self, class: &'static str, style: Style) -> bool {
        if self.rules.contains_key(class) {
            return false;
        }
        self.rules.insert(class, style);
        true
    }

    /// Style for `class`, or the neutral style when the class is unknown
    pub fn get(&self, class: &str) -> Style {
        self.rules.get(class).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static SHARED: OnceLock<Mutex<Stylesheet>> = OnceLock::new();

/// The process-wide shared stylesheet
pub fn shared() -> MutexGuard<'static, Stylesheet> {
    SHARED
        .get_or_init(|| Mutex::new(Stylesheet::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Inject the feature list classes into the shared sheet.
///
/// Idempotent: the first instance to render injects, every later call
/// finds the classes present and returns without touching the sheet.
pub fn ensure_feature_list_styles() {
    let mut sheet = shared();
    if sheet.contains(feature_list::TEXT) {
        return;
    }
    sheet.insert(feature_list::TEXT, Style::default());
    sheet.insert(
        feature_list::ICON_DEFAULT,
        Style::default()
            .fg(Color::Rgb(0x4c, 0xaf, 0x50))
            .add_modifier(Modifier::BOLD),
    );
    sheet.insert(
        feature_list::ICON_BLUE,
        Style::default()
            .fg(Color::Rgb(0x21, 0x96, 0xf3))
            .add_modifier(Modifier::BOLD),
    );
    sheet.insert(
        feature_list::ICON_PURPLE,
        Style::default()
            .fg(Color::Rgb(0x9c, 0x27, 0xb0))
            .add_modifier(Modifier::BOLD),
    );
    sheet.insert(
        feature_list::ICON_ORANGE,
        Style::default()
            .fg(Color::Rgb(0xff, 0x98, 0x00))
            .add_modifier(Modifier::BOLD),
    );
}

/// Icon class for a theme name; unknown themes fall back to the default
pub fn icon_class(theme: &str) -> &'static str {
    match theme {
        "blue" => feature_list::ICON_BLUE,
        "purple" => feature_list::ICON_PURPLE,
        "orange" => feature_list::ICON_ORANGE,
        _ => feature_list::ICON_DEFAULT,
    }
}

/// Colors a pricing card draws with.
///
/// Private to each card (isolated scope); the popular flag only swaps the
/// palette, it never changes what is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPalette {
    pub border: Color,
    pub name: Color,
    pub price: Color,
    pub description: Color,
    pub feature: Color,
    pub check: Color,
}

/// Palette for regular cards
pub const CARD_NORMAL: CardPalette = CardPalette {
    border: Color::Gray,
    name: Color::Reset,
    price: Color::Reset,
    description: Color::DarkGray,
    feature: Color::Gray,
    check: Color::Rgb(0x10, 0xb9, 0x81),
};

/// Palette for cards flagged popular
pub const CARD_POPULAR: CardPalette = CardPalette {
    border: Color::Magenta,
    name: Color::White,
    price: Color::White,
    description: Color::Gray,
    feature: Color::Gray,
    check: Color::Rgb(0x10, 0xb9, 0x81),
};

impl CardPalette {
    /// Palette selected by the `popular` presence attribute
    pub const fn for_popular(popular: bool) -> &'static CardPalette {
        if popular { &CARD_POPULAR } else { &CARD_NORMAL }
    }
}
