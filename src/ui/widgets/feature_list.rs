//! Feature list widget
//!
//! Renders one row per feature (icon glyph + text) with an optional
//! staggered reveal. Styles come from the process-wide shared stylesheet,
//! injected once by whichever instance renders first.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::symbols::icons;
use crate::ui::theme;
use crate::widget::{
    AttrError, Attributes, Component, MountContext, Redraw, RevealSchedule, StyleScope, attrs,
};

/// Theme used when no `theme` attribute is set
pub const DEFAULT_THEME: &str = "default";

/// Themed list of short feature strings.
///
/// Configuration comes from the `theme`, `icon`, `animation`, and
/// `features` attributes. When no `features` attribute is present at
/// mount time, items are derived once from child nodes tagged `feature`;
/// later attribute changes always take precedence over that fallback.
#[derive(Debug, Clone)]
pub struct FeatureList {
    attrs: Attributes,
    features: Vec<String>,
    theme: String,
    icon: String,
    animation: bool,
    mounted: bool,
    schedule: RevealSchedule,
    last_error: Option<String>,
}

impl FeatureList {
    /// Fixed registration tag
    pub const TAG: &'static str = "feature-list";

    const OBSERVED: &'static [&'static str] = &["theme", "icon", "animation", "features"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Current feature sequence, in render order
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation
    }

    /// Replace the feature sequence directly, bypassing attribute parsing.
    ///
    /// Restarts the reveal stagger when mounted with animation on.
    pub fn set_features(&mut self, features: Vec<String>) {
        self.features = features;
        if self.mounted {
            self.reschedule_from(Instant::now());
        }
    }

    /// Take the diagnostic recorded by the last malformed `features` value
    pub fn take_diagnostic(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Restart the reveal stagger from `start`.
    ///
    /// Cancels every pending reveal first; with animation off (or while
    /// unmounted) the schedule stays empty and all rows show immediately.
    pub fn reschedule_from(&mut self, start: Instant) {
        self.schedule.cancel();
        if self.mounted && self.animation {
            self.schedule = RevealSchedule::staggered_from(self.features.len(), start);
        }
    }

    /// Draw the list as of `now`; rows whose reveal deadline has not
    /// passed keep their slot but stay blank.
    pub fn render_at(&self, frame: &mut Frame, area: Rect, now: Instant) {
        theme::ensure_feature_list_styles();
        let (icon_style, text_style) = {
            let sheet = theme::shared();
            (
                sheet.get(theme::icon_class(&self.theme)),
                sheet.get(theme::feature_list::TEXT),
            )
        };

        let mut lines = Vec::with_capacity(self.features.len());
        for (row, feature) in self.features.iter().enumerate() {
            if self.schedule.revealed(row, now) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", self.icon), icon_style),
                    Span::styled(feature.clone(), text_style),
                ]));
            } else {
                lines.push(Line::from(""));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for FeatureList {
    fn default() -> Self {
        Self {
            attrs: Attributes::new(),
            features: Vec::new(),
            theme: DEFAULT_THEME.to_string(),
            icon: icons::CHECK.to_string(),
            animation: true,
            mounted: false,
            schedule: RevealSchedule::new(),
            last_error: None,
        }
    }
}

impl Component for FeatureList {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::OBSERVED
    }

    fn style_scope(&self) -> StyleScope {
        StyleScope::Shared
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<Redraw, AttrError> {
        if !Self::OBSERVED.contains(&name) {
            return Err(AttrError::UnrecognizedAttribute(name.to_string()));
        }
        if self.attrs.get(name) == Some(value) {
            return Ok(Redraw::Skip);
        }

        match name {
            "theme" => self.theme = attrs::non_empty_or(value, DEFAULT_THEME),
            "icon" => self.icon = attrs::non_empty_or(value, icons::CHECK),
            "animation" => self.animation = attrs::parse_bool(value),
            "features" => match attrs::parse_features(value) {
                Ok(features) => self.features = features,
                // Malformed JSON keeps the previous features
                Err(err) => self.last_error = Some(format!("feature-list: {err}")),
            },
            _ => {}
        }
        self.attrs.set(name, value);

        // The old rows are discarded wholesale, pending reveals with them
        if self.mounted {
            self.reschedule_from(Instant::now());
        }
        Ok(Redraw::Needed)
    }

    fn remove_attribute(&mut self, name: &str) -> Result<Redraw, AttrError> {
        if !Self::OBSERVED.contains(&name) {
            return Err(AttrError::UnrecognizedAttribute(name.to_string()));
        }
        if self.attrs.remove(name).is_none() {
            return Ok(Redraw::Skip);
        }

        match name {
            "theme" => self.theme = DEFAULT_THEME.to_string(),
            "icon" => self.icon = icons::CHECK.to_string(),
            "animation" => self.animation = true,
            "features" => self.features.clear(),
            _ => {}
        }

        if self.mounted {
            self.reschedule_from(Instant::now());
        }
        Ok(Redraw::Needed)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    fn mount(&mut self, ctx: &MountContext) {
        // Child fallback is evaluated once, at insertion; an explicit
        // attribute always wins
        if self.attrs.get("features").is_none() {
            self.features = ctx
                .children
                .iter()
                .filter(|child| child.tag == "feature")
                .map(|child| child.text.trim().to_string())
                .collect();
        }
        self.mounted = true;
        self.reschedule_from(Instant::now());
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.schedule.cancel();
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        self.render_at(frame, area, Instant::now());
    }
}
