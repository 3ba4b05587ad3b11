//! Simple pricing card widget
//!
//! Declarative card with a header and feature checklist, no interaction
//! and no events. The card owns its palette (isolated style scope); the
//! `popular` presence attribute only swaps palettes.

use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::ui::components::card;
use crate::ui::theme::CardPalette;
use crate::widget::{AttrError, Attributes, Component, MountContext, Redraw, StyleScope, attrs};

/// Plan name used when no `plan-name` attribute is set
pub const DEFAULT_PLAN_NAME: &str = "Basic Plan";
/// Price used when no `price` attribute is set
pub const DEFAULT_PRICE: &str = "29";
/// Description used when no `description` attribute is set
pub const DEFAULT_DESCRIPTION: &str = "Monthly subscription";

/// Non-interactive pricing card.
#[derive(Debug, Clone)]
pub struct PricingTab {
    attrs: Attributes,
    plan_name: String,
    price: String,
    description: String,
    features: Vec<String>,
    popular: bool,
    mounted: bool,
    last_error: Option<String>,
}

impl PricingTab {
    /// Fixed registration tag
    pub const TAG: &'static str = "pricing-tab";

    const OBSERVED: &'static [&'static str] =
        &["plan-name", "price", "description", "features", "popular"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn is_popular(&self) -> bool {
        self.popular
    }

    /// Take the diagnostic recorded by the last malformed `features` value
    pub fn take_diagnostic(&mut self) -> Option<String> {
        self.last_error.take()
    }
}

impl Default for PricingTab {
    fn default() -> Self {
        Self {
            attrs: Attributes::new(),
            plan_name: DEFAULT_PLAN_NAME.to_string(),
            price: DEFAULT_PRICE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            features: Vec::new(),
            popular: false,
            mounted: false,
            last_error: None,
        }
    }
}

impl Component for PricingTab {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        Self::OBSERVED
    }

    fn style_scope(&self) -> StyleScope {
        StyleScope::Isolated
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<Redraw, AttrError> {
        if !Self::OBSERVED.contains(&name) {
            return Err(AttrError::UnrecognizedAttribute(name.to_string()));
        }
        if self.attrs.get(name) == Some(value) {
            return Ok(Redraw::Skip);
        }

        match name {
            "plan-name" => self.plan_name = attrs::non_empty_or(value, DEFAULT_PLAN_NAME),
            "price" => self.price = attrs::non_empty_or(value, DEFAULT_PRICE),
            "description" => self.description = attrs::non_empty_or(value, DEFAULT_DESCRIPTION),
            "features" => match attrs::parse_features(value) {
                Ok(features) => self.features = features,
                // Malformed JSON renders an empty checklist
                Err(err) => {
                    self.features.clear();
                    self.last_error = Some(format!("pricing-tab: {err}"));
                }
            },
            "popular" => self.popular = true,
            _ => {}
        }
        self.attrs.set(name, value);
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
            "plan-name" => self.plan_name = DEFAULT_PLAN_NAME.to_string(),
            "price" => self.price = DEFAULT_PRICE.to_string(),
            "description" => self.description = DEFAULT_DESCRIPTION.to_string(),
            "features" => self.features.clear(),
            "popular" => self.popular = false,
            _ => {}
        }
        Ok(Redraw::Needed)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    fn mount(&mut self, _ctx: &MountContext) {
        self.mounted = true;
    }

    fn unmount(&mut self) {
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        // Detached cards produce no output
        if !self.mounted {
            return;
        }
        let palette = CardPalette::for_popular(self.popular);
        let mut lines = card::header_lines(&self.plan_name, &self.price, &self.description, palette);
        lines.extend(card::checklist_lines(&self.features, palette));

        frame.render_widget(
            Paragraph::new(lines).block(card::card_block(palette, None)),
            area,
        );
    }
}
