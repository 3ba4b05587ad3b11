//! Interactive pricing card widget
//!
//! Superset of the simple card: adds a popular badge, a call-to-action
//! control with a loading spinner, and a payment notification emitted on
//! activation. The card only announces intent; whoever listens starts the
//! actual checkout and drives the loading state back to idle.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::components::card;
use crate::ui::symbols::{card as card_symbols, cta};
use crate::ui::theme::CardPalette;
use crate::ui::widgets::pricing_tab::{DEFAULT_DESCRIPTION, DEFAULT_PLAN_NAME, DEFAULT_PRICE};
use crate::widget::{
    AttrError, Attributes, Component, MountContext, NotificationBus, PaymentIntent, Redraw,
    StyleScope, attrs,
};

/// Rendered state of the call-to-action control.
///
/// Kept separately from the rest of the configuration so the loading
/// setter can update the control in place without a full re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaState {
    /// Show the spinner instead of the label
    pub spinning: bool,
    /// Activation is ignored while disabled
    pub disabled: bool,
}

impl CtaState {
    const IDLE: Self = Self {
        spinning: false,
        disabled: false,
    };

    const LOADING: Self = Self {
        spinning: true,
        disabled: true,
    };
}

/// Pricing card with a subscribe control.
#[derive(Debug, Clone)]
pub struct PricingCard {
    attrs: Attributes,
    plan_name: String,
    price: String,
    description: String,
    features: Vec<String>,
    popular: bool,
    price_id: Option<String>,
    cta: CtaState,
    mounted: bool,
    bus: Option<NotificationBus>,
    last_error: Option<String>,
}

impl PricingCard {
    /// Fixed registration tag
    pub const TAG: &'static str = "pricing-card";

    const OBSERVED: &'static [&'static str] = &[
        "plan-name",
        "price",
        "description",
        "features",
        "popular",
        "price-id",
        "loading",
    ];

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

    pub fn price_id(&self) -> Option<&str> {
        self.price_id.as_deref()
    }

    /// Current state of the call-to-action control
    pub fn cta(&self) -> CtaState {
        self.cta
    }

    /// Whether the card is in its loading state
    pub fn loading(&self) -> bool {
        self.cta.spinning
    }

    /// Toggle the loading state.
    ///
    /// Mirrors the `loading` presence attribute, then swaps only the
    /// call-to-action content and disabled flag in place. This is the one
    /// mutation outside the attribute-driven re-render path: replacing
    /// the whole card mid-interaction would be disruptive, so the header
    /// and checklist are deliberately left alone.
    pub fn set_loading(&mut self, loading: bool) {
        if loading {
            self.attrs.set("loading", "");
            self.cta = CtaState::LOADING;
        } else {
            self.attrs.remove("loading");
            self.cta = CtaState::IDLE;
        }
    }

    /// Trigger the call-to-action.
    ///
    /// Emits exactly one payment notification carrying the `price-id`
    /// attribute onto the bus captured at mount. A disabled control (or an
    /// unmounted card) ignores the activation.
    pub fn activate(&self) {
        if self.cta.disabled || !self.mounted {
            return;
        }
        if let Some(bus) = &self.bus {
            bus.emit(PaymentIntent::new(self.price_id.clone()));
        }
    }

    /// Take the diagnostic recorded by the last malformed `features` value
    pub fn take_diagnostic(&mut self) -> Option<String> {
        self.last_error.take()
    }

    fn cta_line(&self) -> Line<'static> {
        if self.cta.spinning {
            Line::from(Span::styled(
                format!(" {} {} ", cta::SPINNER, cta::LOADING_LABEL),
                Style::default().fg(Color::Black).bg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::styled(
                format!(" {} ", cta::LABEL),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}

impl Default for PricingCard {
    fn default() -> Self {
        Self {
            attrs: Attributes::new(),
            plan_name: DEFAULT_PLAN_NAME.to_string(),
            price: DEFAULT_PRICE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            features: Vec::new(),
            popular: false,
            price_id: None,
            cta: CtaState::IDLE,
            mounted: false,
            bus: None,
            last_error: None,
        }
    }
}

impl Component for PricingCard {
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
                Err(err) => {
                    self.features.clear();
                    self.last_error = Some(format!("pricing-card: {err}"));
                }
            },
            "popular" => self.popular = true,
            "price-id" => self.price_id = Some(value.to_string()),
            "loading" => {
                // Property-mirrored: route through the setter so the
                // attribute and the control stay in sync
                self.set_loading(true);
                return Ok(Redraw::Needed);
            }
            _ => {}
        }
        self.attrs.set(name, value);
        Ok(Redraw::Needed)
    }

    fn remove_attribute(&mut self, name: &str) -> Result<Redraw, AttrError> {
        if !Self::OBSERVED.contains(&name) {
            return Err(AttrError::UnrecognizedAttribute(name.to_string()));
        }
        if name == "loading" {
            if !self.attrs.is_present("loading") {
                return Ok(Redraw::Skip);
            }
            self.set_loading(false);
            return Ok(Redraw::Needed);
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
            "price-id" => self.price_id = None,
            _ => {}
        }
        Ok(Redraw::Needed)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    fn mount(&mut self, ctx: &MountContext) {
        self.bus = Some(ctx.bus.clone());
        self.mounted = true;
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.bus = None;
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
        let badge = self.popular.then_some(card_symbols::POPULAR_BADGE);

        let mut lines = card::header_lines(&self.plan_name, &self.price, &self.description, palette);
        lines.extend(card::checklist_lines(&self.features, palette));
        lines.push(Line::from(""));
        lines.push(self.cta_line());

        frame.render_widget(
            Paragraph::new(lines).block(card::card_block(palette, badge)),
            area,
        );
    }
}
