//! Application state and widget lifecycle

use std::time::{Duration, Instant};

use crate::registry;
use crate::ui::components::Banner;
use crate::ui::widgets::{FeatureList, PricingCard, PricingTab};
use crate::widget::{ChildNode, Component, MountContext, NotificationBus};

/// How long the simulated checkout keeps the card in its loading state
const CHECKOUT_DURATION: Duration = Duration::from_millis(1500);

/// Widget that receives card-level key commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FeatureList,
    PricingTab,
    PricingCard,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::FeatureList => Self::PricingTab,
            Self::PricingTab => Self::PricingCard,
            Self::PricingCard => Self::FeatureList,
        }
    }

    /// Tag name of the focused widget
    pub fn tag(self) -> &'static str {
        match self {
            Self::FeatureList => FeatureList::TAG,
            Self::PricingTab => PricingTab::TAG,
            Self::PricingCard => PricingCard::TAG,
        }
    }
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Widget receiving key commands
    pub focus: Focus,
    /// Feature list (features derived from child nodes)
    pub feature_list: FeatureList,
    /// Simple pricing card
    pub pricing_tab: PricingTab,
    /// Interactive pricing card
    pub pricing_card: PricingCard,
    /// Bus the interactive card emits payment intents onto
    pub bus: NotificationBus,
    /// Transient feedback banner
    pub banner: Option<Banner>,
    /// Simulated checkout in flight since this instant
    pub(crate) checkout_started: Option<Instant>,
}

impl App {
    /// Construct the demo: register tags, configure, and mount all widgets.
    pub fn new() -> color_eyre::Result<Self> {
        registry::install_builtin();

        let bus = NotificationBus::new();

        // No `features` attribute here: items come from child nodes once,
        // at mount
        let mut feature_list = FeatureList::new();
        feature_list.set_attribute("theme", "blue")?;
        let children = vec![
            ChildNode::new("feature", "Unlimited projects"),
            ChildNode::new("feature", "Priority support"),
            ChildNode::new("feature", "Custom domains"),
            ChildNode::new("feature", "Usage analytics"),
        ];
        feature_list.mount(&MountContext::with_children(bus.clone(), children));

        let mut pricing_tab = PricingTab::new();
        pricing_tab.set_attribute(
            "features",
            r#"["1 project", "Community support", "1GB storage"]"#,
        )?;
        pricing_tab.mount(&MountContext::new(bus.clone()));

        let mut pricing_card = PricingCard::new();
        pricing_card.set_attribute("plan-name", "Pro Plan")?;
        pricing_card.set_attribute("price", "59")?;
        pricing_card.set_attribute("description", "For growing teams")?;
        pricing_card.set_attribute(
            "features",
            r#"["Unlimited projects", "Priority support", "50GB storage"]"#,
        )?;
        pricing_card.set_attribute("popular", "")?;
        pricing_card.set_attribute("price-id", "price_pro_monthly")?;
        pricing_card.mount(&MountContext::new(bus.clone()));

        Ok(Self {
            running: true,
            focus: Focus::default(),
            feature_list,
            pricing_tab,
            pricing_card,
            bus,
            banner: None,
            checkout_started: None,
        })
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Periodic work: observe payment intents, finish the simulated
    /// checkout, and surface widget diagnostics.
    pub fn on_tick(&mut self) {
        for intent in self.bus.drain() {
            let payload = serde_json::to_string(&intent).unwrap_or_default();
            self.banner = Some(Banner::payment(payload));
            // Listener intercepts the intent and drives the state machine
            self.pricing_card.set_loading(true);
            self.checkout_started = Some(Instant::now());
        }

        if let Some(started) = self.checkout_started {
            if started.elapsed() >= CHECKOUT_DURATION {
                self.pricing_card.set_loading(false);
                self.checkout_started = None;
                self.banner = Some(Banner::info("Checkout would start here"));
            }
        }

        self.surface_diagnostics();

        if self.banner.as_ref().is_some_and(Banner::is_expired) {
            self.banner = None;
        }
    }

    fn surface_diagnostics(&mut self) {
        let diagnostic = self
            .feature_list
            .take_diagnostic()
            .or_else(|| self.pricing_tab.take_diagnostic())
            .or_else(|| self.pricing_card.take_diagnostic());
        if let Some(message) = diagnostic {
            self.banner = Some(Banner::error(message));
        }
    }
}
