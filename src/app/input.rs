//! Key event handling

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{App, Focus};
use crate::keys;
use crate::widget::{AttrError, Component, Redraw};

/// Feature list themes cycled by the theme key
const THEMES: &[&str] = &["default", "blue", "purple", "orange"];

impl App {
    /// Handle a key press
    pub fn on_key_event(&mut self, key: KeyEvent) {
        let result = self.dispatch_key(key);
        if let Err(err) = result {
            self.banner = Some(crate::ui::components::Banner::error(err.to_string()));
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Result<(), AttrError> {
        if key.code == keys::QUIT || key.code == KeyCode::Esc {
            self.quit();
        } else if key.code == keys::FOCUS_NEXT {
            self.focus = self.focus.next();
        } else if key.code == keys::ACTIVATE {
            if self.focus == Focus::PricingCard {
                self.pricing_card.activate();
            }
        } else if key.code == keys::TOGGLE_POPULAR {
            self.toggle_popular()?;
        } else if key.code == keys::TOGGLE_ANIMATION {
            let enabled = self.feature_list.animation_enabled();
            let value = if enabled { "false" } else { "true" };
            self.feature_list.set_attribute("animation", value)?;
        } else if key.code == keys::CYCLE_THEME {
            self.cycle_theme()?;
        } else if key.code == keys::REPLAY_REVEAL {
            self.feature_list.reschedule_from(Instant::now());
        }
        Ok(())
    }

    /// Toggle the `popular` presence attribute on the focused card
    fn toggle_popular(&mut self) -> Result<Redraw, AttrError> {
        match self.focus {
            Focus::PricingTab => {
                if self.pricing_tab.is_popular() {
                    self.pricing_tab.remove_attribute("popular")
                } else {
                    self.pricing_tab.set_attribute("popular", "")
                }
            }
            Focus::PricingCard => {
                if self.pricing_card.is_popular() {
                    self.pricing_card.remove_attribute("popular")
                } else {
                    self.pricing_card.set_attribute("popular", "")
                }
            }
            Focus::FeatureList => Ok(Redraw::Skip),
        }
    }

    fn cycle_theme(&mut self) -> Result<(), AttrError> {
        let current = self.feature_list.theme().to_string();
        let index = THEMES.iter().position(|theme| **theme == current);
        let next = THEMES[(index.unwrap_or(0) + 1) % THEMES.len()];
        self.feature_list.set_attribute("theme", next)?;
        Ok(())
    }
}
