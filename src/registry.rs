//! Process-wide component registry
//!
//! Widgets register under a fixed tag name the first time the crate is
//! used; creating a widget by tag goes through the factory stored here.
//! Registration is lazy and guarded: defining a tag that already exists
//! is a no-op, for every widget alike.

use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock};

use crate::ui::widgets::{FeatureList, PricingCard, PricingTab};
use crate::widget::Component;

/// Factory producing a fresh widget with default configuration
pub type ComponentFactory = fn() -> Box<dyn Component>;

static REGISTRY: OnceLock<Mutex<BTreeMap<&'static str, ComponentFactory>>> = OnceLock::new();

fn registry() -> &'static Mutex<BTreeMap<&'static str, ComponentFactory>> {
    REGISTRY.get_or_init(|| Mutex::new(BTreeMap::new()))
}

fn lock() -> std::sync::MutexGuard<'static, BTreeMap<&'static str, ComponentFactory>> {
    registry()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register `factory` under `tag`.
///
/// Returns `true` when the tag was free. A tag that is already taken is
/// left untouched and the call reports `false`.
pub fn define(tag: &'static str, factory: ComponentFactory) -> bool {
    let mut map = lock();
    if map.contains_key(tag) {
        return false;
    }
    map.insert(tag, factory);
    true
}

/// Whether `tag` has been registered
pub fn is_defined(tag: &str) -> bool {
    lock().contains_key(tag)
}

/// Instantiate the widget registered under `tag`
pub fn create(tag: &str) -> Option<Box<dyn Component>> {
    let factory = *lock().get(tag)?;
    Some(factory())
}

/// Tags currently registered, in lexical order
pub fn defined_tags() -> Vec<&'static str> {
    lock().keys().copied().collect()
}

/// Register the built-in widgets under their fixed tag names.
///
/// Safe to call more than once; later calls are no-ops.
pub fn install_builtin() {
    define(FeatureList::TAG, || Box::new(FeatureList::new()));
    define(PricingTab::TAG, || Box::new(PricingTab::new()));
    define(PricingCard::TAG, || Box::new(PricingCard::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_builtin_registers_all_tags() {
        install_builtin();
        assert!(is_defined("feature-list"));
        assert!(is_defined("pricing-tab"));
        assert!(is_defined("pricing-card"));
    }

    #[test]
    fn test_double_define_is_a_noop() {
        install_builtin();
        assert!(!define(FeatureList::TAG, || Box::new(PricingTab::new())));
        // The original factory is still in place
        let widget = create("feature-list").unwrap();
        assert_eq!(widget.tag(), "feature-list");
    }

    #[test]
    fn test_define_fresh_tag() {
        assert!(define("test-only-tag", || Box::new(FeatureList::new())));
        assert!(!define("test-only-tag", || Box::new(FeatureList::new())));
    }

    #[test]
    fn test_create_unknown_tag() {
        assert!(create("no-such-widget").is_none());
    }

    #[test]
    fn test_created_widgets_have_their_tag() {
        install_builtin();
        for tag in ["feature-list", "pricing-tab", "pricing-card"] {
            let widget = create(tag).unwrap();
            assert_eq!(widget.tag(), tag);
            assert!(!widget.is_mounted());
        }
    }
}
