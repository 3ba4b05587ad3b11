//! Concrete widgets
//!
//! Three siblings, no data flow between them:
//! - [`FeatureList`]: themed list with staggered row reveal
//! - [`PricingTab`]: declarative pricing card, no interaction
//! - [`PricingCard`]: pricing card with a call-to-action and loading state

mod feature_list;
mod pricing_card;
mod pricing_tab;

pub use feature_list::FeatureList;
pub use pricing_card::{CtaState, PricingCard};
pub use pricing_tab::PricingTab;
