//! Shared UI components
//!
//! - `card`: building blocks common to both pricing card variants
//! - `banner`: transient feedback banner used by the demo application

pub mod banner;
pub mod card;

pub use banner::{Banner, BannerKind};
