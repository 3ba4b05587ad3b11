//! Component machinery shared by all widgets
//!
//! Widgets are configured through string attributes and rebuild their
//! rendered output in full on every draw. This module contains the pieces
//! that are independent of any concrete widget:
//! - `attrs`: attribute map and typed attribute parsing
//! - `events`: notification bus for events that cross widget boundaries
//! - `schedule`: cancellable reveal schedule for staggered animations

pub mod attrs;
pub mod events;
pub mod schedule;

pub use attrs::{AttrError, Attributes};
pub use events::{NotificationBus, PaymentIntent};
pub use schedule::RevealSchedule;

use ratatui::{Frame, layout::Rect};

/// Whether an attribute change requires the widget to be redrawn.
///
/// Setting an attribute to its current textual value is a no-op and
/// reports [`Redraw::Skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// The change was applied and the rendered output is stale
    Needed,
    /// The value was textually identical to the current one
    Skip,
}

/// How a widget's styles relate to the rest of the process.
///
/// The feature list shares one stylesheet with every other instance;
/// pricing cards carry their own palette and neither read from nor write
/// to the shared sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleScope {
    /// Styles live in the process-wide stylesheet, injected once
    Shared,
    /// Styles are private to the widget
    Isolated,
}

/// A child node of the host markup, available to widgets at mount time.
///
/// The feature list uses nodes tagged `feature` as a fallback source of
/// items when no `features` attribute is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildNode {
    pub tag: String,
    pub text: String,
}

impl ChildNode {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

/// Context handed to a widget when it is inserted into the tree.
#[derive(Debug, Clone, Default)]
pub struct MountContext {
    /// Child nodes of the host markup, in document order
    pub children: Vec<ChildNode>,
    /// Bus on which notification events become visible to ancestors
    pub bus: NotificationBus,
}

impl MountContext {
    pub fn new(bus: NotificationBus) -> Self {
        Self {
            children: Vec::new(),
            bus,
        }
    }

    pub fn with_children(bus: NotificationBus, children: Vec<ChildNode>) -> Self {
        Self { children, bus }
    }
}

/// A renderable, attribute-configured widget.
///
/// Replaces subclassing of a host element type with composition: each
/// widget owns its configuration, applies attribute changes through a
/// typed dispatch, and rebuilds its output in full whenever asked to
/// render. Attribute changes before [`Component::mount`] update the
/// configuration but produce no output.
pub trait Component {
    /// Fixed tag name the widget registers under
    fn tag(&self) -> &'static str;

    /// Attribute names the widget reacts to
    fn observed_attributes(&self) -> &'static [&'static str];

    /// Style scoping of the widget (shared sheet vs. private palette)
    fn style_scope(&self) -> StyleScope;

    /// Apply an attribute change.
    ///
    /// Unrecognized names are rejected with
    /// [`AttrError::UnrecognizedAttribute`]; setting an attribute to its
    /// current value reports [`Redraw::Skip`] without touching state.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<Redraw, AttrError>;

    /// Remove an attribute, reverting the option to its default.
    fn remove_attribute(&mut self, name: &str) -> Result<Redraw, AttrError>;

    /// Current raw value of an attribute, if set
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Called when the widget is inserted into the tree
    fn mount(&mut self, ctx: &MountContext);

    /// Called when the widget is removed from the tree
    fn unmount(&mut self);

    /// Whether the widget is currently in the tree
    fn is_mounted(&self) -> bool;

    /// Rebuild and draw the widget into `area`.
    ///
    /// Rendering is a pure function of the configuration at the instant
    /// of the call; no rendered output survives to the next call.
    fn render(&self, frame: &mut Frame, area: Rect);
}
