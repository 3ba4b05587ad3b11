//! UI symbols (icons, labels, badges)

/// Icons used by feature rows
pub mod icons {
    /// Default feature icon when no `icon` attribute is set (✓)
    pub const CHECK: &str = "✓";
}

/// Call-to-action control of the interactive pricing card
pub mod cta {
    /// Label shown while idle
    pub const LABEL: &str = "Subscribe";
    /// Label shown next to the spinner while loading
    pub const LOADING_LABEL: &str = "Processing…";
    /// Spinner glyph shown while loading
    pub const SPINNER: char = '◐';
}

/// Static card labels
pub mod card {
    /// Heading above the feature checklist
    pub const INCLUDES: &str = "Includes:";
    /// Badge shown on popular cards
    pub const POPULAR_BADGE: &str = " POPULAR ";
    /// Currency prefix rendered before the price
    pub const CURRENCY: &str = "$";
}
