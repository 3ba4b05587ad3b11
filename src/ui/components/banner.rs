//! Feedback banner for the demo application
//!
//! Shows the last payment intent, checkout progress, or a widget
//! diagnostic near the bottom of the screen for a few seconds.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Kind of banner (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// A payment intent was announced (green)
    Payment,
    /// Informational message (cyan)
    Info,
    /// A widget reported a diagnostic (red)
    Error,
}

/// A transient message displayed above the status bar
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub kind: BannerKind,
    created_at: Instant,
}

impl Banner {
    pub fn new(message: impl Into<String>, kind: BannerKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn payment(message: impl Into<String>) -> Self {
        Self::new(message, BannerKind::Payment)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, BannerKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, BannerKind::Error)
    }

    /// Banners disappear after 5 seconds
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= 5
    }
}

/// Build a styled line for the banner
pub fn build_banner_line(banner: &Banner) -> Line<'static> {
    let (label, label_bg, text_fg) = match banner.kind {
        BannerKind::Payment => (" Payment: ", Color::Green, Color::Green),
        BannerKind::Info => (" Info: ", Color::Cyan, Color::Cyan),
        BannerKind::Error => (" Error: ", Color::Red, Color::Red),
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(label_bg)),
        Span::styled(
            format!(" {} ", banner.message),
            Style::default().fg(text_fg),
        ),
    ])
}

/// Render the banner just above the status bar
pub fn render_banner(frame: &mut Frame, banner: &Banner) {
    let area = frame.area();
    let banner_area = Rect {
        x: area.x + 2,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 1,
    };

    frame.render_widget(Paragraph::new(build_banner_line(banner)), banner_area);
}
