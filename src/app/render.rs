//! Rendering logic for the demo application

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::keys::{self, KeyHint};
use crate::ui::components::banner::render_banner;
use crate::widget::Component;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());
        let columns = Layout::horizontal([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

        // The feature list draws no border of its own; wrap it in a block
        // so the three columns read the same
        let list_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.column_border(Focus::FeatureList))
            .title(" feature-list ");
        let list_area = list_block.inner(columns[0]);
        frame.render_widget(list_block, columns[0]);
        self.feature_list.render(frame, list_area);

        self.pricing_tab.render(frame, columns[1]);
        self.pricing_card.render(frame, columns[2]);

        frame.render_widget(
            Paragraph::new(build_status_bar(keys::HINTS, self.focus)),
            chunks[1],
        );

        if let Some(banner) = self.banner.as_ref().filter(|banner| !banner.is_expired()) {
            render_banner(frame, banner);
        }
    }

    fn column_border(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

/// Build the status bar line: focus indicator plus key hints
fn build_status_bar(hints: &[KeyHint], focus: Focus) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" focus: {} ", focus.tag()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}
