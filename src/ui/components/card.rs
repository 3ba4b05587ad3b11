//! Building blocks shared by the pricing card variants
//!
//! Both cards render a bordered block with a header (plan name, price,
//! description) followed by a feature checklist. The interactive variant
//! appends its call-to-action control after these lines.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::symbols::{card, icons};
use crate::ui::theme::CardPalette;

/// Bordered card block, with an optional badge in the top-right corner
pub fn card_block(palette: &CardPalette, badge: Option<&'static str>) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    if let Some(text) = badge {
        block = block.title(
            Line::from(Span::styled(
                text,
                Style::default().fg(Color::Black).bg(palette.border),
            ))
            .right_aligned(),
        );
    }
    block
}

/// Header lines: plan name, price with currency prefix, description
pub fn header_lines(
    plan_name: &str,
    price: &str,
    description: &str,
    palette: &CardPalette,
) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            plan_name.to_string(),
            Style::default().fg(palette.name).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{}{}", card::CURRENCY, price),
            Style::default().fg(palette.price).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(palette.description),
        )),
    ]
}

/// Checklist lines: "Includes:" heading plus one check row per feature
pub fn checklist_lines(features: &[String], palette: &CardPalette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            card::INCLUDES,
            Style::default().fg(palette.name).add_modifier(Modifier::BOLD),
        )),
    ];
    for feature in features {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", icons::CHECK),
                Style::default().fg(palette.check).add_modifier(Modifier::BOLD),
            ),
            Span::styled(feature.clone(), Style::default().fg(palette.feature)),
        ]));
    }
    lines
}
