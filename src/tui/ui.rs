//! UI rendering helpers for TUI
//!
//! Draws the document state kept by `MemoryDocument`: the story row, the
//! player overlay on top of it and the debug overlay in the top-right corner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::current_theme;
use crate::document::{CardView, DebugOverlayNode, PlayerView, RowView};
use crate::row::placeholder_text;

/// Width of one card in the row, borders included.
pub const CARD_WIDTH: u16 = 24;

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Index of the first card to draw so that `selected` stays visible.
pub fn first_visible(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    selected.saturating_sub(visible - 1)
}

/// Render the story row of a container.
///
/// A container that was never rendered shows nothing.
pub fn render_row(frame: &mut Frame, area: Rect, view: Option<&RowView>, selected: usize) {
    let theme = current_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Stories ")
        .border_style(theme.text_secondary_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = view else {
        return;
    };

    let RowView::Cards(cards) = view else {
        let text = placeholder_text(view).unwrap_or_default();
        let placeholder = Paragraph::new(text)
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    let visible = usize::from((inner.width / CARD_WIDTH).max(1));
    let start = first_visible(selected, visible);
    let shown: Vec<(usize, &CardView)> = cards.iter().enumerate().skip(start).take(visible).collect();

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(CARD_WIDTH); shown.len()])
        .split(inner);

    for ((index, card), slot) in shown.into_iter().zip(slots.iter()) {
        render_card(frame, *slot, card, index == selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, selected: bool) {
    let theme = current_theme();
    let border = if selected {
        theme.accent_bold_style()
    } else {
        theme.text_secondary_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" #{} ", card.id));
    let lines = vec![
        Line::from(Span::styled(card.title.clone(), theme.text_style())),
        Line::from(Span::styled(
            card.category.clone(),
            theme.text_secondary_style(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Lines shown inside the player overlay.
pub fn player_lines(view: &PlayerView) -> Vec<Line<'static>> {
    let theme = current_theme();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("[{}] {}", view.page_kind, view.media_url),
            theme.text_style(),
        )),
        Line::from(""),
    ];
    if let Some(caption) = &view.caption {
        lines.push(Line::from(Span::styled(caption.clone(), theme.text_style())));
        lines.push(Line::from(""));
    }

    let mut controls = Vec::new();
    if view.show_previous {
        controls.push(Span::styled("← prev  ", theme.accent_style()));
    }
    controls.push(Span::styled(
        view.progress.clone(),
        theme.accent_bold_style(),
    ));
    if view.show_next {
        controls.push(Span::styled("  next →", theme.accent_style()));
    }
    lines.push(Line::from(controls).alignment(Alignment::Center));
    lines
}

/// Render the fullscreen player overlay.
pub fn render_player(frame: &mut Frame, area: Rect, view: &PlayerView) {
    let theme = current_theme();
    let overlay = centered_rect(80, 70, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.title))
        .title_bottom(Line::from(" Esc: close ").alignment(Alignment::Right))
        .border_style(theme.accent_style());
    let paragraph = Paragraph::new(player_lines(view))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, overlay);
}

/// Render the debug overlay in the top-right corner.
pub fn render_debug_overlay(frame: &mut Frame, area: Rect, node: &DebugOverlayNode) {
    let theme = current_theme();
    let width = 32u16.min(area.width);
    let height = (node.lines.len() as u16 + 2).min(area.height);
    let corner = Rect::new(area.right().saturating_sub(width), area.y, width, height);
    frame.render_widget(Clear, corner);

    let lines: Vec<Line> = node
        .lines
        .iter()
        .map(|line| Line::from(line.clone()))
        .collect();
    let paragraph = Paragraph::new(lines)
        .style(theme.debug_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", node.title)),
        );
    frame.render_widget(paragraph, corner);
}

/// Render a centered footer from a pre-formatted text string.
pub fn render_footer_text(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    let footer = Paragraph::new(text.to_string())
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
