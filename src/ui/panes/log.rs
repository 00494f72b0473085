//! Rolling step log pane

use crate::playback::PlaybackLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the log pane
///
/// `scroll_offset` counts lines from the bottom, so 0 keeps the newest entry
/// in view as the log grows.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &PlaybackLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Log ({}/{}) ", log.len(), log.capacity()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if log.is_empty() {
        let paragraph = Paragraph::new("(nothing revealed yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let latest = log.latest().map(|e| e.index);
    let all_items: Vec<ListItem> = log
        .entries()
        .map(|entry| {
            let is_latest = Some(entry.index) == latest;
            let text_style = if is_latest {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", entry.index),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    format!("{:<10}", entry.kind),
                    Style::default().fg(DEFAULT_THEME.kind),
                ),
                Span::styled(entry.description.clone(), text_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = total_items.saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);
    let skip = max_scroll - *scroll_offset;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(skip)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
