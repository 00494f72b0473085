//! Input pane: the committed input, or the editor while editing

use crate::algorithms::AlgorithmSpec;
use crate::ui::app::{EditField, EditState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn field_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = vec![Span::styled(format!("{:<7}", label), label_style)];
    if active {
        spans.push(Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .bg(DEFAULT_THEME.current_line_bg),
        ));
        spans.push(Span::styled(
            "█",
            Style::default().fg(DEFAULT_THEME.border_focused),
        ));
    } else {
        spans.push(Span::styled(
            value.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    Line::from(spans)
}

/// Render the input pane
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    spec: &AlgorithmSpec,
    committed: (&str, &str),
    editing: Option<&EditState>,
    error: Option<&str>,
) {
    let border_style = if editing.is_some() {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match editing {
        Some(_) => format!(" Input: {} ", spec.input_hint),
        None => " Input ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let (input, param, field) = match editing {
        Some(edit) => (edit.input.as_str(), edit.param.as_str(), Some(edit.field)),
        None => (committed.0, committed.1, None),
    };

    let mut lines = vec![field_line("input", input, field == Some(EditField::Input))];
    if let Some(hint) = spec.param_hint {
        let active = field == Some(EditField::Param);
        let mut line = field_line("param", param, active);
        if active {
            line.spans.push(Span::styled(
                format!("  {}", hint),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        lines.push(line);
    }
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
