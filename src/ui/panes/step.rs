//! Current step pane
//!
//! Shows the step header (index, total, kind), its description, the
//! rendered snapshot, the named pointers and the answer so far. Before the
//! first step is revealed it shows the algorithm title and a hint instead.

use crate::algorithms::AlgorithmSpec;
use crate::trace::{Highlight, StepView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn pointer_line(view: &StepView) -> Option<Line<'static>> {
    if view.pointers.is_empty() {
        return None;
    }
    let mut spans = vec![Span::styled(
        "pointers ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for (role, position) in view.pointers.iter() {
        let value = position.map_or("-".to_string(), |p| p.to_string());
        spans.push(Span::styled(
            format!("{}={} ", role, value),
            Style::default().fg(DEFAULT_THEME.pointer),
        ));
    }
    Some(Line::from(spans))
}

fn highlight_line(highlights: &[Highlight]) -> Option<Line<'static>> {
    if highlights.is_empty() {
        return None;
    }
    let items: Vec<String> = highlights
        .iter()
        .map(|h| match h {
            Highlight::Index(i) => format!("[{}]", i),
            Highlight::Cell(r, c) => format!("({},{})", r, c),
            Highlight::Node(n) => format!("#{}", n),
            Highlight::Edge(a, b) => format!("{}->{}", a, b),
        })
        .collect();
    Some(Line::from(vec![
        Span::styled("focus    ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(items.join(" "), Style::default().fg(DEFAULT_THEME.highlight)),
    ]))
}

/// Build the lines for a revealed step
pub fn step_lines(view: &StepView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Step {}/{} ", view.index, view.total),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", view.kind),
                Style::default().fg(DEFAULT_THEME.kind),
            ),
        ]),
        Line::from(Span::styled(
            view.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
    ];

    lines.extend(
        view.lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(DEFAULT_THEME.fg)))),
    );
    lines.push(Line::default());
    lines.extend(pointer_line(view));
    lines.extend(highlight_line(&view.highlights));
    lines.push(Line::from(vec![
        Span::styled("answer   ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            view.answer.clone(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn idle_lines(spec: &AlgorithmSpec, total: usize) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            spec.title,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {} steps recorded", spec.family, total),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press space to play or → to step.",
            Style::default().fg(DEFAULT_THEME.fg),
        )),
    ]
}

/// Render the step pane
pub fn render_step_pane(
    frame: &mut Frame,
    area: Rect,
    spec: &AlgorithmSpec,
    view: Option<&StepView>,
    total: usize,
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
        .title(format!(" {} ", spec.name))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let lines = match view {
        Some(view) => step_lines(view),
        None => idle_lines(spec, total),
    };

    // Clamp scroll so the last line can still reach the bottom border
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Pointers;

    fn view() -> StepView {
        StepView {
            index: 2,
            total: 5,
            kind: "expand",
            description: "Add 'b'".to_string(),
            pointers: Pointers::new().with("left", 0).with_opt("right", None),
            highlights: vec![Highlight::Index(1), Highlight::Edge(0, 1)],
            lines: vec!["char a b".to_string()],
            answer: "longest length 2".to_string(),
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_step_lines_show_everything_the_view_carries() {
        let lines: Vec<String> = step_lines(&view()).iter().map(text).collect();

        assert_eq!(lines[0], "Step 2/5 [expand]");
        assert_eq!(lines[1], "Add 'b'");
        assert!(lines.contains(&"char a b".to_string()));
        assert!(lines.contains(&"pointers left=0 right=- ".to_string()));
        assert!(lines.contains(&"focus    [1] 0->1".to_string()));
        assert_eq!(lines.last().unwrap(), "answer   longest length 2");
    }
}
