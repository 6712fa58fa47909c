use super::picker::{PickerItem, PickerState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_POPUP_WIDTH: u16 = 60;
const MIN_POPUP_HEIGHT: u16 = 7;

/// Truncates `text` to at most `width` columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        result.push(c);
        used += char_width;
    }
    result.push('…');
    result
}

/// Popup area centered in `area`, sized for `rows` list entries.
pub fn popup_rect(area: Rect, rows: usize) -> Rect {
    let width = area.width.min(MAX_POPUP_WIDTH);
    // borders (2) + list + status (1) + hints (1)
    let ideal_height = (rows as u16).saturating_add(4);
    let height = ideal_height.max(MIN_POPUP_HEIGHT);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub fn draw(frame: &mut Frame, state: &PickerState, host: &str) {
    let popup_area = popup_rect(frame.area(), state.items.len());
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Apps on {} ", host));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let label_width = (chunks[0].width as usize).saturating_sub(2);
    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|item| {
            let label = truncate_to_width(item.label(&state.fallback_label), label_width);
            let style = match item {
                PickerItem::Default => Style::default().fg(Color::Gray),
                PickerItem::App(_) => Style::default(),
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(Some(state.selected_idx));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let status_style = if state.status.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = truncate_to_width(&state.status.text(), chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status, status_style))),
        chunks[1],
    );

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Launch  "),
        Span::styled("[d]", Style::default().fg(Color::Yellow)),
        Span::raw(" Default  "),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]));
    frame.render_widget(hints, chunks[2]);
}

#[cfg(test)]
#[path = "tests/ui_tests.rs"]
mod tests;
