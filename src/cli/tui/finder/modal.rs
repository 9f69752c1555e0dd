//! Modal overlays: budget entry and notices

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::state::Notice;
use super::theme::Theme;

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the direct budget entry modal
pub fn render_budget_prompt(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    currency: &str,
    input_text: &str,
    cursor_position: usize,
) {
    let modal_area = centered_rect(50, 40, area);
    frame.render_widget(Clear, modal_area);

    let modal_block = Block::default()
        .title(" Set Budget ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);

    let inner_area = modal_block.inner(modal_area);
    frame.render_widget(modal_block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Instructions
            Constraint::Length(1),      // Spacing
            Constraint::Length(3),      // Input
            Constraint::Min(0),
            Constraint::Length(1),      // Help text
        ])
        .split(inner_area);

    frame.render_widget(Paragraph::new("Enter an amount to spend:"), chunks[0]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.muted);
    let input_inner = input_block.inner(chunks[2]);
    frame.render_widget(input_block, chunks[2]);

    // Cursor is counted in chars, slicing needs a byte offset
    let split = input_text
        .char_indices()
        .nth(cursor_position)
        .map_or(input_text.len(), |(i, _)| i);
    let line = Line::from(vec![
        Span::styled(currency.to_string(), theme.muted),
        Span::raw(&input_text[..split]),
        Span::styled("█", theme.item),
        Span::raw(&input_text[split..]),
    ]);
    frame.render_widget(Paragraph::new(line), input_inner);

    let help_text = Line::from(vec![
        Span::styled("[Enter]", theme.key),
        Span::raw(" Apply  "),
        Span::styled("[Esc]", theme.key),
        Span::raw(" Cancel"),
    ]);
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(theme.muted);
    frame.render_widget(help, chunks[4]);
}

/// Render a notice; any of Enter/Esc dismisses it
pub fn render_notice(frame: &mut Frame, area: Rect, theme: &Theme, notice: &Notice) {
    let modal_area = centered_rect(60, 30, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(format!(" {} ", notice.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.error);

    let text = vec![
        Line::from(""),
        Line::from(Span::raw(notice.message.as_str())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", theme.key),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal_area);
}
