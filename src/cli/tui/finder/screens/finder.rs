//! Main finder screen: budget controls, results and totals

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::cli::tui::finder::modal;
use crate::cli::tui::finder::state::FinderState;
use crate::cli::tui::finder::theme::Theme;
use crate::engine::Selection;

/// Render the finder screen and any open modal
pub fn render(frame: &mut Frame, state: &FinderState, theme: &Theme, currency: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Title
            Constraint::Length(1),      // "Your budget:"
            Constraint::Length(1),      // - R200 +
            Constraint::Length(1),      // Spacing
            Constraint::Length(1),      // Find Meals
            Constraint::Length(1),      // Spacing
            Constraint::Min(0),         // Results
            Constraint::Length(if state.summary().is_some() { 3 } else { 0 }),
            Constraint::Length(1),      // Help bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled("Fast Food Finder", theme.title)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_budget(frame, chunks[1], chunks[2], state, theme, currency);
    render_trigger(frame, chunks[4], state, theme);
    render_results(frame, chunks[6], state, theme, currency);
    render_summary(frame, chunks[7], state, theme, currency);
    render_help_bar(frame, chunks[8], theme);

    if state.show_budget_prompt {
        modal::render_budget_prompt(
            frame,
            frame.area(),
            theme,
            currency,
            state.budget_input.value(),
            state.budget_input.visual_cursor(),
        );
    }

    if let Some(notice) = &state.notice {
        modal::render_notice(frame, frame.area(), theme, notice);
    }
}

fn render_budget(
    frame: &mut Frame,
    label_area: Rect,
    controls_area: Rect,
    state: &FinderState,
    theme: &Theme,
    currency: &str,
) {
    let label = Paragraph::new("Your budget:").alignment(Alignment::Center);
    frame.render_widget(label, label_area);

    let controls = Line::from(vec![
        Span::styled("[ - ]", theme.key),
        Span::raw("    "),
        Span::styled(format!("{currency}{}", state.budget), theme.budget),
        Span::raw("    "),
        Span::styled("[ + ]", theme.key),
    ]);
    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Center), controls_area);
}

fn render_trigger(frame: &mut Frame, area: Rect, state: &FinderState, theme: &Theme) {
    let (icon, style) = if state.spinning {
        (Theme::spinner(state.spinner_frame), theme.button_disabled)
    } else {
        (Theme::spinner(0), theme.button)
    };

    let button = Paragraph::new(format!(" {} {} ", icon, state.trigger_label()))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(button, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &FinderState, theme: &Theme, currency: &str) {
    if state.show_idle_hint() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Set your budget and click \"Find Meals\" to see options",
            theme.muted,
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .visible_selections()
        .iter()
        .enumerate()
        .map(|(idx, selection)| {
            ListItem::new(card_lines(
                selection,
                idx == state.focused,
                state.location_visible(idx),
                theme,
                currency,
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::NONE));
    let mut list_state = ListState::default().with_selected(Some(state.focused));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Lines for one result card
pub fn card_lines<'a>(
    selection: &'a Selection,
    focused: bool,
    show_location: bool,
    theme: &Theme,
    currency: &str,
) -> Vec<Line<'a>> {
    let marker = if focused { "▶ " } else { "  " };
    let button_style = if focused { theme.focused } else { theme.muted };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, theme.focused),
            Span::styled(selection.store.as_str(), theme.store),
            Span::raw("  "),
            Span::styled(format!("[📍 {}]", Theme::location_button(show_location)), button_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(selection.item.as_str(), theme.item),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{currency}{}", selection.price), theme.price),
            Span::raw("  "),
            Span::styled(selection.image_ref.as_str(), theme.muted),
        ]),
    ];

    if show_location {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("📍 {}", selection.location), theme.location),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

fn render_summary(frame: &mut Frame, area: Rect, state: &FinderState, theme: &Theme, currency: &str) {
    let Some(summary) = state.summary() else {
        return;
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(summary.describe(currency), theme.total)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.muted));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help_text = Line::from(vec![
        Span::styled("+/-", theme.key),
        Span::raw(" Budget  "),
        Span::styled("b", theme.key),
        Span::raw(" Enter amount  "),
        Span::styled("Enter", theme.key),
        Span::raw(" Find Meals  "),
        Span::styled("↑↓", theme.key),
        Span::raw(" Select  "),
        Span::styled("l", theme.key),
        Span::raw(" Location  "),
        Span::styled("q", theme.key),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(theme.help_bar);
    frame.render_widget(help, area);
}
