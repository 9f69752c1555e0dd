use ratatui::style::{Color, Modifier, Style};

/// Consistent theme for the finder
pub struct Theme {
    pub title: Style,
    pub budget: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub store: Style,
    pub item: Style,
    pub price: Style,
    pub location: Style,
    pub focused: Style,
    pub muted: Style,
    pub total: Style,
    pub error: Style,
    pub modal_border: Style,
    pub help_bar: Style,
    pub key: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            budget: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default()
                .fg(Color::Gray)
                .bg(Color::DarkGray),
            store: Style::default()
                .add_modifier(Modifier::BOLD),
            item: Style::default()
                .fg(Color::White),
            price: Style::default()
                .fg(Color::DarkGray),
            location: Style::default()
                .fg(Color::Cyan),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            muted: Style::default()
                .fg(Color::DarkGray),
            total: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            modal_border: Style::default()
                .fg(Color::Cyan),
            help_bar: Style::default()
                .bg(Color::DarkGray),
            key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    const SPINNER: [&'static str; 4] = ["⟳", "⟲", "↻", "↺"];

    /// Spinner glyph for an animation frame
    pub fn spinner(frame: usize) -> &'static str {
        Self::SPINNER[frame % Self::SPINNER.len()]
    }

    /// Label on the per-selection location button
    pub fn location_button(shown: bool) -> &'static str {
        if shown {
            "Hide"
        } else {
            "Location"
        }
    }
}
