//! Prediction result screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::styles::ClinicTheme;

/// Result screen state.
pub struct ResultState {
    pub label: String,
    pub positive: bool,
    /// Display message for a failed log append, if any.
    pub log_error: Option<String>,
}

/// Render the prediction result with its save notice.
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Label
            Constraint::Length(3), // Save notice
            Constraint::Min(0),
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Prediction Result", ClinicTheme::title()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(header, chunks[0]);

    let label_style = if state.positive {
        ClinicTheme::danger()
    } else {
        ClinicTheme::success()
    };
    let label = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Prediction: "),
            Span::styled(state.label.clone(), label_style),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(label, chunks[1]);

    let notice = match &state.log_error {
        None => Line::from(vec![Span::styled(
            "  Input and prediction saved.",
            ClinicTheme::info(),
        )]),
        Some(err) => Line::from(vec![
            Span::styled("  ! Prediction not saved: ", ClinicTheme::danger()),
            Span::styled(err.clone(), ClinicTheme::text_secondary()),
        ]),
    };
    f.render_widget(Paragraph::new(notice), chunks[2]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[N] ", ClinicTheme::key_hint()),
        Span::styled("New Prediction ", ClinicTheme::key_desc()),
        Span::styled("[Esc] ", ClinicTheme::key_hint()),
        Span::styled("Disease Select ", ClinicTheme::key_desc()),
        Span::styled("[Q] ", ClinicTheme::key_hint()),
        Span::styled("Quit", ClinicTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(footer, chunks[4]);
}
