//! Disease selection screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::Disease;
use crate::tui::styles::ClinicTheme;

/// Render the disease selector list.
pub fn render_select(f: &mut Frame, area: Rect, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Chronic Disease Predictor", ClinicTheme::title()),
        Span::styled(" │ Select Disease", ClinicTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(header, chunks[0]);

    let rows: Vec<Constraint> = Disease::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let list = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows)
        .margin(1)
        .split(chunks[1]);

    for (i, disease) in Disease::ALL.iter().enumerate() {
        let is_selected = i == selected;
        let (border, title) = if is_selected {
            (ClinicTheme::border_focused(), ClinicTheme::focused())
        } else {
            (ClinicTheme::border(), ClinicTheme::text_secondary())
        };

        let item = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{disease} Disease Prediction"), title),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(item, list[i]);
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[↑↓] ", ClinicTheme::key_hint()),
        Span::styled("Navigate ", ClinicTheme::key_desc()),
        Span::styled("[Enter] ", ClinicTheme::key_hint()),
        Span::styled("Select ", ClinicTheme::key_desc()),
        Span::styled("[Q] ", ClinicTheme::key_hint()),
        Span::styled("Quit", ClinicTheme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );
    f.render_widget(footer, chunks[2]);
}
