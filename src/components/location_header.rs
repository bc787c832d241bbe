use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

/// Place name with the date underneath
pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    /// `Paris, FR`
    pub place: &'a str,
    /// Pre-formatted date line
    pub date: &'a str,
}

/// Rows used by the header: place + date.
pub const HEADER_HEIGHT: u16 = 2;

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Place
            Constraint::Length(1), // Date
        ])
        .split(area);

        let place = Line::from(vec![Span::styled(
            props.place.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(place), chunks[0]);

        let date = Line::from(vec![Span::styled(
            props.date.to_string(),
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(date), chunks[1]);
    }
}
