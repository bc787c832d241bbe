use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::details_grid::GRID_HEIGHT;
use super::location_header::HEADER_HEIGHT;
use super::{Component, DetailsGrid, DetailsGridProps, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::sprites;
use crate::view::{Mode, Projection, ReportView};

/// Either the idle tagline or the current conditions
pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub projection: &'a Projection,
    pub date: &'a str,
}

/// Tallest FIGlet font in the stack (terminus).
const HERO_MAX: u16 = 6;
const ICON_WIDTH: u16 = 12;

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.projection.mode {
            Mode::Idle { tagline } => render_idle(frame, area, tagline),
            Mode::Report(view) => render_report(frame, area, view, props.date),
        }
    }
}

fn render_idle(frame: &mut Frame, area: Rect, tagline: &str) {
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let line = Line::from(vec![Span::styled(
        tagline.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )])
    .centered();
    frame.render_widget(Paragraph::new(line), row);
}

fn render_report(frame: &mut Frame, area: Rect, view: &ReportView, date: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Max(HERO_MAX),
        Constraint::Length(1), // min / max
        Constraint::Length(1), // description
        Constraint::Length(1),
        Constraint::Length(GRID_HEIGHT),
    ])
    .flex(Flex::Center)
    .split(area);

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            place: &view.place,
            date,
        },
    );

    render_hero(frame, chunks[2], view);

    let range = Line::from(vec![Span::styled(
        view.range.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )])
    .centered();
    frame.render_widget(Paragraph::new(range), chunks[3]);

    let description = Line::from(vec![Span::styled(
        view.description.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(description), chunks[4]);

    let mut grid = DetailsGrid;
    grid.render(frame, chunks[6], DetailsGridProps { view });
}

/// Condition icon next to the big temperature
fn render_hero(frame: &mut Frame, area: Rect, view: &ReportView) {
    let [icon_area, temp_area] = Layout::horizontal([
        Constraint::Length(ICON_WIDTH),
        Constraint::Max(30),
    ])
    .flex(Flex::Center)
    .areas(area);

    if let Some(condition) = view.condition {
        match sprites::weather_sprite(condition, icon_area.height) {
            Some(art) => {
                let [sprite_area] = Layout::vertical([Constraint::Length(sprites::SPRITE_HEIGHT)])
                    .flex(Flex::Center)
                    .areas(icon_area);
                frame.render_widget(
                    Paragraph::new(art).alignment(Alignment::Center),
                    sprite_area,
                );
            }
            None => {
                let emoji = Line::from(condition.emoji()).centered();
                frame.render_widget(Paragraph::new(emoji), icon_area);
            }
        }
    }

    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(view.celsius));
    frame.render_widget(ArtBox::new(&renderer, &view.temperature), temp_area);
}

fn temperature_gradient(celsius: f64) -> Fill {
    let (start, end) = match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
