use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::view::ReportView;

/// Two rows of three tiles: feels like, humidity, wind / visibility, pressure, clouds
pub struct DetailsGrid;

pub struct DetailsGridProps<'a> {
    pub view: &'a ReportView,
}

/// Rows used by one tile: icon, label, value.
const TILE_HEIGHT: u16 = 3;
pub const GRID_HEIGHT: u16 = TILE_HEIGHT * 2 + 1;

struct Tile<'a> {
    icon: &'static str,
    label: &'static str,
    value: &'a str,
}

fn tiles(view: &ReportView) -> [[Tile<'_>; 3]; 2] {
    [
        [
            Tile {
                icon: "\u{1f321}",
                label: "Feels Like",
                value: &view.feels_like,
            },
            Tile {
                icon: "\u{1f4a7}",
                label: "Humidity",
                value: &view.humidity,
            },
            Tile {
                icon: "\u{1f4a8}",
                label: "Wind Speed",
                value: &view.wind,
            },
        ],
        [
            Tile {
                icon: "\u{1f441}",
                label: "Visibility",
                value: &view.visibility,
            },
            Tile {
                icon: "\u{23f2}",
                label: "Pressure",
                value: &view.pressure,
            },
            Tile {
                icon: "\u{2601}",
                label: "Cloud cover",
                value: &view.clouds,
            },
        ],
    ]
}

fn render_tile(frame: &mut Frame, area: Rect, tile: &Tile<'_>) {
    let lines = vec![
        Line::from(tile.icon).centered(),
        Line::from(Span::styled(tile.label, Style::default().fg(Color::Gray))).centered(),
        Line::from(Span::styled(
            tile.value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

impl Component<Action> for DetailsGrid {
    type Props<'a> = DetailsGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let rows = Layout::vertical([
            Constraint::Length(TILE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(TILE_HEIGHT),
        ])
        .split(area);

        for (row, row_area) in tiles(props.view).iter().zip([rows[0], rows[2]]) {
            let cols = Layout::horizontal([Constraint::Length(16); 3])
                .flex(Flex::SpaceAround)
                .split(row_area);
            for (tile, col) in row.iter().zip(cols.iter()) {
                render_tile(frame, *col, tile);
            }
        }
    }
}
